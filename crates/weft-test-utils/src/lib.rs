//! Test utilities for weft development.
//!
//! Tolerance assertions shared by the workspace's unit and integration
//! tests, and the per-mode tolerance model used by the special-function
//! reference tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use weft_core::Mode;

/// Headroom multiplier applied on top of a mode's machine epsilon when
/// checking special-function results against reference values.
pub const TOLERANCE_FUDGE: f64 = 100.0;

/// Relative tolerance for checking a result evaluated at `mode` against
/// a full-precision reference value.
pub fn mode_tolerance(mode: Mode) -> f64 {
    TOLERANCE_FUDGE * mode.relative_epsilon()
}

/// Assert that `actual` is within `rel_tol` of `expected`, relative to
/// the magnitude of `expected`.
///
/// A zero expected value degrades to an absolute comparison against
/// `rel_tol` itself.
#[track_caller]
pub fn assert_rel_close(actual: f64, expected: f64, rel_tol: f64) {
    let bound = if expected == 0.0 {
        rel_tol
    } else {
        rel_tol * expected.abs()
    };
    assert!(
        (actual - expected).abs() <= bound,
        "{actual} not within {rel_tol} (relative) of {expected}"
    );
}

/// Assert that `actual` is within `abs_tol` of `expected`.
#[track_caller]
pub fn assert_abs_close(actual: f64, expected: f64, abs_tol: f64) {
    assert!(
        (actual - expected).abs() <= abs_tol,
        "{actual} not within {abs_tol} (absolute) of {expected}"
    );
}
