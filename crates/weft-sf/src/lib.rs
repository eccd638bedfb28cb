//! Special functions with dual natural/error-bound calling variants.
//!
//! Every operation has two entry points:
//!
//! - the natural form (`j0`, `ai`, ...) returns the bare value;
//! - the checked form (`j0_e`, `ai_e`, ...) returns an [`SfResult`]
//!   pairing the value with an absolute error bound.
//!
//! Both forms surface the same error conditions — domain errors,
//! underflow, and precision loss are reported through [`SfError`] rather
//! than encoded in a poisoned return value. Conditions that still have a
//! best-effort value carry it inside the error.
//!
//! Bessel J evaluation delegates to `libm`. The Airy functions accept a
//! [`Mode`](weft_core::Mode) selector; sub-double modes quantize the
//! result to the corresponding significand width and widen the bound.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod airy;
pub mod bessel;
pub mod error;
pub mod result;

// Public re-exports for the primary API surface.
pub use error::SfError;
pub use result::SfResult;
