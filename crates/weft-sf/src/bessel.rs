//! Bessel functions of the first kind, delegated to `libm`.
//!
//! `J0`, `J1`, and integer-order `Jn`. Each comes in a natural form
//! returning the bare value and a checked `_e` form returning the value
//! with an absolute error bound. Negative orders are normalized through
//! the reflection `J_{-n}(x) = (-1)^n J_n(x)` before delegation.

use std::f64::consts::PI;

use crate::error::SfError;
use crate::result::SfResult;

/// Zeroth-order Bessel function of the first kind.
pub fn j0(x: f64) -> Result<f64, SfError> {
    j0_e(x).map(|r| r.val)
}

/// Zeroth-order Bessel function of the first kind, with error bound.
pub fn j0_e(x: f64) -> Result<SfResult, SfError> {
    check_argument(x)?;
    finish(x, libm::j0(x), 1)
}

/// First-order Bessel function of the first kind.
pub fn j1(x: f64) -> Result<f64, SfError> {
    j1_e(x).map(|r| r.val)
}

/// First-order Bessel function of the first kind, with error bound.
pub fn j1_e(x: f64) -> Result<SfResult, SfError> {
    check_argument(x)?;
    finish(x, libm::j1(x), 1)
}

/// Bessel function of the first kind of integer order `n`.
pub fn jn(n: i32, x: f64) -> Result<f64, SfError> {
    jn_e(n, x).map(|r| r.val)
}

/// Bessel function of the first kind of integer order `n`, with error
/// bound.
pub fn jn_e(n: i32, x: f64) -> Result<SfResult, SfError> {
    check_argument(x)?;
    // J_{-n}(x) = (-1)^n J_n(x).
    let sign = if n < 0 && n % 2 != 0 { -1.0 } else { 1.0 };
    // |i32::MIN| does not fit an i32; the saturated order is
    // indistinguishable at double precision (J_n is zero there).
    let order = n.unsigned_abs().min(i32::MAX as u32);
    finish(x, sign * libm::jn(order as i32, x), order.saturating_add(1))
}

fn check_argument(x: f64) -> Result<(), SfError> {
    if !x.is_finite() {
        return Err(SfError::Domain {
            what: "argument is not finite",
        });
    }
    Ok(())
}

/// Attach the error-bound estimate and flag total precision loss.
///
/// The bound has two parts: rounding in the evaluation itself, and the
/// phase error from argument reduction, which grows linearly with `|x|`
/// against the envelope `sqrt(2 / (pi x))`. Once the phase is
/// unresolvable (`|x|` of order `1/epsilon`) no significant digits
/// remain and the best-effort result is reported as precision loss.
fn finish(x: f64, val: f64, order_factor: u32) -> Result<SfResult, SfError> {
    let ax = x.abs();
    let envelope = if ax > 1.0 { (2.0 / (PI * ax)).sqrt() } else { 1.0 };
    let err =
        f64::EPSILON * f64::from(order_factor) * (2.0 * val.abs() + envelope * (1.0 + ax));
    let result = SfResult::new(val, err);
    if ax > 1.0 / f64::EPSILON {
        return Err(SfError::PrecisionLoss { result });
    }
    Ok(result)
}
