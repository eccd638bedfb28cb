//! The value/error-bound pair returned by checked evaluations.

use std::fmt;

use weft_core::Mode;

/// A special-function result: the value and an absolute error bound.
///
/// The bound is an estimate of the evaluation error, not a guarantee
/// about the underlying function's conditioning. Checked variants return
/// this pair; natural variants drop the bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SfResult {
    /// The computed value.
    pub val: f64,
    /// Absolute error bound on `val`.
    pub err: f64,
}

impl SfResult {
    /// Pair a value with its error bound.
    pub fn new(val: f64, err: f64) -> Self {
        Self { val, err }
    }

    /// Apply a precision mode: round the value to the mode's significand
    /// width and floor the error bound at the mode's epsilon.
    ///
    /// `Mode::Double` is the identity. `Single` rounds through `f32`;
    /// `Approx` keeps 11 significand bits (half-precision width) via
    /// `frexp`/`ldexp`.
    #[must_use]
    pub fn quantize(self, mode: Mode) -> Self {
        let val = match mode {
            Mode::Double => self.val,
            Mode::Single => self.val as f32 as f64,
            Mode::Approx => round_significand(self.val, 11),
        };
        let err = self.err.max(mode.relative_epsilon() * val.abs());
        Self { val, err }
    }
}

impl fmt::Display for SfResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.val, self.err)
    }
}

/// Round `x` to `bits` significand bits (round to nearest).
fn round_significand(x: f64, bits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let (fraction, exponent) = libm::frexp(x);
    // fraction is in [0.5, 1), so scaling by 2^bits yields a value whose
    // integer rounding keeps exactly `bits` significant bits.
    let scaled = libm::ldexp(fraction, bits).round();
    libm::ldexp(scaled, exponent - bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_mode_is_identity() {
        let r = SfResult::new(0.123456789012345, 1e-18);
        let q = r.quantize(Mode::Double);
        assert_eq!(q.val, r.val);
        // The bound is floored at double epsilon.
        assert!(q.err >= f64::EPSILON * r.val.abs());
    }

    #[test]
    fn single_mode_rounds_through_f32() {
        let r = SfResult::new(std::f64::consts::PI, 0.0).quantize(Mode::Single);
        assert_eq!(r.val, std::f64::consts::PI as f32 as f64);
        assert!(r.err >= f32::EPSILON as f64 * r.val.abs());
    }

    #[test]
    fn approx_mode_keeps_eleven_bits() {
        let r = SfResult::new(std::f64::consts::PI, 0.0).quantize(Mode::Approx);
        // Within half-precision epsilon of the true value.
        assert!((r.val - std::f64::consts::PI).abs() <= 9.765_625e-4 * std::f64::consts::PI);
        // And exactly representable in 11 significand bits: scaling the
        // fraction by 2^11 yields an integer.
        let (fraction, _) = libm::frexp(r.val);
        let scaled = libm::ldexp(fraction, 11);
        assert_eq!(scaled, scaled.round());
    }

    #[test]
    fn quantize_preserves_zero_and_sign() {
        assert_eq!(SfResult::new(0.0, 0.0).quantize(Mode::Approx).val, 0.0);
        let neg = SfResult::new(-1.5, 0.0).quantize(Mode::Approx);
        assert_eq!(neg.val, -1.5);
    }

    #[test]
    fn display_shows_value_and_bound() {
        let s = SfResult::new(1.5, 0.25).to_string();
        assert!(s.contains("1.5") && s.contains("0.25"));
    }
}
