//! The Airy function of the first kind.
//!
//! `libm` carries no Airy evaluator, so this is the one routine computed
//! in-crate: the Maclaurin series of Abramowitz & Stegun §10.4.2 for
//! moderate arguments, and the Poincaré asymptotic expansions (§10.4.59
//! and §10.4.60) beyond. The natural/checked calling convention and the
//! precision [`Mode`] selector match the rest of the crate.

use std::f64::consts::{FRAC_PI_4, PI};

use weft_core::Mode;

use crate::error::SfError;
use crate::result::SfResult;

/// Ai(0) = 3^(-2/3) / Γ(2/3).
const AI_ZERO: f64 = 0.355_028_053_887_817_24;
/// -Ai'(0) = 3^(-1/3) / Γ(1/3).
const AI_PRIME_ZERO: f64 = 0.258_819_403_792_806_8;

/// Crossover between the Maclaurin series and the asymptotic expansions.
const SERIES_CUTOFF: f64 = 5.5;

/// Airy function of the first kind.
pub fn ai(x: f64, mode: Mode) -> Result<f64, SfError> {
    ai_e(x, mode).map(|r| r.val)
}

/// Airy function of the first kind, with error bound.
///
/// For large positive arguments the value decays like
/// `exp(-2/3 x^(3/2))`; once it falls below the representable range of
/// the requested mode the flushed result is reported as
/// [`SfError::Underflow`].
pub fn ai_e(x: f64, mode: Mode) -> Result<SfResult, SfError> {
    if !x.is_finite() {
        return Err(SfError::Domain {
            what: "argument is not finite",
        });
    }
    let (val, err) = if x.abs() <= SERIES_CUTOFF {
        series(x)
    } else if x > 0.0 {
        asymptotic_right(x)
    } else {
        asymptotic_left(x)
    };
    let result = SfResult::new(val, err).quantize(mode);
    if x > 0.0 && result.val.abs() < f64::MIN_POSITIVE {
        return Err(SfError::Underflow { result });
    }
    Ok(result)
}

/// Maclaurin series: Ai(x) = Ai(0) f(x) + Ai'(0) g(x), where f and g are
/// the two ascending series in powers of x^3 (A&S 10.4.2/10.4.3).
fn series(x: f64) -> (f64, f64) {
    let x3 = x * x * x;
    let mut f_term = 1.0_f64;
    let mut g_term = x;
    let mut f_sum = f_term;
    let mut g_sum = g_term;
    let mut f_magnitude = f_term.abs();
    let mut g_magnitude = g_term.abs();
    for k in 0..80 {
        let kf = k as f64;
        f_term *= x3 / ((3.0 * kf + 2.0) * (3.0 * kf + 3.0));
        g_term *= x3 / ((3.0 * kf + 3.0) * (3.0 * kf + 4.0));
        f_sum += f_term;
        g_sum += g_term;
        f_magnitude += f_term.abs();
        g_magnitude += g_term.abs();
        if f_term.abs() <= f64::EPSILON && g_term.abs() <= f64::EPSILON {
            break;
        }
    }
    let val = AI_ZERO * f_sum - AI_PRIME_ZERO * g_sum;
    // The bound scales with the summed term magnitudes, not the result:
    // the two series cancel heavily for x near the positive cutoff, and
    // every term carries rounding from the recurrence that produced it.
    let err = 10.0
        * f64::EPSILON
        * (AI_ZERO * f_magnitude + AI_PRIME_ZERO * g_magnitude + val.abs());
    (val, err)
}

/// Exponentially-decaying expansion for x > 0 (A&S 10.4.59):
/// Ai(x) ~ exp(-ζ) / (2 sqrt(pi) x^(1/4)) · Σ (-1)^k u_k ζ^(-k),
/// with ζ = 2/3 x^(3/2).
fn asymptotic_right(x: f64) -> (f64, f64) {
    let zeta = 2.0 / 3.0 * x * x.sqrt();
    let prefactor = (-zeta).exp() / (2.0 * PI.sqrt() * x.powf(0.25));
    let mut term = 1.0_f64;
    let mut sum = term;
    let mut truncation = 0.0_f64;
    for k in 0..40 {
        let kf = k as f64;
        let next = term * -((6.0 * kf + 1.0) * (6.0 * kf + 5.0)) / (72.0 * (kf + 1.0) * zeta);
        if next.abs() >= term.abs() {
            // Divergence onset: drop this and all later terms.
            truncation = next.abs();
            break;
        }
        sum += next;
        term = next;
        truncation = next.abs();
        if next.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    let val = prefactor * sum;
    let err = prefactor * truncation + (4.0 + 3.0 * zeta) * f64::EPSILON * val.abs();
    (val, err)
}

/// Oscillatory expansion for x < 0 (A&S 10.4.60), with t = -x:
/// Ai(-t) ~ (sin(ζ + π/4) P(ζ) - cos(ζ + π/4) Q(ζ)) / (sqrt(pi) t^(1/4)),
/// where P and Q collect the even and odd u_k ζ^(-k) with the sign
/// pattern + + - - repeating.
fn asymptotic_left(x: f64) -> (f64, f64) {
    let t = -x;
    let zeta = 2.0 / 3.0 * t * t.sqrt();
    let prefactor = 1.0 / (PI.sqrt() * t.powf(0.25));
    let phase = zeta + FRAC_PI_4;

    let mut ratio = 1.0_f64; // u_k / zeta^k
    let mut even_sum = 0.0_f64;
    let mut odd_sum = 0.0_f64;
    let mut truncation = 0.0_f64;
    for k in 0u32..40 {
        let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
        if k % 2 == 0 {
            even_sum += sign * ratio;
        } else {
            odd_sum += sign * ratio;
        }
        let kf = f64::from(k);
        let next = ratio * ((6.0 * kf + 1.0) * (6.0 * kf + 5.0)) / (72.0 * (kf + 1.0) * zeta);
        truncation = next;
        if next >= ratio || next <= f64::EPSILON {
            break;
        }
        ratio = next;
    }

    let val = prefactor * (phase.sin() * even_sum - phase.cos() * odd_sum);
    // The phase argument carries an absolute rounding error of order
    // ζ·ε, which dominates the bound for large |x|.
    let err = prefactor * (truncation + (4.0 + 3.0 * zeta) * f64::EPSILON);
    (val, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_test_utils::{assert_rel_close, mode_tolerance};

    // Reference values correct to 32 significant digits, with a
    // per-point relative tolerance for the double-precision evaluation.
    // Points near the series/asymptotic crossover lose a few digits to
    // cancellation between the two Maclaurin series.
    const AI_REFERENCE: &[(f64, f64, f64)] = &[
        (-500.0, 7.259_012_010_404_114e-2, 1e-9),
        (-50.0, -1.618_814_236_123_209_2e-1, 1e-9),
        (-5.0, 3.507_610_090_241_143_2e-1, 1e-11),
        (-0.300_000_000_000_009_4, 4.309_030_952_855_831e-1, 1e-13),
        (0.699_999_999_999_990_7, 1.891_624_003_981_519_3e-1, 1e-13),
        (1.649_999_999_999_991, 5.831_058_618_720_885_4e-2, 1e-12),
        (2.549_999_999_999_99, 1.446_149_513_295_428_5e-2, 1e-11),
        (3.499_999_999_999_987, 2.584_098_786_989_7e-3, 1e-10),
        (5.0, 1.083_444_281_360_744_2e-4, 5e-8),
        (5.399_999_999_999_98, 4.272_986_169_411_864e-5, 5e-8),
        (10.0, 1.104_753_255_289_868_6e-10, 1e-10),
    ];

    #[test]
    fn ai_at_zero() {
        assert_rel_close(ai(0.0, Mode::Double).unwrap(), AI_ZERO, 1e-15);
    }

    #[test]
    fn ai_matches_reference_values() {
        for &(x, expected, tol) in AI_REFERENCE {
            assert_rel_close(ai(x, Mode::Double).unwrap(), expected, tol);
        }
    }

    #[test]
    fn checked_variant_bounds_the_true_error() {
        for &(x, expected, _) in AI_REFERENCE {
            let r = ai_e(x, Mode::Double).unwrap();
            assert!(
                (r.val - expected).abs() <= r.err,
                "Ai({x}) = {} not within {} of {expected}",
                r.val,
                r.err
            );
            // The bound itself stays meaningful: several significant
            // digits survive at every reference point.
            assert!(r.err <= 1e-6 * expected.abs());
        }
    }

    #[test]
    fn reduced_modes_stay_within_their_tolerance() {
        for mode in [Mode::Double, Mode::Single, Mode::Approx] {
            for &(x, expected, tol) in AI_REFERENCE {
                let r = ai_e(x, mode).unwrap();
                let bound = tol.max(mode_tolerance(mode));
                assert_rel_close(r.val, expected, bound);
                assert!(r.err >= mode.relative_epsilon() * r.val.abs());
            }
        }
    }

    #[test]
    fn natural_and_checked_agree() {
        for &(x, _, _) in AI_REFERENCE {
            assert_eq!(
                ai(x, Mode::Double).unwrap(),
                ai_e(x, Mode::Double).unwrap().val
            );
        }
    }

    #[test]
    fn default_mode_is_double() {
        let x = 1.649_999_999_999_991;
        assert_eq!(
            ai(x, Mode::default()).unwrap(),
            ai(x, Mode::Double).unwrap()
        );
    }

    #[test]
    fn deep_right_tail_underflows() {
        match ai_e(200.0, Mode::Double) {
            Err(SfError::Underflow { result }) => {
                assert_eq!(result.val, 0.0);
            }
            other => panic!("expected underflow, got {other:?}"),
        }
    }

    #[test]
    fn single_mode_underflows_before_double() {
        // Ai(30) is around 3e-49: fine in f64, flushed to zero in f32.
        assert!(ai_e(30.0, Mode::Double).is_ok());
        assert!(matches!(
            ai_e(30.0, Mode::Single),
            Err(SfError::Underflow { .. })
        ));
    }

    #[test]
    fn non_finite_arguments_are_domain_errors() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ai(x, Mode::Double),
                Err(SfError::Domain { .. })
            ));
        }
    }

    #[test]
    fn continuous_across_the_series_cutoff() {
        // The series and asymptotic paths agree where they hand over:
        // stepping 2e-7 across the crossover moves the value by far less
        // than the absolute tolerance, so any path disagreement shows.
        use weft_test_utils::assert_abs_close;
        for &cutoff in &[SERIES_CUTOFF, -SERIES_CUTOFF] {
            let below = ai(cutoff - 1e-7, Mode::Double).unwrap();
            let above = ai(cutoff + 1e-7, Mode::Double).unwrap();
            assert_abs_close(below, above, 1e-6);
        }
    }
}
