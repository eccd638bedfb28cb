//! Precision mode selector for special-function evaluation.

/// Accuracy level requested from a special-function evaluation.
///
/// Three levels trade accuracy for speed on the calls that accept one.
/// The default is always the highest-precision level. The levels
/// correspond to IEEE double, single, and half significand widths;
/// [`relative_epsilon`](Mode::relative_epsilon) gives the relative
/// precision each level guarantees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Full double precision (the default).
    #[default]
    Double,
    /// Single precision: relative accuracy around `1.2e-7`.
    Single,
    /// Crude approximation: relative accuracy around `1e-3`.
    Approx,
}

impl Mode {
    /// Machine epsilon of the significand width this mode evaluates to.
    pub fn relative_epsilon(self) -> f64 {
        match self {
            // 2^-52, 2^-23, 2^-10.
            Self::Double => f64::EPSILON,
            Self::Single => f32::EPSILON as f64,
            Self::Approx => 9.765_625e-4,
        }
    }
}
