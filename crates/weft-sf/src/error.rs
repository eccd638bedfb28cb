//! Special-function error conditions.

use std::error::Error;
use std::fmt;

use crate::result::SfResult;

/// Error conditions reported by special-function evaluation.
///
/// Conditions that still produce a usable best-effort value
/// (underflow, overflow, precision loss) carry it, with its bound, in
/// the error; a domain error has no value to report. Both calling
/// variants surface the same conditions — the natural form never papers
/// over them with a poisoned return value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SfError {
    /// The argument lies outside the function's domain.
    Domain {
        /// What was wrong with the argument.
        what: &'static str,
    },
    /// The true value is too small for the representation.
    Underflow {
        /// Best-effort (flushed) result.
        result: SfResult,
    },
    /// The true value is too large for the representation.
    Overflow {
        /// Best-effort (saturated) result.
        result: SfResult,
    },
    /// The error bound swamps the value; no significant digits remain.
    PrecisionLoss {
        /// Best-effort result, with its (dominating) bound.
        result: SfResult,
    },
}

impl fmt::Display for SfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain { what } => write!(f, "domain error: {what}"),
            Self::Underflow { result } => write!(f, "underflow: best effort {result}"),
            Self::Overflow { result } => write!(f, "overflow: best effort {result}"),
            Self::PrecisionLoss { result } => {
                write!(f, "total loss of precision: best effort {result}")
            }
        }
    }
}

impl Error for SfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_best_effort_value() {
        let e = SfError::Underflow {
            result: SfResult::new(0.0, 1e-300),
        };
        assert!(e.to_string().contains("underflow"));

        let e = SfError::Domain {
            what: "argument is NaN",
        };
        assert!(e.to_string().contains("NaN"));
    }
}
