//! Scalar element type tags and the two-level coercion lattice.

use std::fmt;

/// Selects the native scalar representation of a block or vector element.
///
/// The two tags form a lattice ordered `Real64 < Complex128`: every real
/// value embeds losslessly into a complex one, never the reverse.
/// [`TypeTag::join`] computes the least upper bound, which is the element
/// type produced when operands of the given tags meet in a binary
/// operation or a mixed-value construction.
///
/// The derived `Ord` follows the lattice order, so `join` is `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// Double-precision real (`f64`).
    Real64,
    /// Double-precision complex (a real/imaginary `f64` pair).
    Complex128,
}

impl TypeTag {
    /// Least upper bound of two tags on the coercion lattice.
    ///
    /// Commutative, associative, and idempotent, with `Real64` as the
    /// identity: mixing a real operand into anything leaves the other
    /// tag unchanged, and any complex operand forces `Complex128`.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether a value of this tag embeds losslessly into `other`.
    pub fn widens_to(self, other: Self) -> bool {
        self <= other
    }

    /// Storage size of one element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::Real64 => 8,
            Self::Complex128 => 16,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real64 => write!(f, "real64"),
            Self::Complex128 => write!(f, "complex128"),
        }
    }
}
