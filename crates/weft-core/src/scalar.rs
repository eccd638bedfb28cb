//! Dynamic scalar values carried across the block and vector APIs.

use std::fmt;
use std::ops::{Add, Mul};

use num_complex::Complex64;

use crate::tag::TypeTag;

/// A single element value, tagged with its representation.
///
/// `Scalar` is the exchange type between callers and typed storage: a
/// vector constructed from mixed values receives the lattice join of the
/// value tags, and element reads come back as the variant matching the
/// vector's tag.
///
/// Equality compares values after promotion to the joined tag, so
/// `Scalar::Real(2.0)` equals `Scalar::Complex(2+0i)`.
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    /// A double-precision real value.
    Real(f64),
    /// A double-precision complex value.
    Complex(Complex64),
}

impl Scalar {
    /// The tag of this value's representation.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Real(_) => TypeTag::Real64,
            Self::Complex(_) => TypeTag::Complex128,
        }
    }

    /// The zero value of the given tag.
    pub fn zero(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Real64 => Self::Real(0.0),
            TypeTag::Complex128 => Self::Complex(Complex64::new(0.0, 0.0)),
        }
    }

    /// Widen to a complex value. Always lossless.
    pub fn to_complex(self) -> Complex64 {
        match self {
            Self::Real(x) => Complex64::new(x, 0.0),
            Self::Complex(z) => z,
        }
    }

    /// Narrow to a real value.
    ///
    /// Returns `Some` for a real value, or for a complex value whose
    /// imaginary part is exactly zero. Returns `None` otherwise — a
    /// nonzero imaginary part is never discarded.
    pub fn to_real(self) -> Option<f64> {
        match self {
            Self::Real(x) => Some(x),
            Self::Complex(z) if z.im == 0.0 => Some(z.re),
            Self::Complex(_) => None,
        }
    }

    /// Re-tag this value as `tag`, if the conversion is lossless.
    ///
    /// Widening (`Real64` → `Complex128`) always succeeds. Narrowing
    /// succeeds only when [`to_real`](Self::to_real) does.
    pub fn coerce(self, tag: TypeTag) -> Option<Self> {
        match tag {
            TypeTag::Real64 => self.to_real().map(Self::Real),
            TypeTag::Complex128 => Some(Self::Complex(self.to_complex())),
        }
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

impl From<Complex64> for Scalar {
    fn from(z: Complex64) -> Self {
        Self::Complex(z)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.to_complex() == other.to_complex()
    }
}

impl Add for Scalar {
    type Output = Scalar;

    /// Sum in the joined representation: real + real stays real, any
    /// complex operand produces a complex result.
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a + b),
            (a, b) => Self::Complex(a.to_complex() + b.to_complex()),
        }
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    /// Product in the joined representation, mirroring [`Add`].
    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a * b),
            (a, b) => Self::Complex(a.to_complex() * b.to_complex()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(x) => write!(f, "{x}"),
            Self::Complex(z) => write!(f, "{z}"),
        }
    }
}
