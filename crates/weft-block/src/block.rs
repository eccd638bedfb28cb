//! The fixed-size, fixed-type contiguous storage region.

use num_complex::Complex64;
use weft_core::{Scalar, TypeTag};

use crate::error::BlockError;

/// Whether a fresh allocation is zero-initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroInit {
    /// Every element is the tag's zero value.
    Zeroed,
    /// Contents are unspecified; callers must write before reading.
    ///
    /// The current implementation zero-fills anyway — storage is never
    /// handed out uninitialized — but callers must not rely on it.
    Unspecified,
}

/// A contiguous region of `len` elements of a single scalar type.
///
/// Both the length and the type tag are fixed at allocation: a block is
/// never resized and never changes representation. Element access is
/// bounds-checked, and writes accept only values that coerce losslessly
/// to the block's tag.
///
/// A `Block` owns its storage; dropping it is the exactly-once release.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    data: BlockData,
}

/// Typed backing storage, selected by the block's tag.
#[derive(Clone, Debug, PartialEq)]
enum BlockData {
    Real64(Vec<f64>),
    Complex128(Vec<Complex64>),
}

impl Block {
    /// Allocate a block of `len` elements of type `tag`.
    ///
    /// Allocation failure surfaces as
    /// [`BlockError::AllocationFailed`] rather than aborting.
    pub fn try_new(len: usize, tag: TypeTag, init: ZeroInit) -> Result<Self, BlockError> {
        let fail = || BlockError::AllocationFailed {
            requested_bytes: len.saturating_mul(tag.size_bytes()),
        };
        // ZeroInit::Unspecified still zero-fills: no uninitialized storage.
        let _ = init;
        let data = match tag {
            TypeTag::Real64 => {
                let mut v: Vec<f64> = Vec::new();
                v.try_reserve_exact(len).map_err(|_| fail())?;
                v.resize(len, 0.0);
                BlockData::Real64(v)
            }
            TypeTag::Complex128 => {
                let mut v: Vec<Complex64> = Vec::new();
                v.try_reserve_exact(len).map_err(|_| fail())?;
                v.resize(len, Complex64::new(0.0, 0.0));
                BlockData::Complex128(v)
            }
        };
        Ok(Self { data })
    }

    /// Number of elements. Fixed for the lifetime of the block.
    pub fn len(&self) -> usize {
        match &self.data {
            BlockData::Real64(v) => v.len(),
            BlockData::Complex128(v) => v.len(),
        }
    }

    /// Whether this is a zero-length block.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element type tag. Fixed for the lifetime of the block.
    pub fn tag(&self) -> TypeTag {
        match &self.data {
            BlockData::Real64(_) => TypeTag::Real64,
            BlockData::Complex128(_) => TypeTag::Complex128,
        }
    }

    /// Storage footprint in bytes.
    pub fn size_bytes(&self) -> usize {
        self.len() * self.tag().size_bytes()
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<Scalar, BlockError> {
        self.check_bounds(index)?;
        Ok(match &self.data {
            BlockData::Real64(v) => Scalar::Real(v[index]),
            BlockData::Complex128(v) => Scalar::Complex(v[index]),
        })
    }

    /// Replace the element at `index`.
    ///
    /// The value must coerce losslessly to the block's tag: a real value
    /// widens into a complex block, but a complex value with nonzero
    /// imaginary part is rejected by a real block with
    /// [`BlockError::TagMismatch`]. Neither length nor tag ever changes.
    pub fn set(&mut self, index: usize, value: impl Into<Scalar>) -> Result<(), BlockError> {
        self.check_bounds(index)?;
        let value = value.into();
        match &mut self.data {
            BlockData::Real64(v) => {
                let x = value.to_real().ok_or(BlockError::TagMismatch {
                    tag: TypeTag::Real64,
                    value_tag: value.tag(),
                })?;
                v[index] = x;
            }
            BlockData::Complex128(v) => v[index] = value.to_complex(),
        }
        Ok(())
    }

    /// Set every element to the tag's zero value.
    pub fn fill_zero(&mut self) {
        match &mut self.data {
            BlockData::Real64(v) => v.fill(0.0),
            BlockData::Complex128(v) => v.fill(Complex64::new(0.0, 0.0)),
        }
    }

    /// The real storage slice, if this is a `Real64` block.
    pub fn as_real(&self) -> Option<&[f64]> {
        match &self.data {
            BlockData::Real64(v) => Some(v),
            BlockData::Complex128(_) => None,
        }
    }

    /// The mutable real storage slice, if this is a `Real64` block.
    pub fn as_real_mut(&mut self) -> Option<&mut [f64]> {
        match &mut self.data {
            BlockData::Real64(v) => Some(v),
            BlockData::Complex128(_) => None,
        }
    }

    /// The complex storage slice, if this is a `Complex128` block.
    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match &self.data {
            BlockData::Real64(_) => None,
            BlockData::Complex128(v) => Some(v),
        }
    }

    /// The mutable complex storage slice, if this is a `Complex128` block.
    pub fn as_complex_mut(&mut self) -> Option<&mut [Complex64]> {
        match &mut self.data {
            BlockData::Real64(_) => None,
            BlockData::Complex128(v) => Some(v),
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), BlockError> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(BlockError::IndexOutOfBounds { index, len })
        }
    }
}
