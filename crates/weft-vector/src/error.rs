//! Vector operation error types.

use std::error::Error;
use std::fmt;

use weft_block::BlockError;
use weft_core::TypeTag;

/// Errors from vector construction, access, and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// The underlying block layer could not satisfy an allocation.
    Allocation(
        /// The block-layer failure.
        BlockError,
    ),
    /// Element index outside `[0, len)`.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The vector's length.
        len: usize,
    },
    /// Operand lengths differ in an element-wise operation.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// The operation would require widening the receiver's element type.
    ///
    /// Raised by item assignment of a value that does not coerce
    /// losslessly, and by in-place addition whose result tag exceeds the
    /// receiver's tag. Storage type is never changed in place.
    TypeCapacity {
        /// The receiver's element type.
        tag: TypeTag,
        /// The tag the operation would require.
        value_tag: TypeTag,
    },
    /// The vector is a shared view over a caller-managed block; writes
    /// go through owned vectors only.
    NotWritable,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(e) => write!(f, "allocation failed: {e}"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for vector of length {len}")
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "length mismatch: {left} vs {right}")
            }
            Self::TypeCapacity { tag, value_tag } => {
                write!(f, "{value_tag} result does not fit {tag} storage")
            }
            Self::NotWritable => write!(f, "shared vector is not writable"),
        }
    }
}

impl Error for VectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BlockError> for VectorError {
    fn from(e: BlockError) -> Self {
        match e {
            BlockError::IndexOutOfBounds { index, len } => Self::OutOfBounds { index, len },
            BlockError::TagMismatch { tag, value_tag } => Self::TypeCapacity { tag, value_tag },
            other => Self::Allocation(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_bounds_error_maps_to_vector_bounds() {
        let e: VectorError = BlockError::IndexOutOfBounds { index: 4, len: 2 }.into();
        assert_eq!(e, VectorError::OutOfBounds { index: 4, len: 2 });
    }

    #[test]
    fn block_tag_error_maps_to_type_capacity() {
        let e: VectorError = BlockError::TagMismatch {
            tag: TypeTag::Real64,
            value_tag: TypeTag::Complex128,
        }
        .into();
        assert_eq!(
            e,
            VectorError::TypeCapacity {
                tag: TypeTag::Real64,
                value_tag: TypeTag::Complex128,
            }
        );
    }

    #[test]
    fn allocation_error_keeps_its_source() {
        let inner = BlockError::AllocationFailed {
            requested_bytes: 64,
        };
        let e: VectorError = inner.into();
        assert_eq!(e, VectorError::Allocation(inner));
        assert!(Error::source(&e).is_some());
    }
}
