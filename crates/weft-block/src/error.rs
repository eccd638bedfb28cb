//! Block-layer error types.

use std::error::Error;
use std::fmt;

use weft_core::TypeTag;

use crate::store::BlockHandle;

/// Errors from block allocation, access, and the block store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockError {
    /// The allocator could not satisfy the requested size.
    AllocationFailed {
        /// Number of bytes that could not be allocated.
        requested_bytes: usize,
    },
    /// The store's element budget would be exceeded.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements still available under the budget.
        capacity: usize,
    },
    /// The store's live-block budget is exhausted.
    TooManyBlocks {
        /// The configured maximum number of live blocks.
        max_blocks: u32,
    },
    /// Element index outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The block's length.
        len: usize,
    },
    /// A value does not coerce losslessly to the block's element type.
    TagMismatch {
        /// The block's element type.
        tag: TypeTag,
        /// The tag of the rejected value.
        value_tag: TypeTag,
    },
    /// A handle that was already released, or never issued by this store.
    StaleHandle {
        /// The offending handle.
        handle: BlockHandle,
    },
    /// The block has live shared views and cannot be mutably borrowed.
    InUse {
        /// The handle of the shared block.
        handle: BlockHandle,
    },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "block allocation of {requested_bytes} bytes failed")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "store capacity exceeded: requested {requested} elements, {capacity} available"
                )
            }
            Self::TooManyBlocks { max_blocks } => {
                write!(f, "store already holds the maximum of {max_blocks} blocks")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for block of length {len}")
            }
            Self::TagMismatch { tag, value_tag } => {
                write!(f, "{value_tag} value does not fit a {tag} block")
            }
            Self::StaleHandle { handle } => {
                write!(f, "stale block handle {handle}")
            }
            Self::InUse { handle } => {
                write!(f, "block {handle} has live shared views")
            }
        }
    }
}

impl Error for BlockError {}
