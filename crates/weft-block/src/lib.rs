//! Typed contiguous block storage for the weft numerical workspace.
//!
//! A [`Block`] is a fixed-size, fixed-type storage region: element count
//! and type tag are set at allocation and never change. Dropping a block
//! releases its storage exactly once — the owned, RAII form of the
//! allocate/release contract.
//!
//! A [`BlockStore`] is the explicit form: callers that manage block
//! lifetime by hand allocate through the store and release through it.
//! Handles carry a slot index and a generation counter, so a released or
//! never-issued handle is detected and reported as
//! [`BlockError::StaleHandle`] instead of corrupting memory. Shared
//! read-only views ([`SharedBlock`]) keep a released block's storage
//! alive until the last view drops.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod config;
pub mod error;
pub mod store;

// Public re-exports for the primary API surface.
pub use block::{Block, ZeroInit};
pub use config::StoreConfig;
pub use error::BlockError;
pub use store::{BlockHandle, BlockStore, SharedBlock};
