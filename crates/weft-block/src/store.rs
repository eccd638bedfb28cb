//! The explicit allocate/release surface: a slot+generation block store.
//!
//! Callers that manage block lifetime by hand allocate through a
//! [`BlockStore`] and must release each handle exactly once. Handles are
//! generation-scoped: releasing a handle bumps its slot's generation, so
//! a double release or a foreign handle is detected and reported as
//! [`BlockError::StaleHandle`] instead of touching freed storage.

use std::fmt;
use std::sync::Arc;

use weft_core::TypeTag;

use crate::block::{Block, ZeroInit};
use crate::config::StoreConfig;
use crate::error::BlockError;

/// A reference-counted, read-only view of a store-managed block.
///
/// Handed out by [`BlockStore::share`]. Views keep the storage alive
/// past [`BlockStore::release`]; the handle itself is dead the moment
/// the store releases it.
pub type SharedBlock = Arc<Block>;

/// Opaque handle to a block owned by a [`BlockStore`].
///
/// Encoding: upper 32 bits slot index, lower 32 bits generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct BlockHandle(u64);

impl BlockHandle {
    fn encode(slot: u32, generation: u32) -> Self {
        Self(((slot as u64) << 32) | (generation as u64))
    }

    fn decode(self) -> (u32, u32) {
        ((self.0 >> 32) as u32, self.0 as u32)
    }
}

impl fmt::Display for BlockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.decode();
        write!(f, "(slot={slot}, gen={generation})")
    }
}

struct Slot {
    generation: u32,
    block: Option<SharedBlock>,
}

/// Owner of manually-managed blocks, with exactly-once release discipline.
///
/// Slots are reused via a free list; generation counters increment on
/// release so stale handles stay detectable. A slot whose generation
/// wraps back to zero is permanently retired rather than recycled, which
/// rules out handle resurrection after counter wraparound.
pub struct BlockStore {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    config: StoreConfig,
    live_blocks: u32,
    allocated_elements: usize,
}

impl BlockStore {
    /// Create an empty store with the default [`StoreConfig`].
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with explicit limits.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            config,
            live_blocks: 0,
            allocated_elements: 0,
        }
    }

    /// Allocate a block of `len` elements of type `tag`.
    ///
    /// Zero-length allocations are valid. Fails when either store budget
    /// would be exceeded, or when the underlying allocation fails.
    pub fn alloc(
        &mut self,
        len: usize,
        tag: TypeTag,
        init: ZeroInit,
    ) -> Result<BlockHandle, BlockError> {
        if self.live_blocks >= self.config.max_blocks {
            return Err(BlockError::TooManyBlocks {
                max_blocks: self.config.max_blocks,
            });
        }
        let available = self.config.max_total_elements - self.allocated_elements;
        if len > available {
            return Err(BlockError::CapacityExceeded {
                requested: len,
                capacity: available,
            });
        }

        let block = Arc::new(Block::try_new(len, tag, init)?);
        self.live_blocks += 1;
        self.allocated_elements += len;

        let handle = if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.block = Some(block);
            BlockHandle::encode(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                block: Some(block),
            });
            BlockHandle::encode(slot_idx, 0)
        };
        Ok(handle)
    }

    /// Release the block behind `handle`.
    ///
    /// Exactly-once: a second release of the same handle fails with
    /// [`BlockError::StaleHandle`] and changes nothing. Storage is
    /// reclaimed once the last [`SharedBlock`] view also drops; the
    /// store's accounting is reduced immediately either way.
    pub fn release(&mut self, handle: BlockHandle) -> Result<(), BlockError> {
        let slot = self.live_slot_mut(handle)?;
        let block = slot.block.take().expect("live slot holds a block");
        slot.generation = slot.generation.wrapping_add(1);
        // A wrapped generation would collide with stale handles from the
        // slot's first epoch; retire the slot instead of recycling it.
        let recycle = slot.generation != 0;
        if recycle {
            let (slot_idx, _) = handle.decode();
            self.free_list.push(slot_idx);
        }
        self.live_blocks -= 1;
        self.allocated_elements -= block.len();
        Ok(())
    }

    /// Shared access to the block behind `handle`.
    pub fn get(&self, handle: BlockHandle) -> Result<&Block, BlockError> {
        let slot = self.live_slot(handle)?;
        Ok(slot.block.as_deref().expect("live slot holds a block"))
    }

    /// Mutable access to the block behind `handle`.
    ///
    /// Fails with [`BlockError::InUse`] while any [`SharedBlock`] view
    /// of it is alive.
    pub fn get_mut(&mut self, handle: BlockHandle) -> Result<&mut Block, BlockError> {
        let slot = self.live_slot_mut(handle)?;
        let arc = slot.block.as_mut().expect("live slot holds a block");
        Arc::get_mut(arc).ok_or(BlockError::InUse { handle })
    }

    /// Hand out a reference-counted read-only view of the block.
    pub fn share(&self, handle: BlockHandle) -> Result<SharedBlock, BlockError> {
        let slot = self.live_slot(handle)?;
        Ok(Arc::clone(slot.block.as_ref().expect("live slot holds a block")))
    }

    /// Number of currently live (unreleased) blocks.
    pub fn live_blocks(&self) -> usize {
        self.live_blocks as usize
    }

    /// Total elements across all live blocks.
    pub fn allocated_elements(&self) -> usize {
        self.allocated_elements
    }

    fn live_slot(&self, handle: BlockHandle) -> Result<&Slot, BlockError> {
        let (slot_idx, generation) = handle.decode();
        let stale = BlockError::StaleHandle { handle };
        let slot = self.slots.get(slot_idx as usize).ok_or(stale)?;
        if slot.generation != generation || slot.block.is_none() {
            return Err(stale);
        }
        Ok(slot)
    }

    fn live_slot_mut(&mut self, handle: BlockHandle) -> Result<&mut Slot, BlockError> {
        let (slot_idx, generation) = handle.decode();
        let stale = BlockError::StaleHandle { handle };
        let slot = self.slots.get_mut(slot_idx as usize).ok_or(stale)?;
        if slot.generation != generation || slot.block.is_none() {
            return Err(stale);
        }
        Ok(slot)
    }
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new()
    }
}
