//! Per-call execution context.
//!
//! A `Context` lends the keeper the state store for the duration of one state
//! transition together with the current block height. Nothing is global: the
//! caller owns the store and decides how long a context lives.

use crate::store::KvStore;
use crate::types::BlockHeight;

pub struct Context<'a, S: KvStore + ?Sized> {
    store: &'a mut S,
    block_height: BlockHeight,
}

impl<'a, S: KvStore + ?Sized> Context<'a, S> {
    pub fn new(store: &'a mut S, block_height: BlockHeight) -> Self {
        Context { store, block_height }
    }

    /// Height of the block being processed. Callers add a recipe interval to
    /// this to schedule an execution; the keeper itself never reads it.
    pub fn block_height(&self) -> BlockHeight {
        self.block_height
    }

    /// Same store, new height.
    pub fn with_block_height(self, block_height: BlockHeight) -> Self {
        Context { block_height, ..self }
    }

    pub fn store(&self) -> &S {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut *self.store
    }
}

impl<S: KvStore + ?Sized> std::fmt::Debug for Context<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("block_height", &self.block_height)
            .finish_non_exhaustive()
    }
}
