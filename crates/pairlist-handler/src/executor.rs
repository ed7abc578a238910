//! Step executor. One command per step, applied all-or-nothing.
//!
//! The executor owns the committed ledger. Each [`Executor::deliver`] runs
//! the dispatcher against a [`CacheStore`] overlay; the overlay is committed
//! when the handler succeeds and discarded when it fails, so a failed step
//! leaves no trace beyond pruned stale records.

use pairlist_keeper::{CacheStore, Keeper, MemoryStore};
use pairlist_types::{Address, DecCoin, GenesisState, Msg, Response, Result, StepContext};

use crate::dispatcher::dispatch;

/// Committed ledger plus the keeper that interprets it.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    keeper: Keeper,
    store: MemoryStore,
}

impl Executor {
    #[must_use]
    pub fn new(keeper: Keeper) -> Self {
        Self {
            keeper,
            store: MemoryStore::new(),
        }
    }

    /// Executor with `genesis` already written to its store.
    pub fn from_genesis(keeper: Keeper, genesis: &GenesisState) -> Result<Self> {
        let mut executor = Self::new(keeper);
        executor.keeper.init_genesis(&mut executor.store, genesis)?;
        Ok(executor)
    }

    /// Execute one command and make its effects durable only on success.
    ///
    /// # Errors
    /// The dispatcher's failure, unchanged. A fault while committing or
    /// discarding the overlay is returned as a store error.
    pub fn deliver(&mut self, ctx: &StepContext, msg: &Msg) -> Result<Response> {
        let mut cache = CacheStore::new(&mut self.store);
        let result = dispatch(ctx, &self.keeper, &mut cache, msg);

        match result {
            Ok(response) => {
                let writes = cache.pending_len();
                cache.commit()?;
                tracing::debug!(height = ctx.block_height, msg = msg.name(), writes, "Step committed");
                Ok(response)
            }
            Err(err) => {
                cache.discard()?;
                tracing::debug!(height = ctx.block_height, msg = msg.name(), error = %err, "Step rolled back");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn keeper(&self) -> &Keeper {
        &self.keeper
    }

    /// Committed ledger state.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Direct access to the committed store, bypassing step atomicity.
    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }

    /// Digest of the committed ledger.
    pub fn state_root(&self) -> Result<[u8; 32]> {
        pairlist_keeper::state_root(&self.store)
    }

    /// Register `denom` with the asset ledger.
    pub fn register_token(&mut self, denom: &str) -> Result<()> {
        self.keeper.bank().register_token(&mut self.store, denom)
    }

    /// Credit `coin` to `address` outside any step.
    pub fn mint(&mut self, address: &Address, coin: &DecCoin) -> Result<()> {
        self.keeper.bank().mint(&mut self.store, address, coin)
    }
}
