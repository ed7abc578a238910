//! Typed access to listing-module records.
//!
//! The [`Keeper`] holds no ledger state of its own. Every method takes the
//! store handle explicitly, so each step reads committed (or step-buffered)
//! state and nothing is cached across steps.

use pairlist_types::{
    Address, ConfirmOwnership, DexError, DexOperator, KeeperConfig, Params, Result, TokenPair,
};

use crate::{
    bank::BankKeeper,
    codec::{load, save},
    keys,
    store::KvStore,
};

/// Record accessor for token pairs, ownership proposals, operators and params.
#[derive(Debug, Clone, Default)]
pub struct Keeper {
    config: KeeperConfig,
    bank: BankKeeper,
}

impl Keeper {
    #[must_use]
    pub fn new(config: KeeperConfig) -> Self {
        Self {
            config,
            bank: BankKeeper::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// The asset ledger collaborator.
    #[must_use]
    pub fn bank(&self) -> &BankKeeper {
        &self.bank
    }

    /// Module account that receives fees.
    #[must_use]
    pub fn fee_collector(&self) -> &Address {
        &self.config.fee_collector
    }

    // -----------------------------------------------------------------
    // Params
    // -----------------------------------------------------------------

    /// Stored params, or the defaults if none were ever written.
    pub fn params(&self, store: &dyn KvStore) -> Result<Params> {
        Ok(load(store, keys::PARAMS_KEY)?.unwrap_or_default())
    }

    pub fn set_params(&self, store: &mut dyn KvStore, params: &Params) -> Result<()> {
        params.validate()?;
        save(store, keys::PARAMS_KEY, params)
    }

    // -----------------------------------------------------------------
    // Token pairs
    // -----------------------------------------------------------------

    pub fn token_pair(&self, store: &dyn KvStore, product: &str) -> Result<Option<TokenPair>> {
        load(store, &keys::token_pair_key(product))
    }

    /// Whether `product` or its reversed ordering is listed.
    pub fn pair_listed_either_way(&self, store: &dyn KvStore, base: &str, quote: &str) -> Result<bool> {
        let forward = keys::token_pair_key(&pairlist_types::product_id(base, quote));
        let reverse = keys::token_pair_key(&pairlist_types::product_id(quote, base));
        Ok(store.has(&forward)? || store.has(&reverse)?)
    }

    /// Persist a newly listed pair: assign the next id, store the record and
    /// add it to the owner's index.
    ///
    /// # Errors
    /// `TokenPairExists` if either ordering is already stored.
    pub fn save_token_pair(&self, store: &mut dyn KvStore, pair: &mut TokenPair) -> Result<()> {
        if self.pair_listed_either_way(store, &pair.base_asset_symbol, &pair.quote_asset_symbol)? {
            return Err(DexError::TokenPairExists {
                base: pair.base_asset_symbol.clone(),
                quote: pair.quote_asset_symbol.clone(),
            });
        }

        let max_id: u64 = load(store, keys::MAX_TOKEN_PAIR_ID_KEY)?.unwrap_or(0);
        if pair.id == 0 {
            pair.id = max_id + 1;
        }
        save(store, keys::MAX_TOKEN_PAIR_ID_KEY, &max_id.max(pair.id))?;

        let product = pair.product();
        save(store, &keys::token_pair_key(&product), &*pair)?;
        store.set(
            &keys::user_token_pair_key(pair.owner.as_str(), &product),
            &[1],
        )?;

        tracing::debug!(product = %product, id = pair.id, owner = %pair.owner, "Token pair saved");
        Ok(())
    }

    /// Overwrite an existing pair record in place.
    pub fn update_token_pair(&self, store: &mut dyn KvStore, product: &str, pair: &TokenPair) -> Result<()> {
        save(store, &keys::token_pair_key(product), pair)
    }

    /// Move `product` from `old_owner`'s index to `new_owner`'s.
    pub fn update_user_token_pair(
        &self,
        store: &mut dyn KvStore,
        product: &str,
        old_owner: &Address,
        new_owner: &Address,
    ) -> Result<()> {
        store.remove(&keys::user_token_pair_key(old_owner.as_str(), product))?;
        store.set(&keys::user_token_pair_key(new_owner.as_str(), product), &[1])
    }

    // -----------------------------------------------------------------
    // Ownership proposals
    // -----------------------------------------------------------------

    pub fn confirm_ownership(&self, store: &dyn KvStore, product: &str) -> Result<Option<ConfirmOwnership>> {
        load(store, &keys::confirm_ownership_key(product))
    }

    /// Store a proposal, replacing any previous (expired) one for the product.
    pub fn set_confirm_ownership(&self, store: &mut dyn KvStore, record: &ConfirmOwnership) -> Result<()> {
        save(store, &keys::confirm_ownership_key(&record.product), record)
    }

    pub fn delete_confirm_ownership(&self, store: &mut dyn KvStore, product: &str) -> Result<()> {
        store.remove(&keys::confirm_ownership_key(product))
    }

    /// Garbage-collect an expired proposal. The removal is a prune, so it
    /// persists even though the step that observed the expiry fails.
    pub fn sweep_confirm_ownership(&self, store: &mut dyn KvStore, product: &str) -> Result<()> {
        tracing::debug!(product, "Sweeping expired ownership proposal");
        store.prune(&keys::confirm_ownership_key(product))
    }

    // -----------------------------------------------------------------
    // Operators
    // -----------------------------------------------------------------

    pub fn operator(&self, store: &dyn KvStore, address: &Address) -> Result<Option<DexOperator>> {
        load(store, &keys::operator_key(address.as_str()))
    }

    pub fn set_operator(&self, store: &mut dyn KvStore, operator: &DexOperator) -> Result<()> {
        save(store, &keys::operator_key(operator.address.as_str()), operator)
    }
}
