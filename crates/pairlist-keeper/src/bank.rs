//! Asset ledger collaborator.
//!
//! Tracks the asset registry and per-(account, denom) balances inside the
//! same [`KvStore`] as the listing records, so a discarded step also
//! discards its coin movements. All transfers are atomic: either the full
//! amount moves or no balance changes.

use pairlist_types::{Address, DecCoin, DexError, Result};
use rust_decimal::Decimal;

use crate::{
    codec::{load, save},
    keys,
    store::KvStore,
};

/// Balance accounting and coin transfers between accounts and module accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankKeeper;

impl BankKeeper {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add `denom` to the asset registry.
    pub fn register_token(&self, store: &mut dyn KvStore, denom: &str) -> Result<()> {
        store.set(&keys::token_key(denom), &[1])
    }

    /// Whether `denom` is present in the asset registry.
    pub fn token_exists(&self, store: &dyn KvStore, denom: &str) -> Result<bool> {
        store.has(&keys::token_key(denom))
    }

    /// Balance of `denom` held by `address`; zero when never funded.
    pub fn balance(&self, store: &dyn KvStore, address: &Address, denom: &str) -> Result<Decimal> {
        Ok(load(store, &keys::balance_key(address.as_str(), denom))?.unwrap_or(Decimal::ZERO))
    }

    fn set_balance(
        &self,
        store: &mut dyn KvStore,
        address: &Address,
        denom: &str,
        amount: Decimal,
    ) -> Result<()> {
        let key = keys::balance_key(address.as_str(), denom);
        if amount.is_zero() {
            store.remove(&key)
        } else {
            save(store, &key, &amount)
        }
    }

    /// Credit newly issued coins to `address` (genesis funding, tests).
    pub fn mint(&self, store: &mut dyn KvStore, address: &Address, coin: &DecCoin) -> Result<()> {
        ensure_non_negative(coin)?;
        let current = self.balance(store, address, &coin.denom)?;
        self.set_balance(store, address, &coin.denom, current + coin.amount)
    }

    /// Move `coin` from `from` to `to`.
    ///
    /// # Errors
    /// - `InvalidAmount` for a negative amount
    /// - `InsufficientCoins` if `from` holds less than `coin`; nothing moves
    pub fn send(
        &self,
        store: &mut dyn KvStore,
        from: &Address,
        to: &Address,
        coin: &DecCoin,
    ) -> Result<()> {
        ensure_non_negative(coin)?;
        if coin.is_zero() || from == to {
            return Ok(());
        }

        let from_balance = self.balance(store, from, &coin.denom)?;
        if from_balance < coin.amount {
            return Err(DexError::InsufficientCoins(format!(
                "{coin} (available {}{})",
                from_balance.normalize(),
                coin.denom
            )));
        }
        let to_balance = self.balance(store, to, &coin.denom)?;

        self.set_balance(store, from, &coin.denom, from_balance - coin.amount)?;
        self.set_balance(store, to, &coin.denom, to_balance + coin.amount)
    }

    /// Account → module account transfer.
    pub fn send_to_module(
        &self,
        store: &mut dyn KvStore,
        from: &Address,
        module: &Address,
        coin: &DecCoin,
    ) -> Result<()> {
        self.send(store, from, module, coin)
    }

    /// Module account → account transfer.
    pub fn send_from_module(
        &self,
        store: &mut dyn KvStore,
        module: &Address,
        to: &Address,
        coin: &DecCoin,
    ) -> Result<()> {
        self.send(store, module, to, coin)
    }

    /// Total supply of `denom` across all accounts.
    pub fn total_supply(&self, store: &dyn KvStore, denom: &str) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for (key, bytes) in store.scan_prefix(&[keys::BALANCE_PREFIX])? {
            let same_denom = key
                .strip_suffix(denom.as_bytes())
                .is_some_and(|rest| rest.last() == Some(&keys::SEPARATOR));
            if same_denom {
                let amount: Decimal = serde_json::from_slice(&bytes)?;
                total += amount;
            }
        }
        Ok(total)
    }
}

fn ensure_non_negative(coin: &DecCoin) -> Result<()> {
    if coin.amount.is_sign_negative() {
        return Err(DexError::InvalidAmount(coin.amount));
    }
    Ok(())
}
