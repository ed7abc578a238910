//! Pair escrow: deposits held against a listed pair.
//!
//! Deposits move coins from the pair owner into the escrow module account
//! and raise `TokenPair::deposits`; withdrawals do the reverse. The
//! transfer-pending gate on deposits lives in the handler, not here, so that
//! the ownership-transfer step can withdraw through this same path.

use pairlist_types::{Address, DecCoin, DexError, Result, TokenPair};

use crate::{keeper::Keeper, store::KvStore};

impl Keeper {
    /// Deposit `amount` from `from` into the pair's escrow.
    ///
    /// # Errors
    /// - `TokenPairNotFound` if the product is not listed
    /// - `Unauthorized` if `from` is not the pair owner
    /// - `InvalidDenom` / `InvalidAmount` for a non-native or non-positive amount
    /// - `InsufficientCoins` if `from` cannot fund the deposit
    pub fn deposit(
        &self,
        store: &mut dyn KvStore,
        product: &str,
        from: &Address,
        amount: &DecCoin,
    ) -> Result<TokenPair> {
        let mut pair = self.owned_pair(store, product, from)?;
        self.check_escrow_amount(amount)?;

        self.bank()
            .send_to_module(store, from, &self.config().escrow_account, amount)?;

        pair.deposits.amount += amount.amount;
        self.update_token_pair(store, product, &pair)?;

        tracing::debug!(product, depositor = %from, amount = %amount, total = %pair.deposits, "Escrow deposit");
        Ok(pair)
    }

    /// Withdraw `amount` from the pair's escrow back to `to`.
    ///
    /// # Errors
    /// - `TokenPairNotFound` if the product is not listed
    /// - `Unauthorized` if `to` is not the pair owner
    /// - `InvalidDenom` / `InvalidAmount` for a non-native or non-positive amount
    /// - `InsufficientDeposits` if the escrow holds less than `amount`
    pub fn withdraw(
        &self,
        store: &mut dyn KvStore,
        product: &str,
        to: &Address,
        amount: &DecCoin,
    ) -> Result<TokenPair> {
        let mut pair = self.owned_pair(store, product, to)?;
        self.check_escrow_amount(amount)?;

        if pair.deposits.amount < amount.amount {
            return Err(DexError::InsufficientDeposits {
                needed: amount.amount,
                available: pair.deposits.amount,
            });
        }

        self.bank()
            .send_from_module(store, &self.config().escrow_account, to, amount)?;

        pair.deposits.amount -= amount.amount;
        self.update_token_pair(store, product, &pair)?;

        tracing::debug!(product, owner = %to, amount = %amount, total = %pair.deposits, "Escrow withdraw");
        Ok(pair)
    }

    fn owned_pair(&self, store: &dyn KvStore, product: &str, who: &Address) -> Result<TokenPair> {
        let pair = self
            .token_pair(store, product)?
            .ok_or_else(|| DexError::TokenPairNotFound(product.to_string()))?;
        if pair.owner != *who {
            return Err(DexError::Unauthorized(who.clone()));
        }
        Ok(pair)
    }

    fn check_escrow_amount(&self, amount: &DecCoin) -> Result<()> {
        if amount.denom != self.config().deposit_denom {
            return Err(DexError::InvalidDenom {
                expected: self.config().deposit_denom.clone(),
                actual: amount.denom.clone(),
            });
        }
        if !amount.is_positive() {
            return Err(DexError::InvalidAmount(amount.amount));
        }
        Ok(())
    }
}
