//! Fee settlement.
//!
//! Charges a configured fee from the requester to the fee-collector module
//! account. The charge is atomic: on insufficient funds no balance changes.

use pairlist_types::{Address, DecCoin, Result};

use crate::{keeper::Keeper, store::KvStore};

impl Keeper {
    /// Move `fee` from `payer` to the fee collector.
    ///
    /// # Errors
    /// `InsufficientCoins` if `payer` cannot cover the fee.
    pub fn charge_fee(&self, store: &mut dyn KvStore, payer: &Address, fee: &DecCoin) -> Result<()> {
        self.bank()
            .send_to_module(store, payer, self.fee_collector(), fee)?;
        tracing::debug!(payer = %payer, fee = %fee, "Fee charged");
        Ok(())
    }
}
