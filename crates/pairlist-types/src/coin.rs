//! Coin amounts used for fees and pair deposits.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::NATIVE_TOKEN;

/// Type alias for asset identifiers (e.g., "btc", "usdt", "okt").
pub type Denom = String;

/// A decimal amount of a single denom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: Denom,
    pub amount: Decimal,
}

impl DecCoin {
    #[must_use]
    pub fn new(denom: impl Into<Denom>, amount: Decimal) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Whole-number amount of the native token.
    #[must_use]
    pub fn native(amount: i64) -> Self {
        Self::new(NATIVE_TOKEN, Decimal::from(amount))
    }

    #[must_use]
    pub fn zero(denom: impl Into<Denom>) -> Self {
        Self::new(denom, Decimal::ZERO)
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount.normalize(), self.denom)
    }
}
