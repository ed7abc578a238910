//! Listed trading pairs.
//!
//! A [`TokenPair`] is created by the listing handler and never physically
//! deleted here. Its `owner` changes through the ownership-transfer
//! handshake and its `deposits` through the escrow keeper.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, DecCoin, constants, product_id};

/// A listed base/quote trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Sequential id assigned when the pair is first saved.
    pub id: u64,
    /// Base asset symbol (e.g., "btc").
    pub base_asset_symbol: String,
    /// Quote asset symbol (e.g., "usdt").
    pub quote_asset_symbol: String,
    /// Initial price, quote per base.
    pub init_price: Decimal,
    /// Maximum number of decimal digits allowed in a price.
    pub max_price_digit: i64,
    /// Maximum number of decimal digits allowed in a quantity.
    pub max_quantity_digit: i64,
    /// Smallest tradeable quantity.
    pub min_quantity: Decimal,
    /// The operator that owns the listing.
    pub owner: Address,
    /// Whether the pair is being delisted.
    pub delisting: bool,
    /// Escrowed deposit attached to the pair.
    pub deposits: DecCoin,
    /// Block height at listing time.
    pub block_height: i64,
}

impl TokenPair {
    /// A freshly listed pair with default precision limits and an empty
    /// native-token deposit. `id` is assigned when the pair is saved.
    #[must_use]
    pub fn new_listing(
        base: impl Into<String>,
        quote: impl Into<String>,
        init_price: Decimal,
        owner: Address,
        block_height: i64,
    ) -> Self {
        Self {
            id: 0,
            base_asset_symbol: base.into(),
            quote_asset_symbol: quote.into(),
            init_price,
            max_price_digit: constants::DEFAULT_MAX_PRICE_DIGIT,
            max_quantity_digit: constants::DEFAULT_MAX_QUANTITY_DIGIT,
            min_quantity: constants::DEFAULT_MIN_QUANTITY,
            owner,
            delisting: false,
            deposits: DecCoin::zero(constants::NATIVE_TOKEN),
            block_height,
        }
    }

    /// Product identifier, `"<base>_<quote>"`.
    #[must_use]
    pub fn product(&self) -> String {
        product_id(&self.base_asset_symbol, &self.quote_asset_symbol)
    }

    /// Product identifier of the reversed ordering, `"<quote>_<base>"`.
    #[must_use]
    pub fn reversed_product(&self) -> String {
        product_id(&self.quote_asset_symbol, &self.base_asset_symbol)
    }
}

impl std::fmt::Display for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TokenPair[{}] {} owner={} deposits={}",
            self.id,
            self.product(),
            self.owner,
            self.deposits,
        )
    }
}

/// Fixture pair for tests. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl TokenPair {
    pub fn dummy(base: &str, quote: &str, owner: &str) -> Self {
        Self::new_listing(base, quote, Decimal::ONE, Address::new(owner), 1)
    }
}
