//! Module-wide constants for the pairlist DEX module.

use rust_decimal::Decimal;

/// Module name, used as the `module` event attribute and the escrow account name.
pub const MODULE_NAME: &str = "dex";

/// Name of the module account that collects listing, transfer and registration fees.
pub const FEE_COLLECTOR_NAME: &str = "fee_collector";

/// Native token; the only denom accepted for pair deposits and fees by default.
pub const NATIVE_TOKEN: &str = "okt";

/// Default maximum number of price decimal digits for a new pair.
pub const DEFAULT_MAX_PRICE_DIGIT: i64 = 8;

/// Default maximum number of quantity decimal digits for a new pair.
pub const DEFAULT_MAX_QUANTITY_DIGIT: i64 = 8;

/// Minimum tradeable quantity for a new pair: 0.00000001.
pub const DEFAULT_MIN_QUANTITY: Decimal = Decimal::from_parts(1, 0, 0, false, 8);

/// Default listing fee (in [`NATIVE_TOKEN`]).
pub const DEFAULT_LIST_FEE: i64 = 20_000;

/// Default transfer-ownership fee (in [`NATIVE_TOKEN`]).
pub const DEFAULT_TRANSFER_OWNERSHIP_FEE: i64 = 10;

/// Default operator registration fee (in [`NATIVE_TOKEN`]).
pub const DEFAULT_REGISTER_OPERATOR_FEE: i64 = 10;

/// Default ownership confirmation window: 24 hours.
pub const DEFAULT_OWNERSHIP_CONFIRM_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Upper bound on the confirmation window: 365 days.
pub const MAX_OWNERSHIP_CONFIRM_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Separator between base and quote symbols in a product identifier.
pub const PRODUCT_SEPARATOR: char = '_';

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
