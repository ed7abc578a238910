//! Error types for the pairlist DEX module.
//!
//! All errors use the `DEX_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Asset / token pair errors
//! - 2xx: Funds errors (fees, balances, deposits)
//! - 3xx: Ownership transfer errors
//! - 4xx: Operator errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::Address;

/// How a failure should be attributed.
///
/// Validation and funds failures are caused by the request and abort the
/// step. Internal failures come from the store layer and are not expected
/// in correct operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Funds,
    Internal,
}

/// Central error enum for all listing-module operations.
#[derive(Debug, Error)]
pub enum DexError {
    // =================================================================
    // Asset / Token Pair Errors (1xx)
    // =================================================================
    /// The asset is not present in the asset registry.
    #[error("DEX_ERR_100: Unknown asset: {0}")]
    UnknownAsset(String),

    /// Either ordering of the pair is already listed.
    #[error("DEX_ERR_101: Token pair already exists: {base}_{quote}")]
    TokenPairExists { base: String, quote: String },

    /// No pair is stored under the product identifier.
    #[error("DEX_ERR_102: Token pair not found: {0}")]
    TokenPairNotFound(String),

    /// The pair could not be persisted.
    #[error("DEX_ERR_103: Failed to save token pair: {0}")]
    TokenPairSaveFailed(String),

    /// The coin denom is not accepted for this operation.
    #[error("DEX_ERR_104: Invalid denom: expected {expected}, got {actual}")]
    InvalidDenom { expected: String, actual: String },

    /// Amount must be strictly positive.
    #[error("DEX_ERR_105: Invalid amount: {0}")]
    InvalidAmount(Decimal),

    // =================================================================
    // Funds Errors (2xx)
    // =================================================================
    /// The listing fee could not be charged.
    #[error("DEX_ERR_200: Insufficient fee coins: need {0}")]
    InsufficientFee(String),

    /// The account does not hold enough coins for a transfer or fee.
    #[error("DEX_ERR_201: Insufficient coins: need {0}")]
    InsufficientCoins(String),

    /// The pair's escrow balance is smaller than the requested withdrawal.
    #[error("DEX_ERR_202: Insufficient deposits: need {needed}, have {available}")]
    InsufficientDeposits { needed: Decimal, available: Decimal },

    // =================================================================
    // Ownership Transfer Errors (3xx)
    // =================================================================
    /// The requester is not allowed to act on this record.
    #[error("DEX_ERR_300: Unauthorized: {0}")]
    Unauthorized(Address),

    /// An unexpired ownership proposal already exists for the pair.
    #[error("DEX_ERR_301: Ownership transfer in progress for {0}")]
    TransferInProgress(String),

    /// The ownership proposal passed its expiry; it has been removed.
    #[error("DEX_ERR_302: Ownership proposal for {product} expired at {expire}")]
    ProposalExpired { product: String, expire: String },

    /// There is nothing to act on (e.g. confirm without a proposal).
    #[error("DEX_ERR_303: Unknown request: {0}")]
    UnknownRequest(String),

    // =================================================================
    // Operator Errors (4xx)
    // =================================================================
    /// The identity is not a registered operator.
    #[error("DEX_ERR_400: Unknown operator: {0}")]
    UnknownOperator(Address),

    /// The identity is already a registered operator.
    #[error("DEX_ERR_401: Operator already exists: {0}")]
    OperatorExists(Address),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// The command kind is not handled by this module.
    #[error("DEX_ERR_900: Unrecognized dex request: {0}")]
    UnrecognizedRequest(String),

    /// Store read/write fault.
    #[error("DEX_ERR_901: Store error: {0}")]
    Store(String),

    /// Record encoding / decoding error.
    #[error("DEX_ERR_902: Codec error: {0}")]
    Codec(String),

    /// Invalid genesis or params.
    #[error("DEX_ERR_903: Configuration error: {0}")]
    Configuration(String),

    /// Unexpected internal failure wrapping another error.
    #[error("DEX_ERR_904: Internal error: {0}")]
    Internal(String),
}

impl DexError {
    /// Numeric code without the prefix.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::UnknownAsset(_) => 100,
            Self::TokenPairExists { .. } => 101,
            Self::TokenPairNotFound(_) => 102,
            Self::TokenPairSaveFailed(_) => 103,
            Self::InvalidDenom { .. } => 104,
            Self::InvalidAmount(_) => 105,
            Self::InsufficientFee(_) => 200,
            Self::InsufficientCoins(_) => 201,
            Self::InsufficientDeposits { .. } => 202,
            Self::Unauthorized(_) => 300,
            Self::TransferInProgress(_) => 301,
            Self::ProposalExpired { .. } => 302,
            Self::UnknownRequest(_) => 303,
            Self::UnknownOperator(_) => 400,
            Self::OperatorExists(_) => 401,
            Self::UnrecognizedRequest(_) => 900,
            Self::Store(_) => 901,
            Self::Codec(_) => 902,
            Self::Configuration(_) => 903,
            Self::Internal(_) => 904,
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InsufficientFee(_)
            | Self::InsufficientCoins(_)
            | Self::InsufficientDeposits { .. } => ErrorCategory::Funds,
            Self::TokenPairSaveFailed(_)
            | Self::Store(_)
            | Self::Codec(_)
            | Self::Configuration(_)
            | Self::Internal(_) => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DexError>;

impl From<serde_json::Error> for DexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err.to_string())
    }
}
