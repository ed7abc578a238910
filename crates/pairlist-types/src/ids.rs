//! Identifiers used throughout the listing module.
//!
//! Account identities are opaque strings already authenticated upstream.
//! Products are identified by `"<base>_<quote>"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::PRODUCT_SEPARATOR;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// An account identity (user, operator or module account).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Deterministic address of a module-owned account.
    ///
    /// `hex(SHA-256("pairlist:module:" || name)[..20])`
    #[must_use]
    pub fn module(name: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"pairlist:module:");
        hasher.update(name.as_bytes());
        let hash = hasher.finalize();
        Self(hex::encode(&hash[..20]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// Product identifier for a base/quote pair, e.g. `btc_usdt`.
#[must_use]
pub fn product_id(base: &str, quote: &str) -> String {
    format!("{base}{PRODUCT_SEPARATOR}{quote}")
}

/// Split a product identifier back into `(base, quote)`.
///
/// Returns `None` when the separator is missing or either side is empty.
#[must_use]
pub fn split_product(product: &str) -> Option<(&str, &str)> {
    let (base, quote) = product.split_once(PRODUCT_SEPARATOR)?;
    if base.is_empty() || quote.is_empty() {
        return None;
    }
    Some((base, quote))
}
