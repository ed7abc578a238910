//! Genesis state for the listing module.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{DexError, DexOperator, Params, Result, TokenPair};

/// Module state at chain start, also the shape of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    #[serde(default)]
    pub operators: Vec<DexOperator>,
    #[serde(default)]
    pub token_pairs: Vec<TokenPair>,
}

impl GenesisState {
    pub fn from_json(json: &str) -> Result<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    /// Params must be valid, operators unique, and no pair may appear twice
    /// in either ordering.
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;

        let mut operators = BTreeSet::new();
        for op in &self.operators {
            if !operators.insert(&op.address) {
                return Err(DexError::Configuration(format!(
                    "duplicate operator in genesis: {}",
                    op.address
                )));
            }
        }

        let mut products = BTreeSet::new();
        for pair in &self.token_pairs {
            if products.contains(&pair.reversed_product()) || !products.insert(pair.product()) {
                return Err(DexError::Configuration(format!(
                    "duplicate token pair in genesis: {}",
                    pair.product()
                )));
            }
        }
        Ok(())
    }
}
