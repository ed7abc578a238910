//! Genesis import and export.

use pairlist_types::{GenesisState, Result};

use crate::{keeper::Keeper, store::KvStore};

impl Keeper {
    /// Write params, operators and pairs from a validated genesis state.
    pub fn init_genesis(&self, store: &mut dyn KvStore, genesis: &GenesisState) -> Result<()> {
        genesis.validate()?;
        self.set_params(store, &genesis.params)?;
        for operator in &genesis.operators {
            self.set_operator(store, operator)?;
        }
        for pair in &genesis.token_pairs {
            let mut pair = pair.clone();
            self.save_token_pair(store, &mut pair)?;
        }
        tracing::info!(
            operators = genesis.operators.len(),
            token_pairs = genesis.token_pairs.len(),
            "Listing module genesis initialized"
        );
        Ok(())
    }

    pub fn export_genesis(&self, store: &dyn KvStore) -> Result<GenesisState> {
        Ok(GenesisState {
            params: self.params(store)?,
            operators: self.operators(store)?,
            token_pairs: self.token_pairs(store)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pairlist_types::{Address, DexOperator, Params, TokenPair};

    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn init_then_export_preserves_state() {
        let keeper = Keeper::default();
        let mut store = MemoryStore::new();
        let mut pair = TokenPair::dummy("btc", "usdt", "okx1op");
        pair.id = 7;
        let genesis = GenesisState {
            params: Params {
                ownership_confirm_window_secs: 60,
                ..Params::default()
            },
            operators: vec![DexOperator {
                address: Address::new("okx1op"),
                handling_fee_address: Address::new("okx1fees"),
                website: "https://op.example".into(),
                init_height: 0,
                tx_hash: String::new(),
            }],
            token_pairs: vec![pair],
        };

        keeper.init_genesis(&mut store, &genesis).unwrap();
        let exported = keeper.export_genesis(&store).unwrap();
        assert_eq!(exported, genesis);

        // Newly listed pairs continue after the highest genesis id.
        let mut next = TokenPair::dummy("eth", "usdt", "okx1op");
        keeper.save_token_pair(&mut store, &mut next).unwrap();
        assert_eq!(next.id, 8);
    }

    #[test]
    fn invalid_genesis_rejected() {
        let keeper = Keeper::default();
        let mut store = MemoryStore::new();
        let genesis = GenesisState {
            token_pairs: vec![
                TokenPair::dummy("btc", "usdt", "okx1op"),
                TokenPair::dummy("btc", "usdt", "okx1op"),
            ],
            ..GenesisState::default()
        };
        assert!(keeper.init_genesis(&mut store, &genesis).is_err());
        assert!(store.is_empty());
    }
}
