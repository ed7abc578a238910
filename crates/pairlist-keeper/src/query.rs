//! Read-only listing queries.

use pairlist_types::{Address, DexOperator, Result, TokenPair};

use crate::{codec::load_prefix, keeper::Keeper, keys, store::KvStore};

impl Keeper {
    /// All listed pairs, ordered by product.
    pub fn token_pairs(&self, store: &dyn KvStore) -> Result<Vec<TokenPair>> {
        load_prefix(store, &[keys::TOKEN_PAIR_PREFIX])
    }

    /// Pairs currently owned by `owner`, ordered by product.
    pub fn user_token_pairs(&self, store: &dyn KvStore, owner: &Address) -> Result<Vec<TokenPair>> {
        let prefix = keys::user_token_pair_prefix(owner.as_str());
        let mut pairs = Vec::new();
        for (key, _) in store.scan_prefix(&prefix)? {
            let product = String::from_utf8_lossy(&key[prefix.len()..]).into_owned();
            if let Some(pair) = self.token_pair(store, &product)? {
                pairs.push(pair);
            }
        }
        Ok(pairs)
    }

    /// All registered operators, ordered by address.
    pub fn operators(&self, store: &dyn KvStore) -> Result<Vec<DexOperator>> {
        load_prefix(store, &[keys::OPERATOR_PREFIX])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn token_pairs_ordered_by_product() {
        let keeper = Keeper::default();
        let mut store = MemoryStore::new();
        for (b, q) in [("eth", "usdt"), ("btc", "usdt"), ("atom", "okt")] {
            let mut pair = TokenPair::dummy(b, q, "okx1op");
            keeper.save_token_pair(&mut store, &mut pair).unwrap();
        }
        let products: Vec<_> = keeper
            .token_pairs(&store)
            .unwrap()
            .iter()
            .map(TokenPair::product)
            .collect();
        assert_eq!(products, ["atom_okt", "btc_usdt", "eth_usdt"]);
    }

    #[test]
    fn user_token_pairs_filters_by_owner() {
        let keeper = Keeper::default();
        let mut store = MemoryStore::new();
        let mut a = TokenPair::dummy("btc", "usdt", "okx1alice");
        let mut b = TokenPair::dummy("eth", "usdt", "okx1bob");
        let mut c = TokenPair::dummy("okb", "usdt", "okx1alice");
        keeper.save_token_pair(&mut store, &mut a).unwrap();
        keeper.save_token_pair(&mut store, &mut b).unwrap();
        keeper.save_token_pair(&mut store, &mut c).unwrap();

        let alice: Vec<_> = keeper
            .user_token_pairs(&store, &Address::new("okx1alice"))
            .unwrap()
            .iter()
            .map(TokenPair::product)
            .collect();
        assert_eq!(alice, ["btc_usdt", "okb_usdt"]);
        assert!(
            keeper
                .user_token_pairs(&store, &Address::new("okx1carol"))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn operators_listed() {
        let keeper = Keeper::default();
        let mut store = MemoryStore::new();
        for addr in ["okx1b", "okx1a"] {
            keeper
                .set_operator(
                    &mut store,
                    &DexOperator {
                        address: Address::new(addr),
                        handling_fee_address: Address::new(addr),
                        website: String::new(),
                        init_height: 1,
                        tx_hash: String::new(),
                    },
                )
                .unwrap();
        }
        let addrs: Vec<_> = keeper
            .operators(&store)
            .unwrap()
            .into_iter()
            .map(|o| o.address.0)
            .collect();
        assert_eq!(addrs, ["okx1a", "okx1b"]);
    }
}
