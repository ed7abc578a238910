//! Shared fixtures for handler unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pairlist_keeper::{Keeper, MemoryStore};
use pairlist_types::{Address, DecCoin, DexOperator, Params, StepContext};

pub(crate) const OPERATORS: [&str; 3] = ["okx1op", "okx1nominee", "okx1other"];

pub(crate) fn genesis_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Context at `height`, `secs` after the fixture genesis time.
pub(crate) fn ctx_at(height: i64, secs: i64) -> StepContext {
    StepContext::new(height, genesis_time() + Duration::seconds(secs))
}

/// Store with btc/usdt/eth/okt registered, three funded operators and
/// default params.
pub(crate) fn setup_listing_env() -> (Keeper, MemoryStore) {
    let keeper = Keeper::default();
    let mut store = MemoryStore::new();
    for denom in ["btc", "usdt", "eth", "okt"] {
        keeper.bank().register_token(&mut store, denom).unwrap();
    }
    for addr in OPERATORS {
        let address = Address::new(addr);
        keeper
            .set_operator(
                &mut store,
                &DexOperator {
                    address: address.clone(),
                    handling_fee_address: address.clone(),
                    website: format!("https://{addr}.example"),
                    init_height: 0,
                    tx_hash: String::new(),
                },
            )
            .unwrap();
        keeper
            .bank()
            .mint(&mut store, &address, &DecCoin::native(1_000_000))
            .unwrap();
    }
    keeper.set_params(&mut store, &Params::default()).unwrap();
    (keeper, store)
}
