//! # pairlist-keeper
//!
//! **Ledger plane** of the listing module: the store interface, typed record
//! access, the asset ledger collaborator, escrow and fee settlement.
//!
//! ## Architecture
//!
//! 1. **KvStore**: ordered byte store; [`MemoryStore`] and the step-scoped
//!    [`CacheStore`] overlay implement it
//! 2. **Keeper**: typed token pair / proposal / operator / params records
//! 3. **BankKeeper**: asset registry, balances, account ↔ module transfers
//! 4. **Escrow**: pair deposits and withdrawals through the escrow account
//! 5. **Fee settlement**: requester → fee collector
//! 6. **State root**: SHA-256 digest for cross-replica comparison
//!
//! Every method takes the store handle as an argument; nothing here caches
//! ledger state between steps.

pub mod bank;
mod codec;
pub mod escrow;
pub mod fee;
pub mod genesis;
pub mod keeper;
pub mod keys;
pub mod query;
pub mod state_root;
pub mod store;

pub use bank::BankKeeper;
pub use keeper::Keeper;
pub use state_root::{state_root, state_root_hex};
pub use store::{CacheStore, KvStore, MemoryStore};
