//! # pairlist-types
//!
//! Shared types, errors, and configuration for the **pairlist** DEX listing
//! module.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`product_id`]
//! - **Records**: [`TokenPair`], [`ConfirmOwnership`], [`DexOperator`]
//! - **Ownership handshake**: [`OwnershipState`]
//! - **Coins**: [`DecCoin`]
//! - **Commands**: [`Msg`] and its payloads
//! - **Events**: [`Event`], [`Attribute`], [`Response`]
//! - **Configuration**: [`Params`], [`KeeperConfig`], [`GenesisState`]
//! - **Step context**: [`StepContext`]
//! - **Errors**: [`DexError`] with `DEX_ERR_` prefix codes
//! - **Constants**: defaults and module account names

pub mod coin;
pub mod constants;
pub mod context;
pub mod error;
pub mod event;
pub mod genesis;
pub mod ids;
pub mod msg;
pub mod operator;
pub mod ownership;
pub mod params;
pub mod token_pair;

// Re-export all primary types at crate root for ergonomic imports:
//   use pairlist_types::{TokenPair, ConfirmOwnership, Msg, ...};

pub use coin::*;
pub use context::*;
pub use error::*;
pub use event::*;
pub use genesis::*;
pub use ids::*;
pub use msg::*;
pub use operator::*;
pub use ownership::*;
pub use params::*;
pub use token_pair::*;

// Constants are accessed via `pairlist_types::constants::FOO`
// (not re-exported to avoid name collisions).
