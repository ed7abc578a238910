//! # pairlist-handler
//!
//! **Command plane** of the listing module: one handler per command, the
//! [`dispatch`] router with its success-without-events check, and the
//! [`Executor`] that makes each step all-or-nothing.
//!
//! ## Ownership transfer lifecycle
//!
//! ```text
//!   Idle ──propose──▶ Proposed ──confirm (now ≤ expire)──▶ Confirmed
//!    ▲                   │
//!    │                   └──── now > expire ───▶ Expired
//!    │                                             │
//!    └──── confirm sweeps the record ◀─────────────┤
//!                                                  └── propose replaces it
//! ```
//!
//! Deposits are refused while a pair is `Proposed`; withdrawals are not.

pub mod dispatcher;
pub mod escrow;
pub mod executor;
pub mod list;
pub mod operator;
pub mod ownership;

#[cfg(test)]
mod testutil;

pub use dispatcher::{dispatch, sanity_check};
pub use executor::Executor;
