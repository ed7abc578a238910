//! # Ownership transfer handshake record
//!
//! A [`ConfirmOwnership`] is the pending proposal written by the propose
//! step and consumed by confirm, or swept once its expiry has passed.
//!
//! ## State Machine
//!
//! ```text
//!   ┌──────┐  propose   ┌──────────┐  confirm (nominee, t <= expire)  ┌───────────┐
//!   │ IDLE ├───────────▶│ PROPOSED ├─────────────────────────────────▶│ CONFIRMED │
//!   └──────┘            └────┬─────┘                                  └───────────┘
//!       ▲                    │ t > expire, observed by confirm/propose/deposit
//!       │                    ▼
//!       │               ┌─────────┐
//!       └───────────────┤ EXPIRED │
//!        new proposal   └─────────┘
//! ```
//!
//! There is no timer: expiry is a comparison of the stored `expire` against
//! the ledger time of whichever step touches the record next.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Address;

/// Observable state of a pair's ownership handshake at a given ledger time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnershipState {
    /// No proposal is stored.
    Idle,
    /// A proposal is stored and has not expired.
    Proposed,
    /// The nominee confirmed; the record is gone and the owner changed.
    Confirmed,
    /// A stored proposal is past its expiry.
    Expired,
}

impl OwnershipState {
    /// State implied by the (optional) stored proposal at ledger time `now`.
    ///
    /// `Confirmed` is never observed from storage: it is only the result of
    /// a successful confirm step, after which the pair is `Idle` again.
    #[must_use]
    pub fn observe(record: Option<&ConfirmOwnership>, now: DateTime<Utc>) -> Self {
        match record {
            None => Self::Idle,
            Some(r) if r.is_expired(now) => Self::Expired,
            Some(_) => Self::Proposed,
        }
    }

    /// Can a handshake move from this state to `target`?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle | Self::Expired, Self::Proposed)
                | (Self::Proposed, Self::Confirmed | Self::Expired)
        )
    }

    /// Whether escrow deposits are blocked in this state.
    #[must_use]
    pub fn blocks_deposits(&self) -> bool {
        *self == Self::Proposed
    }
}

impl std::fmt::Display for OwnershipState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Proposed => write!(f, "PROPOSED"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// A pending ownership-transfer proposal, keyed by product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmOwnership {
    /// The pair being transferred.
    pub product: String,
    /// Owner at proposal time.
    pub from_address: Address,
    /// Nominated new owner; the only identity allowed to confirm.
    pub to_address: Address,
    /// Last ledger time at which the proposal can be confirmed.
    pub expire: DateTime<Utc>,
}

impl ConfirmOwnership {
    /// `true` once ledger time is strictly after `expire`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expire
    }
}
