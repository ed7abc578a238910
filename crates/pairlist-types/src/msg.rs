//! Decoded commands accepted by the listing module.
//!
//! Signatures are verified upstream; every identity field here is already
//! authenticated as the signer of the carrying transaction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, DecCoin};

/// List a new base/quote pair owned by `owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMsg {
    pub list_asset: String,
    pub quote_asset: String,
    pub init_price: Decimal,
    pub owner: Address,
}

/// Add to or remove from a pair's escrow deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowMsg {
    pub product: String,
    pub depositor: Address,
    pub amount: DecCoin,
}

/// Propose handing `product` from `from_address` to `to_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOwnershipMsg {
    pub product: String,
    pub from_address: Address,
    pub to_address: Address,
}

/// Accept a pending ownership proposal as its nominee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmOwnershipMsg {
    pub product: String,
    pub address: Address,
}

/// Register or update an operator profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorMsg {
    pub owner: Address,
    pub handling_fee_address: Address,
    pub website: String,
}

/// Closed set of commands routed to this module.
///
/// Any other `type` tag decodes to [`Msg::Unknown`], which the dispatcher
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Msg {
    List(ListMsg),
    Deposit(EscrowMsg),
    Withdraw(EscrowMsg),
    TransferOwnership(TransferOwnershipMsg),
    ConfirmOwnership(ConfirmOwnershipMsg),
    CreateOperator(OperatorMsg),
    UpdateOperator(OperatorMsg),
    #[serde(other)]
    Unknown,
}

impl Msg {
    /// Name of the handler this command routes to.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Deposit(_) => "deposit",
            Self::Withdraw(_) => "withdraw",
            Self::TransferOwnership(_) => "transfer_ownership",
            Self::ConfirmOwnership(_) => "confirm_ownership",
            Self::CreateOperator(_) => "create_operator",
            Self::UpdateOperator(_) => "update_operator",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_tagged_command() {
        let json = r#"{
            "type": "confirm_ownership",
            "product": "btc_usdt",
            "address": "okx1bob"
        }"#;
        let msg: Msg = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            Msg::ConfirmOwnership(ConfirmOwnershipMsg {
                product: "btc_usdt".into(),
                address: Address::new("okx1bob"),
            })
        );
        assert_eq!(msg.name(), "confirm_ownership");
    }

    #[test]
    fn unknown_type_decodes_to_unknown() {
        let msg: Msg = serde_json::from_str(r#"{"type": "delist", "product": "x_y"}"#).unwrap();
        assert_eq!(msg, Msg::Unknown);
    }

    #[test]
    fn decimal_price_from_string() {
        let json = r#"{
            "type": "list",
            "list_asset": "btc",
            "quote_asset": "usdt",
            "init_price": "1.25",
            "owner": "okx1op"
        }"#;
        let Msg::List(list) = serde_json::from_str(json).unwrap() else {
            panic!("expected list");
        };
        assert_eq!(list.init_price, Decimal::new(125, 2));
    }
}
