//! Registered DEX operators.

use serde::{Deserialize, Serialize};

use crate::Address;

/// A market operator, one per owner identity.
///
/// `address` is fixed at registration; `handling_fee_address` and `website`
/// can be replaced by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexOperator {
    /// Owner identity; also the storage key.
    pub address: Address,
    /// Where trading fees for this operator's pairs are paid.
    pub handling_fee_address: Address,
    pub website: String,
    /// Block height of registration.
    pub init_height: i64,
    /// Upper-case hex SHA-256 of the registering transaction.
    pub tx_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_field_names() {
        let op = DexOperator {
            address: Address::new("okx1op"),
            handling_fee_address: Address::new("okx1fees"),
            website: "https://op.example".into(),
            init_height: 7,
            tx_hash: "AB".into(),
        };
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["address"], "okx1op");
        assert_eq!(value["handling_fee_address"], "okx1fees");
        assert_eq!(value["init_height"], 7);
    }
}
