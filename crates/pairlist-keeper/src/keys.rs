//! Storage key layout.
//!
//! ```text
//! 0x01 | product                      -> TokenPair
//! 0x02 | product                      -> ConfirmOwnership
//! 0x03 | address                      -> DexOperator
//! 0x04                                -> Params
//! 0x05 | owner | 0x00 | product       -> user pair index marker
//! 0x06                                -> last assigned pair id
//! 0x10 | address | 0x00 | denom       -> account balance
//! 0x11 | denom                        -> asset registry marker
//! ```

pub const TOKEN_PAIR_PREFIX: u8 = 0x01;
pub const CONFIRM_OWNERSHIP_PREFIX: u8 = 0x02;
pub const OPERATOR_PREFIX: u8 = 0x03;
pub const PARAMS_KEY: &[u8] = &[0x04];
pub const USER_TOKEN_PAIR_PREFIX: u8 = 0x05;
pub const MAX_TOKEN_PAIR_ID_KEY: &[u8] = &[0x06];
pub const BALANCE_PREFIX: u8 = 0x10;
pub const TOKEN_PREFIX: u8 = 0x11;

pub const SEPARATOR: u8 = 0x00;

fn prefixed(prefix: u8, parts: &[&[u8]]) -> Vec<u8> {
    let len = 1 + parts.iter().map(|p| p.len() + 1).sum::<usize>();
    let mut key = Vec::with_capacity(len);
    key.push(prefix);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        key.extend_from_slice(part);
    }
    key
}

#[must_use]
pub fn token_pair_key(product: &str) -> Vec<u8> {
    prefixed(TOKEN_PAIR_PREFIX, &[product.as_bytes()])
}

#[must_use]
pub fn confirm_ownership_key(product: &str) -> Vec<u8> {
    prefixed(CONFIRM_OWNERSHIP_PREFIX, &[product.as_bytes()])
}

#[must_use]
pub fn operator_key(address: &str) -> Vec<u8> {
    prefixed(OPERATOR_PREFIX, &[address.as_bytes()])
}

#[must_use]
pub fn user_token_pair_key(owner: &str, product: &str) -> Vec<u8> {
    prefixed(USER_TOKEN_PAIR_PREFIX, &[owner.as_bytes(), product.as_bytes()])
}

/// Prefix of every index entry belonging to `owner`.
#[must_use]
pub fn user_token_pair_prefix(owner: &str) -> Vec<u8> {
    let mut key = prefixed(USER_TOKEN_PAIR_PREFIX, &[owner.as_bytes()]);
    key.push(SEPARATOR);
    key
}

#[must_use]
pub fn balance_key(address: &str, denom: &str) -> Vec<u8> {
    prefixed(BALANCE_PREFIX, &[address.as_bytes(), denom.as_bytes()])
}

#[must_use]
pub fn token_key(denom: &str) -> Vec<u8> {
    prefixed(TOKEN_PREFIX, &[denom.as_bytes()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_index_prefix_does_not_match_longer_owner() {
        let key = user_token_pair_key("okx1alice2", "btc_usdt");
        assert!(!key.starts_with(&user_token_pair_prefix("okx1alice")));
        let key = user_token_pair_key("okx1alice", "btc_usdt");
        assert!(key.starts_with(&user_token_pair_prefix("okx1alice")));
    }

    #[test]
    fn record_kinds_do_not_collide() {
        assert_ne!(token_pair_key("btc_usdt"), confirm_ownership_key("btc_usdt"));
        assert_eq!(token_pair_key("btc_usdt")[0], TOKEN_PAIR_PREFIX);
        assert_eq!(&token_pair_key("btc_usdt")[1..], b"btc_usdt");
    }
}
