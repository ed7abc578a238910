//! Escrow handlers: deposit and withdraw against a listed pair.
//!
//! Deposits are refused while an unexpired ownership proposal exists for
//! the pair, so the outgoing and incoming owner agree on the escrow size at
//! confirmation time. Withdrawals carry no such gate.

use pairlist_keeper::{Keeper, KvStore};
use pairlist_types::{DexError, EscrowMsg, Event, OwnershipState, Response, Result, StepContext};

/// # Errors
/// `TransferInProgress` while a live proposal exists, otherwise any escrow
/// keeper failure (`TokenPairNotFound`, `Unauthorized`, `InsufficientCoins`, ...).
pub fn handle_deposit(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &EscrowMsg,
) -> Result<Response> {
    let proposal = keeper.confirm_ownership(store, &msg.product)?;
    if OwnershipState::observe(proposal.as_ref(), ctx.block_time).blocks_deposits() {
        return Err(DexError::TransferInProgress(msg.product.clone()));
    }

    keeper.deposit(store, &msg.product, &msg.depositor, &msg.amount)?;

    tracing::debug!(
        height = ctx.block_height,
        product = %msg.product,
        depositor = %msg.depositor,
        amount = %msg.amount,
        "successfully handled deposit"
    );
    Ok(Response::new().add_event(Event::module()))
}

/// # Errors
/// Any escrow keeper failure (`TokenPairNotFound`, `Unauthorized`,
/// `InsufficientDeposits`, ...).
pub fn handle_withdraw(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &EscrowMsg,
) -> Result<Response> {
    keeper.withdraw(store, &msg.product, &msg.depositor, &msg.amount)?;

    tracing::debug!(
        height = ctx.block_height,
        product = %msg.product,
        depositor = %msg.depositor,
        amount = %msg.amount,
        "successfully handled withdraw"
    );
    Ok(Response::new().add_event(Event::module()))
}

#[cfg(test)]
mod tests {
    use pairlist_types::{Address, ConfirmOwnership, DecCoin, TokenPair};
    use rust_decimal::Decimal;

    use super::*;
    use crate::testutil::{ctx_at, setup_listing_env};

    fn deposit_msg(amount: i64) -> EscrowMsg {
        EscrowMsg {
            product: "btc_usdt".into(),
            depositor: Address::new("okx1op"),
            amount: DecCoin::native(amount),
        }
    }

    fn with_pair() -> (Keeper, pairlist_keeper::MemoryStore) {
        let (keeper, mut store) = setup_listing_env();
        let mut pair = TokenPair::dummy("btc", "usdt", "okx1op");
        keeper.save_token_pair(&mut store, &mut pair).unwrap();
        (keeper, store)
    }

    fn propose(keeper: &Keeper, store: &mut dyn KvStore, expire_secs: i64) {
        keeper
            .set_confirm_ownership(
                store,
                &ConfirmOwnership {
                    product: "btc_usdt".into(),
                    from_address: Address::new("okx1op"),
                    to_address: Address::new("okx1nominee"),
                    expire: ctx_at(0, expire_secs).block_time,
                },
            )
            .unwrap();
    }

    #[test]
    fn deposit_then_withdraw() {
        let (keeper, mut store) = with_pair();
        let res = handle_deposit(&ctx_at(2, 0), &keeper, &mut store, &deposit_msg(500)).unwrap();
        assert_eq!(res.attribute("module"), Some("dex"));
        handle_withdraw(&ctx_at(3, 0), &keeper, &mut store, &deposit_msg(200)).unwrap();

        let pair = keeper.token_pair(&store, "btc_usdt").unwrap().unwrap();
        assert_eq!(pair.deposits.amount, Decimal::new(300, 0));
    }

    #[test]
    fn deposit_blocked_while_proposal_live() {
        let (keeper, mut store) = with_pair();
        propose(&keeper, &mut store, 100);

        // At exactly the expiry instant the proposal is still live.
        let err = handle_deposit(&ctx_at(2, 100), &keeper, &mut store, &deposit_msg(1)).unwrap_err();
        assert!(matches!(err, DexError::TransferInProgress(p) if p == "btc_usdt"));
    }

    #[test]
    fn deposit_allowed_once_proposal_expired() {
        let (keeper, mut store) = with_pair();
        propose(&keeper, &mut store, 100);
        handle_deposit(&ctx_at(2, 101), &keeper, &mut store, &deposit_msg(1)).unwrap();
        // The deposit path does not sweep the stale proposal.
        assert!(keeper.confirm_ownership(&store, "btc_usdt").unwrap().is_some());
    }

    #[test]
    fn withdraw_not_gated_by_proposal() {
        let (keeper, mut store) = with_pair();
        handle_deposit(&ctx_at(2, 0), &keeper, &mut store, &deposit_msg(50)).unwrap();
        propose(&keeper, &mut store, 100);
        handle_withdraw(&ctx_at(3, 10), &keeper, &mut store, &deposit_msg(50)).unwrap();
    }
}
