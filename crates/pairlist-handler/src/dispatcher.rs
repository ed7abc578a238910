//! Command router.
//!
//! One arm per [`Msg`] variant. Every successful handler emits at least one
//! event; a success without events is a handler bug and aborts the step.

use pairlist_keeper::{Keeper, KvStore};
use pairlist_types::{DexError, Msg, Response, Result, StepContext};

use crate::{escrow, list, operator, ownership};

/// Route `msg` to its handler and check the outcome.
///
/// Does not roll anything back on failure; see [`crate::Executor`] for
/// step atomicity.
///
/// # Errors
/// Whatever the selected handler returns, or `UnrecognizedRequest` for
/// [`Msg::Unknown`].
///
/// # Panics
/// If a handler reports success without emitting any event.
pub fn dispatch(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &Msg,
) -> Result<Response> {
    let name = msg.name();
    let result = match msg {
        Msg::List(m) => list::handle_list(ctx, keeper, store, m),
        Msg::Deposit(m) => escrow::handle_deposit(ctx, keeper, store, m),
        Msg::Withdraw(m) => escrow::handle_withdraw(ctx, keeper, store, m),
        Msg::TransferOwnership(m) => ownership::handle_transfer_ownership(ctx, keeper, store, m),
        Msg::ConfirmOwnership(m) => ownership::handle_confirm_ownership(ctx, keeper, store, m),
        Msg::CreateOperator(m) => operator::handle_create_operator(ctx, keeper, store, m),
        Msg::UpdateOperator(m) => operator::handle_update_operator(ctx, keeper, store, m),
        Msg::Unknown => {
            return Err(DexError::UnrecognizedRequest(format!(
                "unrecognized dex message type at height {}",
                ctx.block_height
            )));
        }
    };

    sanity_check(name, &result);
    if let Err(err) = &result {
        tracing::debug!(
            height = ctx.block_height,
            handler = name,
            code = err.code(),
            error = %err,
            "dex command rejected"
        );
    }
    result
}

/// Abort on a success outcome that carries no events.
///
/// # Panics
/// When `result` is `Ok` with an empty event list.
pub fn sanity_check(name: &str, result: &Result<Response>) {
    if let Ok(response) = result {
        if response.events.is_empty() {
            tracing::error!(handler = name, "handler succeeded without emitting events");
            panic!("invalid return of {name}: success without events");
        }
    }
}

#[cfg(test)]
mod tests {
    use pairlist_types::{Address, ConfirmOwnershipMsg, Event, ListMsg};
    use rust_decimal::Decimal;

    use super::*;
    use crate::testutil::{ctx_at, setup_listing_env};

    #[test]
    fn routes_list() {
        let (keeper, mut store) = setup_listing_env();
        let msg = Msg::List(ListMsg {
            list_asset: "eth".into(),
            quote_asset: "usdt".into(),
            init_price: Decimal::new(2500, 0),
            owner: Address::new("okx1op"),
        });
        let res = dispatch(&ctx_at(1, 0), &keeper, &mut store, &msg).unwrap();
        assert_eq!(res.attribute("list-asset"), Some("eth"));
        assert!(keeper.token_pair(&store, "eth_usdt").unwrap().is_some());
    }

    #[test]
    fn unknown_command_is_unrecognized() {
        let (keeper, mut store) = setup_listing_env();
        let err = dispatch(&ctx_at(1, 0), &keeper, &mut store, &Msg::Unknown).unwrap_err();
        assert!(matches!(err, DexError::UnrecognizedRequest(_)));
        assert_eq!(err.code(), 900);
    }

    #[test]
    fn handler_error_surfaces_unchanged() {
        let (keeper, mut store) = setup_listing_env();
        let msg = Msg::ConfirmOwnership(ConfirmOwnershipMsg {
            product: "btc_usdt".into(),
            address: Address::new("okx1nominee"),
        });
        let err = dispatch(&ctx_at(1, 0), &keeper, &mut store, &msg).unwrap_err();
        assert!(err.to_string().contains("no transfer-ownership of list (btc_usdt) to confirm"));
    }

    #[test]
    fn sanity_check_accepts_failures_and_evented_successes() {
        sanity_check("list", &Err(DexError::Internal("boom".into())));
        sanity_check("list", &Ok(Response::new().add_event(Event::module())));
    }

    #[test]
    #[should_panic(expected = "success without events")]
    fn sanity_check_panics_on_empty_success() {
        sanity_check("list", &Ok(Response::new()));
    }
}
