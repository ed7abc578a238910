//! Operator registration and profile updates.

use pairlist_keeper::{Keeper, KvStore};
use pairlist_types::{
    ATTRIBUTE_KEY_FEE, DexError, DexOperator, Event, OperatorMsg, Response, Result, StepContext,
};

/// Register `msg.owner` as an operator and charge the registration fee.
///
/// # Errors
/// `OperatorExists`, or `InsufficientCoins` when the fee cannot be paid.
pub fn handle_create_operator(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &OperatorMsg,
) -> Result<Response> {
    if keeper.operator(store, &msg.owner)?.is_some() {
        return Err(DexError::OperatorExists(msg.owner.clone()));
    }

    let operator = DexOperator {
        address: msg.owner.clone(),
        handling_fee_address: msg.handling_fee_address.clone(),
        website: msg.website.clone(),
        init_height: ctx.block_height,
        tx_hash: ctx.tx_hash(),
    };
    keeper.set_operator(store, &operator)?;

    let fee = keeper.params(store)?.register_operator_fee;
    keeper.charge_fee(store, &msg.owner, &fee)?;

    tracing::debug!(
        height = ctx.block_height,
        owner = %operator.address,
        tx_hash = %operator.tx_hash,
        "successfully handled create operator"
    );

    Ok(Response::new().add_event(Event::module().attr(ATTRIBUTE_KEY_FEE, &fee)))
}

/// Replace the fee address and website of an existing operator.
///
/// # Errors
/// `UnknownOperator`, or `Unauthorized` if the stored record belongs to a
/// different identity.
pub fn handle_update_operator(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &OperatorMsg,
) -> Result<Response> {
    let mut operator = keeper
        .operator(store, &msg.owner)?
        .ok_or_else(|| DexError::UnknownOperator(msg.owner.clone()))?;
    if operator.address != msg.owner {
        return Err(DexError::Unauthorized(msg.owner.clone()));
    }

    operator.handling_fee_address = msg.handling_fee_address.clone();
    operator.website = msg.website.clone();
    keeper.set_operator(store, &operator)?;

    tracing::debug!(height = ctx.block_height, owner = %operator.address, "successfully handled update operator");
    Ok(Response::new().add_event(Event::module()))
}
