//! Ownership transfer: the two-phase propose / confirm handshake.
//!
//! 1. **Propose** (current owner): empties the pair's escrow back to the
//!    owner, charges the transfer fee and stores a [`ConfirmOwnership`]
//!    expiring one confirmation window from now.
//! 2. **Confirm** (nominee): before expiry, moves the pair and the owner
//!    index to the nominee and deletes the proposal.
//!
//! At most one live proposal exists per pair. An expired one is replaced by
//! the next propose, or swept by the next confirm. This is the only place
//! expiry is observed; an expired proposal nobody touches stays in storage.

use pairlist_keeper::{Keeper, KvStore};
use pairlist_types::{
    ATTRIBUTE_KEY_FEE, ConfirmOwnership, ConfirmOwnershipMsg, DexError, Event, OwnershipState,
    Response, Result, StepContext, TransferOwnershipMsg,
};

/// Idle/Expired → Proposed.
///
/// # Errors
/// In order: `TokenPairNotFound`, `Unauthorized` (requester is not the
/// owner), `UnknownOperator` (nominee), `TransferInProgress` (live proposal
/// exists), `Configuration` (window unusable or expiry overflows),
/// `Internal` (escrow withdrawal failed), `InsufficientCoins` (transfer fee).
pub fn handle_transfer_ownership(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &TransferOwnershipMsg,
) -> Result<Response> {
    let pair = keeper
        .token_pair(store, &msg.product)?
        .ok_or_else(|| DexError::TokenPairNotFound(msg.product.clone()))?;
    if pair.owner != msg.from_address {
        return Err(DexError::Unauthorized(msg.from_address.clone()));
    }
    if keeper.operator(store, &msg.to_address)?.is_none() {
        return Err(DexError::UnknownOperator(msg.to_address.clone()));
    }

    let existing = keeper.confirm_ownership(store, &msg.product)?;
    let state = OwnershipState::observe(existing.as_ref(), ctx.block_time);
    if !state.can_transition_to(OwnershipState::Proposed) {
        return Err(DexError::TransferInProgress(msg.product.clone()));
    }

    let params = keeper.params(store)?;
    let expire = params
        .ownership_confirm_window()
        .and_then(|window| {
            ctx.block_time.checked_add_signed(window).ok_or_else(|| {
                DexError::Configuration(format!(
                    "ownership proposal expiry overflows at {}",
                    ctx.block_time
                ))
            })
        })?;

    // The nominee starts with an empty escrow.
    if pair.deposits.is_positive() {
        keeper
            .withdraw(store, &msg.product, &msg.from_address, &pair.deposits)
            .map_err(|err| DexError::Internal(err.to_string()))?;
    }

    let fee = params.transfer_ownership_fee;
    keeper.charge_fee(store, &msg.from_address, &fee)?;

    let record = ConfirmOwnership {
        product: msg.product.clone(),
        from_address: msg.from_address.clone(),
        to_address: msg.to_address.clone(),
        expire,
    };
    keeper.set_confirm_ownership(store, &record)?;

    tracing::debug!(
        height = ctx.block_height,
        product = %msg.product,
        from = %msg.from_address,
        to = %msg.to_address,
        expire = %record.expire,
        previous = %state,
        "successfully handled transfer ownership"
    );

    Ok(Response::new().add_event(Event::module().attr(ATTRIBUTE_KEY_FEE, &fee)))
}

/// Proposed → Confirmed, or Proposed → Expired when the window has passed.
///
/// # Errors
/// In order: `UnknownRequest` (no proposal), `ProposalExpired` (the stale
/// proposal is swept as a side effect), `Unauthorized` (requester is not
/// the nominee), `TokenPairNotFound`.
pub fn handle_confirm_ownership(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &ConfirmOwnershipMsg,
) -> Result<Response> {
    let Some(record) = keeper.confirm_ownership(store, &msg.product)? else {
        return Err(DexError::UnknownRequest(format!(
            "no transfer-ownership of list ({}) to confirm",
            msg.product
        )));
    };

    if OwnershipState::observe(Some(&record), ctx.block_time) == OwnershipState::Expired {
        keeper.sweep_confirm_ownership(store, &record.product)?;
        return Err(DexError::ProposalExpired {
            product: record.product,
            expire: record.expire.to_rfc3339(),
        });
    }

    if record.to_address != msg.address {
        return Err(DexError::Unauthorized(msg.address.clone()));
    }

    let mut pair = keeper
        .token_pair(store, &msg.product)?
        .ok_or_else(|| DexError::TokenPairNotFound(msg.product.clone()))?;

    pair.owner = msg.address.clone();
    keeper.update_token_pair(store, &msg.product, &pair)?;
    keeper.update_user_token_pair(store, &msg.product, &record.from_address, &msg.address)?;
    keeper.delete_confirm_ownership(store, &record.product)?;

    tracing::debug!(
        height = ctx.block_height,
        product = %msg.product,
        from = %record.from_address,
        to = %msg.address,
        "successfully handled confirm ownership"
    );

    Ok(Response::new().add_event(Event::module()))
}
