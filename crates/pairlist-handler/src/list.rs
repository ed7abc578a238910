//! Listing handler.

use pairlist_keeper::{Keeper, KvStore};
use pairlist_types::{DexError, Event, ListMsg, Response, Result, StepContext, TokenPair};

/// List `msg.list_asset`/`msg.quote_asset` for `msg.owner`.
///
/// Checks, in order: both assets exist, the owner is a registered operator,
/// and neither ordering of the pair is listed. Then charges the listing fee
/// and saves the pair.
///
/// # Errors
/// `UnknownAsset`, `UnknownOperator`, `TokenPairExists`, `InsufficientFee`,
/// `TokenPairSaveFailed`, or a store fault.
pub fn handle_list(
    ctx: &StepContext,
    keeper: &Keeper,
    store: &mut dyn KvStore,
    msg: &ListMsg,
) -> Result<Response> {
    for asset in [&msg.list_asset, &msg.quote_asset] {
        if !keeper.bank().token_exists(store, asset)? {
            return Err(DexError::UnknownAsset(asset.clone()));
        }
    }

    if keeper.operator(store, &msg.owner)?.is_none() {
        return Err(DexError::UnknownOperator(msg.owner.clone()));
    }

    // aaa_bbb and bbb_aaa are one pair.
    if keeper.pair_listed_either_way(store, &msg.list_asset, &msg.quote_asset)? {
        return Err(DexError::TokenPairExists {
            base: msg.list_asset.clone(),
            quote: msg.quote_asset.clone(),
        });
    }

    let fee = keeper.params(store)?.list_fee;
    keeper
        .charge_fee(store, &msg.owner, &fee)
        .map_err(|err| match err {
            DexError::InsufficientCoins(_) => DexError::InsufficientFee(fee.to_string()),
            other => other,
        })?;

    let mut pair = TokenPair::new_listing(
        msg.list_asset.clone(),
        msg.quote_asset.clone(),
        msg.init_price,
        msg.owner.clone(),
        ctx.block_height,
    );
    keeper
        .save_token_pair(store, &mut pair)
        .map_err(|err| DexError::TokenPairSaveFailed(err.to_string()))?;

    tracing::debug!(
        height = ctx.block_height,
        product = %pair.product(),
        owner = %pair.owner,
        fee = %fee,
        "successfully handled list"
    );

    Ok(Response::new().add_event(
        Event::message()
            .attr("list-asset", &pair.base_asset_symbol)
            .attr("quote-asset", &pair.quote_asset_symbol)
            .attr("init-price", pair.init_price)
            .attr("max-price-digit", pair.max_price_digit)
            .attr("max-size-digit", pair.max_quantity_digit)
            .attr("min-trade-size", pair.min_quantity)
            .attr("delisting", pair.delisting)
            .attr(pairlist_types::ATTRIBUTE_KEY_FEE, &fee),
    ))
}
