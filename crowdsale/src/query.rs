//! Query handlers for the crowdsale contract.

use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    CapReachedResponse, ConfigResponse, EndedResponse, PurchaseResponse, PurchasesResponse,
    StatusResponse,
};
use crate::state::{claimable_at, CAP_REACHED_AT, CONFIG, FORWARDED, PURCHASES, RAISED};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Query sale parameters.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        rate: config.rate,
        wallet: config.wallet,
        token: config.token,
        accepted_token: config.accepted_token,
        cap: config.cap,
        wait_time: config.wait_time,
    })
}

pub fn query_cap_reached(deps: Deps) -> StdResult<CapReachedResponse> {
    let config = CONFIG.load(deps.storage)?;
    let raised = RAISED.load(deps.storage)?;
    Ok(CapReachedResponse {
        cap_reached: config.cap_reached(raised),
    })
}

pub fn query_ended(deps: Deps) -> StdResult<EndedResponse> {
    let cap_reached = query_cap_reached(deps)?.cap_reached;
    Ok(EndedResponse { ended: cap_reached })
}

/// Query raised total, remaining capacity and settlement timing.
pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let raised = RAISED.load(deps.storage)?;
    let cap_reached_at = CAP_REACHED_AT.may_load(deps.storage)?;

    Ok(StatusResponse {
        raised,
        cap: config.cap,
        remaining: config.cap.saturating_sub(raised),
        cap_reached_at: cap_reached_at.map(|t| t.seconds()),
        claimable_at: claimable_at(deps.storage, &config)?,
        forwarded: FORWARDED.load(deps.storage)?,
    })
}

/// Query the outstanding record of a single buyer (zero if none).
pub fn query_purchase(deps: Deps, address: String) -> StdResult<PurchaseResponse> {
    let address = deps.api.addr_validate(&address)?;
    let amount = PURCHASES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(PurchaseResponse { address, amount })
}

/// Query paginated list of outstanding purchase records.
pub fn query_purchases(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PurchasesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let purchases = PURCHASES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, amount) = item?;
            Ok(PurchaseResponse { address, amount })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PurchasesResponse { purchases })
}
