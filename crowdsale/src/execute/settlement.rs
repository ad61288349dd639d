//! Settlement handlers: ClaimTokens and ForwardFunds.
//!
//! Both open only after the cap is reached and `wait_time` seconds have
//! passed since the purchase that filled it.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Storage};

use common::cw20_transfer_msg;

use crate::error::ContractError;
use crate::state::{claimable_at, Config, CONFIG, FORWARDED, PURCHASES, RAISED};

/// Settle the sender's outstanding purchase record.
///
/// Ledger tokens were already minted at purchase time, so this only clears
/// the record; a second claim fails with `NothingDue`.
pub fn execute_claim_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_settlement_open(deps.storage, &env, &config)?;

    let outstanding = PURCHASES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if outstanding.is_zero() {
        return Err(ContractError::NothingDue);
    }

    PURCHASES.remove(deps.storage, &info.sender);

    Ok(Response::new()
        .add_attribute("action", "claim_tokens")
        .add_attribute("buyer", info.sender)
        .add_attribute("amount", outstanding))
}

/// Send every escrowed accepted-token unit not yet forwarded to the wallet.
pub fn execute_forward_funds(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_settlement_open(deps.storage, &env, &config)?;

    let raised = RAISED.load(deps.storage)?;
    let forwarded = FORWARDED.load(deps.storage)?;
    let pending = raised.checked_sub(forwarded)?;
    if pending.is_zero() {
        return Err(ContractError::NothingToForward);
    }

    let transfer_msg = cw20_transfer_msg(&config.accepted_token, &config.wallet, pending)?;
    FORWARDED.save(deps.storage, &raised)?;

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "forward_funds")
        .add_attribute("wallet", config.wallet)
        .add_attribute("amount", pending))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn ensure_settlement_open(
    storage: &dyn Storage,
    env: &Env,
    config: &Config,
) -> Result<(), ContractError> {
    let raised = RAISED.load(storage)?;
    if !config.cap_reached(raised) {
        return Err(ContractError::SaleNotEnded);
    }

    // Always present once the cap is reached
    let open_at = claimable_at(storage, config)?.ok_or(ContractError::SaleNotEnded)?;
    let now = env.block.time.seconds();
    if now < open_at {
        return Err(ContractError::WaitTimeNotElapsed {
            remaining_seconds: open_at - now,
        });
    }

    Ok(())
}
