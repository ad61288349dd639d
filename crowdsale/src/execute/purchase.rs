//! Purchase handler.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use common::{cw20_mint_msg, cw20_transfer_from_msg};

use crate::error::ContractError;
use crate::state::{CAP_REACHED_AT, CONFIG, PURCHASES, RAISED};

/// Buy `amount * rate` ledger tokens for `amount` of the accepted token.
///
/// Checks run in order: zero amount, sale ended, cap exceeded. The cap is
/// inclusive, so a purchase landing exactly on it is accepted and closes the
/// sale. Funds are pulled with `TransferFrom` before the `Mint`; if either
/// message fails the whole purchase reverts, including the bookkeeping below.
pub fn execute_buy_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let raised = RAISED.load(deps.storage)?;
    if config.cap_reached(raised) {
        return Err(ContractError::SaleEnded);
    }

    let new_raised = match raised.checked_add(amount) {
        Ok(total) if total <= config.cap => total,
        _ => {
            return Err(ContractError::CapExceeded {
                remaining: config.cap - raised,
            })
        }
    };

    let tokens = amount.checked_mul(config.rate)?;
    let outstanding = PURCHASES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        .checked_add(tokens)?;

    let pull_msg = cw20_transfer_from_msg(
        &config.accepted_token,
        &info.sender,
        &env.contract.address,
        amount,
    )?;
    let mint_msg = cw20_mint_msg(&config.token, &info.sender, tokens)?;

    RAISED.save(deps.storage, &new_raised)?;
    PURCHASES.save(deps.storage, &info.sender, &outstanding)?;

    let cap_reached = config.cap_reached(new_raised);
    if cap_reached && CAP_REACHED_AT.may_load(deps.storage)?.is_none() {
        CAP_REACHED_AT.save(deps.storage, &env.block.time)?;
    }

    Ok(Response::new()
        .add_message(pull_msg)
        .add_message(mint_msg)
        .add_attribute("action", "buy_tokens")
        .add_attribute("buyer", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("tokens", tokens)
        .add_attribute("raised", new_raised)
        .add_attribute("cap_reached", cap_reached.to_string()))
}
