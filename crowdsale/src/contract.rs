//! Crowdsale Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Purchase and settlement handlers
//! - `query` - Query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use common::validate_address;

use crate::error::ContractError;
use crate::execute::{execute_buy_tokens, execute_claim_tokens, execute_forward_funds};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_cap_reached, query_config, query_ended, query_purchase, query_purchases, query_status,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FORWARDED, RAISED};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.rate.is_zero() {
        return Err(ContractError::InvalidRate);
    }
    let wallet = validate_address(deps.api, &msg.wallet)?.ok_or(ContractError::InvalidWallet)?;
    let token = validate_address(deps.api, &msg.token)?.ok_or(ContractError::InvalidToken)?;
    let accepted_token = validate_address(deps.api, &msg.accepted_token)?
        .ok_or(ContractError::InvalidAcceptedToken)?;
    if msg.cap.is_zero() {
        return Err(ContractError::InvalidCap);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        rate: msg.rate,
        wallet,
        token,
        accepted_token,
        cap: msg.cap,
        wait_time: msg.wait_time,
    };
    CONFIG.save(deps.storage, &config)?;
    RAISED.save(deps.storage, &Uint128::zero())?;
    FORWARDED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("rate", config.rate)
        .add_attribute("wallet", config.wallet)
        .add_attribute("token", config.token)
        .add_attribute("accepted_token", config.accepted_token)
        .add_attribute("cap", config.cap)
        .add_attribute("wait_time", config.wait_time.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BuyTokens { amount } => execute_buy_tokens(deps, env, info, amount),
        ExecuteMsg::ClaimTokens {} => execute_claim_tokens(deps, env, info),
        ExecuteMsg::ForwardFunds {} => execute_forward_funds(deps, env),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CapReached {} => to_json_binary(&query_cap_reached(deps)?),
        QueryMsg::Ended {} => to_json_binary(&query_ended(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::Purchase { address } => to_json_binary(&query_purchase(deps, address)?),
        QueryMsg::Purchases { start_after, limit } => {
            to_json_binary(&query_purchases(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
