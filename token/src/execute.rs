//! Execute handlers for the ledger token contract.
//!
//! Every handler validates all inputs and computes every new value before
//! the first storage write, so a failing call leaves no partial mutation.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage, Uint128};

use common::validate_address;

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES, MINTER, OWNER, TOKEN_INFO};

// ============================================================================
// Transfers
// ============================================================================

/// Move `amount` from the sender to `recipient`.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient =
        validate_address(deps.api, &recipient)?.ok_or(ContractError::InvalidRecipient)?;

    move_balance(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

/// Move `amount` from `owner` to `recipient`, debiting the sender's allowance.
///
/// Checks run in the order recipient, balance, allowance.
pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient =
        validate_address(deps.api, &recipient)?.ok_or(ContractError::InvalidRecipient)?;
    let owner = deps.api.addr_validate(&owner)?;

    let owner_balance = load_balance(deps.storage, &owner)?;
    if owner_balance < amount {
        return Err(ContractError::InsufficientBalance {
            available: owner_balance,
            required: amount,
        });
    }

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &info.sender))?
        .unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            available: allowance,
            required: amount,
        });
    }
    let remaining = allowance - amount;

    move_balance(deps.storage, &owner, &recipient, amount)?;
    write_allowance(deps.storage, &owner, &info.sender, remaining)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

// ============================================================================
// Allowances
// ============================================================================

/// Set the sender's allowance for `spender` to exactly `amount`.
pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = validate_address(deps.api, &spender)?.ok_or(ContractError::InvalidSpender)?;

    write_allowance(deps.storage, &info.sender, &spender, amount)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

// ============================================================================
// Minting
// ============================================================================

/// Create `amount` new tokens for `recipient`. Only the minter may call this.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let minter = MINTER.may_load(deps.storage)?;
    if minter.as_ref() != Some(&info.sender) {
        return Err(ContractError::NotMinter);
    }

    let recipient =
        validate_address(deps.api, &recipient)?.ok_or(ContractError::InvalidRecipient)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    let new_balance = load_balance(deps.storage, &recipient)?.checked_add(amount)?;

    TOKEN_INFO.save(deps.storage, &token_info)?;
    write_balance(deps.storage, &recipient, new_balance)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", token_info.total_supply))
}

/// Appoint a new minter. Only the owner may call this.
pub fn execute_set_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::NotOwner);
    }

    let minter = validate_address(deps.api, &minter)?.ok_or(ContractError::InvalidMinter)?;
    MINTER.save(deps.storage, &minter)?;

    Ok(Response::new()
        .add_attribute("action", "set_minter")
        .add_attribute("minter", minter))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn load_balance(storage: &dyn Storage, account: &Addr) -> Result<Uint128, ContractError> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

/// Zero balances are removed so the account listing only shows holders.
fn write_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    balance: Uint128,
) -> Result<(), ContractError> {
    if balance.is_zero() {
        BALANCES.remove(storage, account);
    } else {
        BALANCES.save(storage, account, &balance)?;
    }
    Ok(())
}

fn write_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)?;
    }
    Ok(())
}

/// Debit `from` and credit `to`. Both new balances are computed before either
/// is written.
fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let from_balance = load_balance(storage, from)?;
    if from_balance < amount {
        return Err(ContractError::InsufficientBalance {
            available: from_balance,
            required: amount,
        });
    }

    if from == to {
        return Ok(());
    }

    let new_from = from_balance - amount;
    let new_to = load_balance(storage, to)?.checked_add(amount)?;

    write_balance(storage, from, new_from)?;
    write_balance(storage, to, new_to)?;
    Ok(())
}
