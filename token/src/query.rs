//! Query handlers for the ledger token contract.

use cosmwasm_std::{Deps, Order, StdResult};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};
use cw_storage_plus::Bound;

use crate::msg::{AccountBalance, AllAccountsResponse, MinterResponse, OwnerResponse};
use crate::state::{ALLOWANCES, BALANCES, MINTER, OWNER, TOKEN_INFO};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Query token metadata and total supply.
pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

/// Allowances never expire.
pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse {
        allowance,
        expires: Expiration::Never {},
    })
}

pub fn query_minter(deps: Deps) -> StdResult<MinterResponse> {
    let minter = MINTER.may_load(deps.storage)?;
    Ok(MinterResponse { minter })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(OwnerResponse { owner })
}

/// Query paginated list of accounts with a non-zero balance.
pub fn query_all_accounts(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllAccountsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let accounts = BALANCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, balance) = item?;
            Ok(AccountBalance { address, balance })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AllAccountsResponse { accounts })
}
