//! Message types for the ledger token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes owner and receives `initial_supply`.
#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_supply: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` from the sender to `recipient`
    Transfer { recipient: String, amount: Uint128 },
    /// Set the sender's allowance for `spender` to exactly `amount`
    Approve { spender: String, amount: Uint128 },
    /// Move `amount` from `owner` to `recipient`, spending the sender's allowance.
    /// Field names match cw20 `transfer_from`.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Minter only: create `amount` new tokens for `recipient`
    Mint { recipient: String, amount: Uint128 },
    /// Owner only: appoint a new minter
    SetMinter { minter: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Name, symbol, decimals and total supply
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},
    /// Balance of `address` (zero if unknown)
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
    /// Remaining allowance of `spender` over `owner`'s balance
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Current minter, if one has been set
    #[returns(MinterResponse)]
    Minter {},
    /// Owner address
    #[returns(OwnerResponse)]
    Owner {},
    /// Paginated list of accounts holding a balance
    #[returns(AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MinterResponse {
    pub minter: Option<Addr>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct AccountBalance {
    pub address: Addr,
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllAccountsResponse {
    pub accounts: Vec<AccountBalance>,
}
