//! State definitions for the ledger token contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:ledger-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable token metadata plus the running total supply
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Instantiating address, governs minter changes
pub const OWNER: Item<Addr> = Item::new("owner");

/// Address allowed to mint. Absent until the owner sets one.
pub const MINTER: Item<Addr> = Item::new("minter");

/// account => balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// (owner, spender) => remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");
