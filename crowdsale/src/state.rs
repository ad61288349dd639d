//! State definitions for the crowdsale contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:crowdsale";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sale parameters, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Ledger tokens minted per unit of accepted token
    pub rate: Uint128,
    /// Beneficiary of the raised funds
    pub wallet: Addr,
    /// Ledger token contract being sold (this contract must be its minter)
    pub token: Addr,
    /// cw20 contract buyers pay with
    pub accepted_token: Addr,
    /// Ceiling on the total accepted-token amount raised
    pub cap: Uint128,
    /// Seconds after the cap is reached before claims open
    pub wait_time: u64,
}

impl Config {
    /// Whether `raised` fills the cap. Once true the sale has ended.
    pub fn cap_reached(&self, raised: Uint128) -> bool {
        raised >= self.cap
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Total accepted-token amount received so far, never above the cap
pub const RAISED: Item<Uint128> = Item::new("raised");

/// Block time of the purchase that filled the cap. Written once.
pub const CAP_REACHED_AT: Item<Timestamp> = Item::new("cap_reached_at");

/// Accepted-token proceeds already sent to the wallet
pub const FORWARDED: Item<Uint128> = Item::new("forwarded");

/// buyer => ledger tokens credited and not yet settled by a claim
pub const PURCHASES: Map<&Addr, Uint128> = Map::new("purchases");

/// Unix time (seconds) at which claims open, if the cap has been reached.
pub fn claimable_at(storage: &dyn Storage, config: &Config) -> StdResult<Option<u64>> {
    Ok(CAP_REACHED_AT
        .may_load(storage)?
        .map(|reached_at| reached_at.seconds().saturating_add(config.wait_time)))
}
