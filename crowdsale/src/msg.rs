//! Message types for the crowdsale contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Ledger tokens minted per unit of accepted token (non-zero)
    pub rate: Uint128,
    /// Beneficiary of the raised funds
    pub wallet: String,
    /// Ledger token contract being sold
    pub token: String,
    /// cw20 contract buyers pay with
    pub accepted_token: String,
    /// Maximum total accepted-token amount to raise (non-zero)
    pub cap: Uint128,
    /// Seconds to wait after the cap is reached before claims open
    pub wait_time: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy ledger tokens with `amount` of the accepted token.
    ///
    /// The sender must have approved this contract for at least `amount` on
    /// the accepted token. Purchases that would push the raised total past
    /// the cap are rejected; a purchase landing exactly on the cap closes
    /// the sale.
    BuyTokens { amount: Uint128 },

    /// Settle the sender's outstanding purchase record.
    ///
    /// Authorization: any buyer with a non-zero record, once the sale has
    /// ended and the wait time has elapsed.
    ClaimTokens {},

    /// Send escrowed accepted-token proceeds to the wallet.
    ///
    /// Authorization: anyone, under the same timing rules as `ClaimTokens`.
    ForwardFunds {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Sale parameters
    #[returns(ConfigResponse)]
    Config {},
    /// Whether the raised total has reached the cap
    #[returns(CapReachedResponse)]
    CapReached {},
    /// Whether the sale has ended (same predicate as `CapReached`)
    #[returns(EndedResponse)]
    Ended {},
    /// Raised total, remaining capacity and settlement timing
    #[returns(StatusResponse)]
    Status {},
    /// Outstanding ledger tokens recorded for `address`
    #[returns(PurchaseResponse)]
    Purchase { address: String },
    /// Paginated list of outstanding purchase records
    #[returns(PurchasesResponse)]
    Purchases {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub rate: Uint128,
    pub wallet: Addr,
    pub token: Addr,
    pub accepted_token: Addr,
    pub cap: Uint128,
    pub wait_time: u64,
}

#[cw_serde]
pub struct CapReachedResponse {
    pub cap_reached: bool,
}

#[cw_serde]
pub struct EndedResponse {
    pub ended: bool,
}

#[cw_serde]
pub struct StatusResponse {
    /// Accepted-token amount raised so far
    pub raised: Uint128,
    pub cap: Uint128,
    /// Capacity left before the cap
    pub remaining: Uint128,
    /// Unix seconds when the cap was reached
    pub cap_reached_at: Option<u64>,
    /// Unix seconds when claims open
    pub claimable_at: Option<u64>,
    /// Proceeds already sent to the wallet
    pub forwarded: Uint128,
}

#[cw_serde]
pub struct PurchaseResponse {
    pub address: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct PurchasesResponse {
    pub purchases: Vec<PurchaseResponse>,
}
