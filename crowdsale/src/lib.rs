//! Crowdsale Contract - Capped Sale of a Mintable Ledger Token
//!
//! Buyers exchange an accepted cw20 token for newly minted ledger tokens at a
//! fixed rate until the cap on raised funds is hit.
//!
//! # Purchase Flow
//! 1. Buyer grants this contract an allowance on the accepted token
//! 2. Buyer calls `BuyTokens { amount }`
//! 3. The contract pulls `amount` into escrow and mints `amount * rate`
//!    ledger tokens to the buyer
//! 4. The purchase is recorded against the buyer as an outstanding claim
//!
//! # Settlement Flow
//! 1. The purchase that fills the cap exactly stamps `cap_reached_at`
//! 2. After `wait_time` seconds each buyer calls `ClaimTokens` once to settle
//!    their record
//! 3. Anyone may call `ForwardFunds` to send escrowed proceeds to the wallet
//!
//! The contract must hold the ledger token's minter role. Storage writes and
//! the dispatched `TransferFrom`/`Mint` messages commit or revert together.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
