//! Ledger Token Contract - Fungible Token with a Restricted Minting Authority
//!
//! Balances, allowances and total supply for a single fungible token. The
//! instantiating address becomes the immutable owner and receives the initial
//! supply. New supply can only be created by the current minter, which the
//! owner appoints with `SetMinter`.
//!
//! # Invariants
//! - The sum of all balances equals the total supply
//! - The zero address never holds a balance, allowance or the minter role
//! - Balances and allowances never underflow: every debit is checked first
//!
//! The `transfer`, `transfer_from` and `mint` messages share the cw20 wire
//! format, so cw20-speaking contracts can pull funds and mint.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
