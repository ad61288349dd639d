//! Common - Shared Utilities for the Ledger Token and Crowdsale Contracts
//!
//! This package provides the address validation rules and cw20 message
//! builders used by both contracts.

pub mod address;
pub mod cw20_msg;

pub use address::{is_zero_address, validate_address};
pub use cw20_msg::{cw20_mint_msg, cw20_transfer_from_msg, cw20_transfer_msg};
