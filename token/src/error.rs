//! Error types for the ledger token contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can change the minter")]
    NotOwner,

    #[error("Unauthorized: only the minter can mint new tokens")]
    NotMinter,

    // ========================================================================
    // Address Errors
    // ========================================================================

    #[error("Invalid recipient: can not send or mint to the zero address")]
    InvalidRecipient,

    #[error("Invalid spender: can not approve the zero address")]
    InvalidSpender,

    #[error("Invalid minter: minter can not be changed to the zero address")]
    InvalidMinter,

    // ========================================================================
    // Funds Errors
    // ========================================================================

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        available: Uint128,
        required: Uint128,
    },
}
