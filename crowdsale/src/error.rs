//! Error types for the crowdsale contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Instantiation Errors
    // ========================================================================

    #[error("Crowdsale: rate is 0")]
    InvalidRate,

    #[error("Crowdsale: wallet is the zero address")]
    InvalidWallet,

    #[error("Crowdsale: token is the zero address")]
    InvalidToken,

    #[error("Crowdsale: accepted token is the zero address")]
    InvalidAcceptedToken,

    #[error("Crowdsale: cap is 0")]
    InvalidCap,

    // ========================================================================
    // Purchase Errors
    // ========================================================================

    #[error("Purchase amount is 0")]
    ZeroAmount,

    #[error("Sale has ended: cap reached")]
    SaleEnded,

    #[error("Cap exceeded: only {remaining} remaining")]
    CapExceeded { remaining: Uint128 },

    // ========================================================================
    // Settlement Errors
    // ========================================================================

    #[error("Sale not closed: cap not reached")]
    SaleNotEnded,

    #[error("Wait time not over: {remaining_seconds} seconds remaining")]
    WaitTimeNotElapsed { remaining_seconds: u64 },

    #[error("Sender is not due any tokens")]
    NothingDue,

    #[error("No proceeds left to forward")]
    NothingToForward,
}
