//! Execute handlers for the crowdsale contract.
//!
//! - `purchase` - BuyTokens
//! - `settlement` - ClaimTokens and ForwardFunds, gated on sale end plus wait time

mod purchase;
mod settlement;

pub use purchase::*;
pub use settlement::*;
