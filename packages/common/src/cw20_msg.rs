//! cw20 message builders.
//!
//! Both the ledger token and any accepted-token contract speak the cw20
//! `transfer`, `transfer_from` and `mint` messages, so the crowdsale only ever
//! needs these three.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

fn wasm_execute(contract: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

/// Transfer `amount` of `token` from the calling contract to `recipient`.
pub fn cw20_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    wasm_execute(
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Pull `amount` of `token` from `owner` to `recipient` using the calling
/// contract's allowance.
pub fn cw20_transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    wasm_execute(
        token,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Mint `amount` of `token` to `recipient`. The calling contract must hold the
/// token's minting authority.
pub fn cw20_mint_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    wasm_execute(
        token,
        &Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn test_mint_msg_targets_token() {
        let token = Addr::unchecked("contract0");
        let recipient = Addr::unchecked("terra1buyer");
        let msg = cw20_mint_msg(&token, &recipient, Uint128::new(10)).unwrap();

        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "contract0");
                assert!(funds.is_empty());
                let decoded: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    decoded,
                    Cw20ExecuteMsg::Mint {
                        recipient: "terra1buyer".to_string(),
                        amount: Uint128::new(10),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_transfer_from_msg_fields() {
        let token = Addr::unchecked("contract1");
        let owner = Addr::unchecked("terra1buyer");
        let sale = Addr::unchecked("contract2");
        let msg = cw20_transfer_from_msg(&token, &owner, &sale, Uint128::new(5)).unwrap();

        let CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) = msg else {
            panic!("expected wasm execute");
        };
        let decoded: Cw20ExecuteMsg = from_json(msg).unwrap();
        assert_eq!(
            decoded,
            Cw20ExecuteMsg::TransferFrom {
                owner: "terra1buyer".to_string(),
                recipient: "contract2".to_string(),
                amount: Uint128::new(5),
            }
        );
    }
}
