use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};

use crate::msg::SwapAmountInRoute;

/// contract state as persisted on chain
#[cw_serde]
pub struct State {
    pub owner: Addr,
}

/// swap message recorded by the contract while it waits for the swap reply
#[cw_serde]
pub struct SwapMsgReplyState {
    pub original_sender: Addr,
    pub swap_msg: MsgSwapExactAmountIn,
}

#[cw_serde]
pub struct MsgSwapExactAmountIn {
    pub routes: Vec<SwapAmountInRoute>,
    pub sender: String,
    pub token_in: Option<Coin>,
    pub token_out_min_amount: String,
}
