use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Uint128};

/// one hop of a multi-hop swap path
#[cw_serde]
pub struct SwapAmountInRoute {
    pub pool_id: u64,
    pub token_out_denom: String,
}

impl SwapAmountInRoute {
    pub fn new(pool_id: u64, token_out_denom: impl Into<String>) -> Self {
        Self {
            pool_id,
            token_out_denom: token_out_denom.into(),
        }
    }
}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

/// bound on how much a swap may deviate from the expected output
#[cw_serde]
pub enum Slippage {
    MaxPriceImpactPercentage(Decimal),
    MinOutputAmount(Uint128),
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Sets the pool route used to swap `input_denom` into `output_denom`. Owner only.
    SetRoute {
        input_denom: String,
        output_denom: String,
        pool_route: Vec<SwapAmountInRoute>,
    },
    /// Swaps `input_coin` into `output_denom` along the configured route
    Swap {
        input_coin: Coin,
        output_denom: String,
        #[serde(rename = "slipage")]
        slippage: Slippage,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(GetOwnerResponse)]
    GetOwner {},
    #[returns(GetRouteResponse)]
    GetRoute {
        input_denom: String,
        output_denom: String,
    },
}

#[cw_serde]
pub struct GetOwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct GetRouteResponse {
    pub pool_route: Vec<SwapAmountInRoute>,
}
