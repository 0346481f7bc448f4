use cosmrs::Coin;
use log::info;
use swaprouter_chain_client_utils::{
    common::{error::ChainClientError, transaction::TransactionResponse},
    cosmos::{fee::TxFee, wasm_client::SigningWasmClient},
};
use swaprouter_utils::msg::{
    ExecuteMsg, GetOwnerResponse, GetRouteResponse, Slippage, SwapAmountInRoute,
};

use crate::query_client::SwaprouterQueryClient;

/// client for querying and executing a deployed swaprouter contract.
///
/// transactions are signed by `sender`, which has to be the account the
/// underlying signing client holds the key of.
pub struct SwaprouterClient<C> {
    querier: SwaprouterQueryClient<C>,
    sender: String,
}

impl<C: SigningWasmClient> SwaprouterClient<C> {
    pub fn new(client: C, sender: &str, contract_address: &str) -> Self {
        Self {
            querier: SwaprouterQueryClient::new(client, contract_address),
            sender: sender.to_string(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn contract_address(&self) -> &str {
        self.querier.contract_address()
    }

    /// the read-only half of this client
    pub fn querier(&self) -> &SwaprouterQueryClient<C> {
        &self.querier
    }

    pub async fn get_owner(&self) -> Result<GetOwnerResponse, ChainClientError> {
        self.querier.get_owner().await
    }

    pub async fn get_route(
        &self,
        input_denom: &str,
        output_denom: &str,
    ) -> Result<GetRouteResponse, ChainClientError> {
        self.querier.get_route(input_denom, output_denom).await
    }

    /// sets the pool route for swapping `input_denom` into `output_denom`.
    /// only the contract owner may do this.
    pub async fn set_route(
        &self,
        input_denom: &str,
        output_denom: &str,
        pool_route: Vec<SwapAmountInRoute>,
        fee: TxFee,
        memo: Option<&str>,
        funds: Vec<Coin>,
    ) -> Result<TransactionResponse, ChainClientError> {
        info!(
            "setting route {input_denom} -> {output_denom} over {} pool(s)",
            pool_route.len()
        );

        self.execute(
            ExecuteMsg::SetRoute {
                input_denom: input_denom.to_string(),
                output_denom: output_denom.to_string(),
                pool_route,
            },
            fee,
            memo,
            funds,
        )
        .await
    }

    /// swaps `input_coin` into `output_denom` along the configured route.
    /// the input has to be attached through `funds`.
    pub async fn swap(
        &self,
        input_coin: cosmwasm_std::Coin,
        output_denom: &str,
        slippage: Slippage,
        fee: TxFee,
        memo: Option<&str>,
        funds: Vec<Coin>,
    ) -> Result<TransactionResponse, ChainClientError> {
        info!("swapping {input_coin} into {output_denom}");

        self.execute(
            ExecuteMsg::Swap {
                input_coin,
                output_denom: output_denom.to_string(),
                slippage,
            },
            fee,
            memo,
            funds,
        )
        .await
    }

    async fn execute(
        &self,
        msg: ExecuteMsg,
        fee: TxFee,
        memo: Option<&str>,
        funds: Vec<Coin>,
    ) -> Result<TransactionResponse, ChainClientError> {
        self.querier
            .client()
            .execute(
                &self.sender,
                self.querier.contract_address(),
                msg,
                fee,
                memo,
                funds,
            )
            .await
    }
}
