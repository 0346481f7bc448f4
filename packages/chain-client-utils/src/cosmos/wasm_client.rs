use std::str::FromStr;

use async_trait::async_trait;
use cosmrs::{
    cosmwasm::MsgExecuteContract, proto::cosmwasm::wasm::v1::QuerySmartContractStateRequest,
    tx::Msg, AccountId, Coin,
};
use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};
use tonic::Request;

use crate::common::{error::ChainClientError, transaction::TransactionResponse};

use super::{
    fee::TxFee,
    grpc_client::{GrpcClient, GrpcSigningClient},
    CosmosServiceClient, WasmQueryClient,
};

/// read-only access to the wasm module of a chain.
#[async_trait]
pub trait WasmClient: Send + Sync {
    /// runs a smart query against `contract_address`. the query message is
    /// sent as json and the response data is parsed from json.
    async fn query_contract_smart<T: DeserializeOwned>(
        &self,
        contract_address: &str,
        query_msg: (impl Serialize + Send),
    ) -> Result<T, ChainClientError>;
}

/// signed access to the wasm module of a chain.
#[async_trait]
pub trait SigningWasmClient: WasmClient {
    /// executes `msg` on `contract_address` in a transaction signed by `sender`
    /// and waits for it to be included in a block.
    async fn execute(
        &self,
        sender: &str,
        contract_address: &str,
        msg: (impl Serialize + Send),
        fee: TxFee,
        memo: Option<&str>,
        funds: Vec<Coin>,
    ) -> Result<TransactionResponse, ChainClientError>;
}

/// any grpc client can query contracts through the wasm query service.
#[async_trait]
impl<C: GrpcClient> WasmClient for C {
    async fn query_contract_smart<T: DeserializeOwned>(
        &self,
        contract_address: &str,
        query_msg: (impl Serialize + Send),
    ) -> Result<T, ChainClientError> {
        let channel = self.get_grpc_channel().await?;

        let mut grpc_client = WasmQueryClient::new(channel);

        let bin_query = serde_json::to_vec(&query_msg)?;

        debug!(
            "querying {contract_address}: {}",
            String::from_utf8_lossy(&bin_query)
        );

        let request = QuerySmartContractStateRequest {
            address: contract_address.to_string(),
            query_data: bin_query,
        };

        let response = grpc_client
            .smart_contract_state(Request::new(request))
            .await?
            .into_inner();

        let parsed: T = serde_json::from_slice(&response.data)?;

        Ok(parsed)
    }
}

/// any grpc signing client can execute contracts with its own key.
#[async_trait]
impl<C: GrpcSigningClient> SigningWasmClient for C {
    async fn execute(
        &self,
        sender: &str,
        contract_address: &str,
        msg: (impl Serialize + Send),
        fee: TxFee,
        memo: Option<&str>,
        funds: Vec<Coin>,
    ) -> Result<TransactionResponse, ChainClientError> {
        let signer_address = self.signer_address()?;
        if signer_address.to_string() != sender {
            return Err(ChainClientError::ClientError(format!(
                "sender {sender} does not match signer {signer_address}"
            )));
        }

        let signing_client = self.get_signing_client().await?;

        let msg_bytes = serde_json::to_vec(&msg)?;

        debug!(
            "executing on {contract_address}: {}",
            String::from_utf8_lossy(&msg_bytes)
        );

        let wasm_tx = MsgExecuteContract {
            sender: signing_client.address.clone(),
            contract: AccountId::from_str(contract_address)?,
            msg: msg_bytes,
            funds,
        }
        .to_any()?;

        let tx_fee = self.resolve_fee(wasm_tx.clone(), fee).await?;

        let raw_tx = signing_client.create_tx(wasm_tx, tx_fee, memo).await?;

        let channel = self.get_grpc_channel().await?;

        let mut grpc_client = CosmosServiceClient::new(channel);

        let broadcast_tx_response = grpc_client.broadcast_tx(raw_tx).await?.into_inner();

        let tx_response = broadcast_tx_response.tx_response.ok_or_else(|| {
            ChainClientError::TransactionError("no tx response from broadcast".to_string())
        })?;

        // a non-zero code here means the tx was rejected before reaching the mempool
        if tx_response.code != 0 {
            return Err(ChainClientError::TransactionError(format!(
                "broadcast of tx {} failed with code {}: {}",
                tx_response.txhash, tx_response.code, tx_response.raw_log
            )));
        }

        info!("broadcasted tx {}", tx_response.txhash);

        let included_tx = self.poll_for_tx(&tx_response.txhash).await?;

        TransactionResponse::try_from(included_tx)
    }
}
