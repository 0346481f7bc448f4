use std::sync::Mutex;

use async_trait::async_trait;
use cosmrs::Coin;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use swaprouter_chain_client_utils::{
    common::{error::ChainClientError, transaction::TransactionResponse},
    cosmos::{
        fee::TxFee,
        wasm_client::{SigningWasmClient, WasmClient},
    },
};

pub const CONTRACT_ADDR: &str = "osmo14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9sq2r9g9";
pub const SENDER_ADDR: &str = "osmo1kljf09rj77uxeu5lye7muejx6ajsu55cuw2mws";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedExecute {
    pub sender: String,
    pub contract_address: String,
    pub msg: Value,
    pub fee: TxFee,
    pub memo: Option<String>,
    pub funds: Vec<Coin>,
}

/// wasm client that records every call and answers queries with a canned response
#[derive(Default)]
pub struct MockWasmClient {
    query_response: Value,
    failure: Option<ChainClientError>,
    queries: Mutex<Vec<(String, Value)>>,
    executions: Mutex<Vec<RecordedExecute>>,
}

impl MockWasmClient {
    pub fn responding_with(query_response: Value) -> Self {
        Self {
            query_response,
            ..Default::default()
        }
    }

    pub fn failing_with(failure: ChainClientError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn tx_response() -> TransactionResponse {
        TransactionResponse {
            hash: "4F0B2C1A".to_string(),
            block_height: 42,
            gas_wanted: 200_000,
            gas_used: 150_000,
            raw_log: "".to_string(),
        }
    }

    pub fn recorded_queries(&self) -> Vec<(String, Value)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn recorded_executions(&self) -> Vec<RecordedExecute> {
        self.executions.lock().unwrap().clone()
    }
}

#[async_trait]
impl WasmClient for MockWasmClient {
    async fn query_contract_smart<T: DeserializeOwned>(
        &self,
        contract_address: &str,
        query_msg: (impl Serialize + Send),
    ) -> Result<T, ChainClientError> {
        self.queries.lock().unwrap().push((
            contract_address.to_string(),
            serde_json::to_value(&query_msg)?,
        ));

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(serde_json::from_value(self.query_response.clone())?)
    }
}

#[async_trait]
impl SigningWasmClient for MockWasmClient {
    async fn execute(
        &self,
        sender: &str,
        contract_address: &str,
        msg: (impl Serialize + Send),
        fee: TxFee,
        memo: Option<&str>,
        funds: Vec<Coin>,
    ) -> Result<TransactionResponse, ChainClientError> {
        self.executions.lock().unwrap().push(RecordedExecute {
            sender: sender.to_string(),
            contract_address: contract_address.to_string(),
            msg: serde_json::to_value(&msg)?,
            fee,
            memo: memo.map(str::to_string),
            funds,
        });

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(Self::tx_response())
    }
}
