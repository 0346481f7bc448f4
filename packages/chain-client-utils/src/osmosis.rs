use async_trait::async_trait;

use crate::cosmos::grpc_client::{GrpcClient, GrpcSigningClient};

const CHAIN_PREFIX: &str = "osmo";
const CHAIN_DENOM: &str = "uosmo";
const DEFAULT_GAS_PRICE: f64 = 0.0025;
const DEFAULT_GAS_ADJUSTMENT: f64 = 1.8;

/// read-only client for querying the osmosis chain
#[derive(Debug, Clone)]
pub struct OsmosisQueryClient {
    grpc_url: String,
}

impl OsmosisQueryClient {
    pub fn new(grpc_url: &str) -> Self {
        Self {
            grpc_url: grpc_url.to_string(),
        }
    }
}

#[async_trait]
impl GrpcClient for OsmosisQueryClient {
    fn grpc_url(&self) -> String {
        self.grpc_url.to_string()
    }
}

/// client for interacting with the osmosis chain
pub struct OsmosisClient {
    grpc_url: String,
    mnemonic: String,
    chain_id: String,
    chain_denom: String,
    chain_prefix: String,
    gas_price: f64,
    gas_adjustment: f64,
}

impl OsmosisClient {
    pub fn new(grpc_url: &str, mnemonic: &str, chain_id: &str) -> Self {
        Self {
            grpc_url: grpc_url.to_string(),
            mnemonic: mnemonic.to_string(),
            chain_id: chain_id.to_string(),
            chain_denom: CHAIN_DENOM.to_string(),
            chain_prefix: CHAIN_PREFIX.to_string(),
            gas_price: DEFAULT_GAS_PRICE,
            gas_adjustment: DEFAULT_GAS_ADJUSTMENT,
        }
    }

    /// price per unit of gas, in `uosmo`
    pub fn with_gas_price(mut self, gas_price: f64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// multiplier applied to simulated gas when the fee is `TxFee::Auto`
    pub fn with_gas_adjustment(mut self, gas_adjustment: f64) -> Self {
        self.gas_adjustment = gas_adjustment;
        self
    }
}

#[async_trait]
impl GrpcClient for OsmosisClient {
    fn grpc_url(&self) -> String {
        self.grpc_url.to_string()
    }
}

#[async_trait]
impl GrpcSigningClient for OsmosisClient {
    fn mnemonic(&self) -> String {
        self.mnemonic.to_string()
    }

    fn chain_prefix(&self) -> String {
        self.chain_prefix.to_string()
    }

    fn chain_id(&self) -> String {
        self.chain_id.to_string()
    }

    fn chain_denom(&self) -> String {
        self.chain_denom.to_string()
    }

    fn gas_price(&self) -> f64 {
        self.gas_price
    }

    fn gas_adjustment(&self) -> f64 {
        self.gas_adjustment
    }
}
