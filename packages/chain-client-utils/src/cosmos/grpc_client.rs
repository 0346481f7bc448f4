use async_trait::async_trait;
use cosmos_sdk_proto::cosmos::{
    base::abci::v1beta1::TxResponse,
    tx::v1beta1::{GetTxRequest, SimulateRequest, SimulateResponse},
};
use cosmrs::{tx::Fee, AccountId, Any, Coin};
use log::debug;
use tonic::transport::Channel;

use crate::common::error::ChainClientError;

use super::{
    fee::{calculate_fee, TxFee},
    signing_client::{derive_signing_key, SigningClient},
    CosmosServiceClient,
};

/// grpc client trait to enable opening a channel to a cosmos-sdk node.
/// implementing this trait is enough for read-only (query) access.
#[async_trait]
pub trait GrpcClient: Send + Sync {
    fn grpc_url(&self) -> String;

    /// opens and returns a grpc channel associated with the grpc url of the
    /// implementing client
    async fn get_grpc_channel(&self) -> Result<Channel, ChainClientError> {
        let channel = Channel::from_shared(self.grpc_url())
            .map_err(|_| ChainClientError::ClientError("failed to build channel".to_string()))?
            .connect()
            .await?;

        Ok(channel)
    }

    /// polls the node until the tx with the given hash is included in a block
    async fn poll_for_tx(&self, tx_hash: &str) -> Result<TxResponse, ChainClientError> {
        let channel = self.get_grpc_channel().await?;

        let mut grpc_client = CosmosServiceClient::new(channel);

        let request = GetTxRequest {
            hash: tx_hash.to_string(),
        };

        // for 10 seconds it will repeatedly fire tx polling requests to the node.
        let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(200));
        for _ in 0..50 {
            interval.tick().await;
            match grpc_client.get_tx(request.clone()).await {
                Ok(response) => {
                    if let Some(tx_response) = response.into_inner().tx_response {
                        return Ok(tx_response);
                    }
                }
                // not indexed yet, keep polling
                Err(status) if status.code() == tonic::Code::NotFound => continue,
                Err(status) => return Err(status.into()),
            }
        }

        Err(ChainClientError::QueryError(format!(
            "failed to confirm tx {tx_hash}"
        )))
    }
}

/// grpc signing client trait to enable transaction signing.
/// implementing this trait is a prerequisite for any clients submitting
/// transactions to a cosmos-sdk chain.
#[async_trait]
pub trait GrpcSigningClient: GrpcClient {
    fn mnemonic(&self) -> String;
    fn chain_prefix(&self) -> String;
    fn chain_id(&self) -> String;
    fn chain_denom(&self) -> String;
    fn gas_price(&self) -> f64;
    fn gas_adjustment(&self) -> f64;

    /// address of the account the mnemonic derives to. needs no node access.
    fn signer_address(&self) -> Result<AccountId, ChainClientError> {
        let signing_key = derive_signing_key(&self.mnemonic())?;

        Ok(signing_key.public_key().account_id(&self.chain_prefix())?)
    }

    /// returns a signing client associated with the implementing client config
    async fn get_signing_client(&self) -> Result<SigningClient, ChainClientError> {
        let channel = self.get_grpc_channel().await?;

        SigningClient::from_mnemonic(
            channel,
            &self.mnemonic(),
            &self.chain_prefix(),
            &self.chain_id(),
        )
        .await
    }

    /// resolves the fee to sign `msg` with. fixed fees are used as is,
    /// anything else gets simulated first.
    async fn resolve_fee(&self, msg: Any, fee: TxFee) -> Result<Fee, ChainClientError> {
        let multiplier = match fee {
            TxFee::Fixed(fee) => return Ok(fee),
            TxFee::Auto => self.gas_adjustment(),
            TxFee::Multiplier(multiplier) => multiplier,
        };

        let simulation_response = self.simulate_tx(msg).await?;

        let gas_used = simulation_response
            .gas_info
            .map(|info| info.gas_used)
            .ok_or_else(|| {
                ChainClientError::QueryError("no gas info in simulation response".to_string())
            })?;

        debug!("simulated gas used: {gas_used}, multiplier: {multiplier}");

        calculate_fee(
            gas_used,
            multiplier,
            self.gas_price(),
            &self.chain_denom(),
        )
    }

    async fn simulate_tx(&self, msg: Any) -> Result<SimulateResponse, ChainClientError> {
        let channel = self.get_grpc_channel().await?;
        let signer = self.get_signing_client().await?;

        let mut grpc_client = CosmosServiceClient::new(channel);

        let tx_body = cosmrs::tx::BodyBuilder::new().msg(msg).finish();
        let auth_info =
            cosmrs::tx::SignerInfo::single_direct(Some(signer.public_key), signer.sequence)
                .auth_info(Fee::from_amount_and_gas(
                    Coin {
                        denom: self.chain_denom().parse()?,
                        amount: 0,
                    },
                    0u64,
                ));

        let sign_doc = cosmrs::tx::SignDoc::new(
            &tx_body,
            &auth_info,
            &signer.chain_id.parse()?,
            signer.account_number,
        )?;

        let tx_raw = sign_doc.sign(&signer.signing_key)?;

        let request = SimulateRequest {
            // tx is deprecated so always None
            tx: None,
            tx_bytes: tx_raw.to_bytes()?,
        };

        let sim_response = grpc_client.simulate(request).await?.into_inner();

        Ok(sim_response)
    }
}
