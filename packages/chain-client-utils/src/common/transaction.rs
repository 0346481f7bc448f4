use cosmos_sdk_proto::cosmos::base::abci::v1beta1::TxResponse;

use super::error::ChainClientError;

/// outcome of a transaction that was included in a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResponse {
    pub hash: String,
    pub block_height: u64,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub raw_log: String,
}

impl TryFrom<TxResponse> for TransactionResponse {
    type Error = ChainClientError;

    fn try_from(value: TxResponse) -> Result<Self, Self::Error> {
        if value.code != 0 {
            return Err(ChainClientError::TransactionError(format!(
                "tx {} failed with code {}: {}",
                value.txhash, value.code, value.raw_log
            )));
        }

        Ok(Self {
            hash: value.txhash,
            block_height: u64::try_from(value.height)?,
            gas_wanted: u64::try_from(value.gas_wanted)?,
            gas_used: u64::try_from(value.gas_used)?,
            raw_log: value.raw_log,
        })
    }
}
