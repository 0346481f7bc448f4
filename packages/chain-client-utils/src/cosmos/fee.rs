use cosmrs::{tx::Fee, Coin};

use crate::common::error::ChainClientError;

/// how the fee of a transaction gets determined before signing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TxFee {
    /// simulate the tx and scale the gas used by the client's default adjustment
    #[default]
    Auto,
    /// simulate the tx and scale the gas used by the given multiplier
    Multiplier(f64),
    /// use the given fee as is. no simulation takes place.
    Fixed(Fee),
}

impl From<f64> for TxFee {
    fn from(multiplier: f64) -> Self {
        TxFee::Multiplier(multiplier)
    }
}

/// builds the fee for a simulated gas usage.
///
/// the gas limit is the simulated gas scaled by `multiplier` (rounded down),
/// and the fee amount is the gas limit priced at `gas_price` (rounded up).
pub fn calculate_fee(
    gas_used: u64,
    multiplier: f64,
    gas_price: f64,
    denom: &str,
) -> Result<Fee, ChainClientError> {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(ChainClientError::ClientError(format!(
            "invalid gas multiplier: {multiplier}"
        )));
    }
    if !gas_price.is_finite() || gas_price < 0.0 {
        return Err(ChainClientError::ClientError(format!(
            "invalid gas price: {gas_price}"
        )));
    }

    let gas_limit = (gas_used as f64 * multiplier).floor() as u64;
    let amount = (gas_limit as f64 * gas_price).ceil() as u128;

    Ok(Fee::from_amount_and_gas(
        Coin {
            denom: denom.parse()?,
            amount,
        },
        gas_limit,
    ))
}
