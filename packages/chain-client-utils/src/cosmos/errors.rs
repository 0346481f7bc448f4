use std::num::TryFromIntError;

use cosmrs::ErrorReport;
use tonic::Status;

use crate::common::error::ChainClientError;

impl From<Status> for ChainClientError {
    fn from(value: Status) -> Self {
        ChainClientError::QueryError(value.to_string())
    }
}

impl From<ErrorReport> for ChainClientError {
    fn from(value: ErrorReport) -> Self {
        ChainClientError::ParseError(value.to_string())
    }
}

impl From<TryFromIntError> for ChainClientError {
    fn from(value: TryFromIntError) -> Self {
        ChainClientError::ParseError(value.to_string())
    }
}

impl From<serde_json::error::Error> for ChainClientError {
    fn from(value: serde_json::error::Error) -> Self {
        ChainClientError::ParseError(value.to_string())
    }
}

impl From<bip32::Error> for ChainClientError {
    fn from(value: bip32::Error) -> Self {
        ChainClientError::ParseError(value.to_string())
    }
}

impl From<cosmrs::tendermint::Error> for ChainClientError {
    fn from(value: cosmrs::tendermint::Error) -> Self {
        ChainClientError::ParseError(value.to_string())
    }
}

impl From<tonic::transport::Error> for ChainClientError {
    fn from(value: tonic::transport::Error) -> Self {
        ChainClientError::ClientError(value.to_string())
    }
}
