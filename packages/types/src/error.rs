use cosmwasm_std::{CheckedFromRatioError, DecimalRangeExceeded, OverflowError};
use lendview_math::FormatError;
use thiserror::Error;

pub type HealthResult<T> = Result<T, HealthError>;

#[derive(Error, Debug, PartialEq)]
pub enum HealthError {
    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    DecimalRangeExceeded(#[from] DecimalRangeExceeded),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0} was not provided an asset config to compute health with")]
    MissingAssetConfig(String),

    #[error("{0} was not provided a price to compute health with")]
    MissingPrice(String),

    #[error("Health factor floor must be greater than zero, got {0}")]
    InvalidFloor(String),

    #[error("{0}")]
    Overflow(#[from] OverflowError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid param: {param_name} is {invalid_value}, but it should be {predicate}")]
    InvalidParam {
        param_name: String,
        invalid_value: String,
        predicate: String,
    },

    #[error("Invalid address: {reason}")]
    InvalidAddress {
        reason: String,
    },

    #[error("Invalid config: {reason}")]
    InvalidConfig {
        reason: String,
    },
}
