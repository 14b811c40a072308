use cosmwasm_std::DecimalRangeExceeded;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid fixed-point amount: {0:?}")]
    InvalidAmount(String),

    #[error("{0}")]
    DecimalRangeExceeded(#[from] DecimalRangeExceeded),
}
