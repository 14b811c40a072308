use cosmwasm_std::{Decimal256RangeExceeded, DecimalRangeExceeded};
use lendview_math::FormatError;
use lendview_types::error::{HealthError, ValidationError};
use thiserror::Error;

pub type ReaderResult<T> = Result<T, ReaderError>;

#[derive(Error, Debug, PartialEq)]
pub enum ReaderError {
    #[error("Query {method} failed: {reason}")]
    Query {
        method: String,
        reason: String,
    },

    #[error("Malformed {method} response: {reason}")]
    MalformedResponse {
        method: String,
        reason: String,
    },

    #[error("{0}")]
    Health(#[from] HealthError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0}")]
    DecimalRangeExceeded(#[from] DecimalRangeExceeded),

    #[error("{0}")]
    Decimal256RangeExceeded(#[from] Decimal256RangeExceeded),
}
