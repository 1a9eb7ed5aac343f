use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("transaction points must be greater than zero")]
    ZeroPoints,

    #[error("unknown transaction kind: {0:?}")]
    UnknownKind(String),

    #[error("date arithmetic out of range from {0}")]
    DateOutOfRange(NaiveDate),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
