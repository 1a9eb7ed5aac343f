use chrono::NaiveDate;
use ptrack_types::{Points, TypeError};

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient balance on {date}: requested {requested}, available {available}")]
    InsufficientBalance {
        date: NaiveDate,
        requested: Points,
        available: Points,
    },

    #[error("points earned on {date} overflow the total earned across all lots")]
    PointsOverflow { date: NaiveDate },

    #[error("forecast window out of range from {0}")]
    DateOutOfRange(NaiveDate),

    #[error(transparent)]
    Type(#[from] TypeError),
}
