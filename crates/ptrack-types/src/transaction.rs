use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::Points;

/// Direction of a points transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Points granted; creates a new lot.
    Earned,
    /// Points spent; drains existing lots oldest first.
    Used,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earned => "Earned",
            Self::Used => "Used",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Earned" => Ok(Self::Earned),
            "Used" => Ok(Self::Used),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

/// An immutable earn or spend event.
///
/// Point counts are validated at construction: zero is rejected and negative
/// values cannot be expressed. Deserialization goes through the same check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    date: NaiveDate,
    kind: TransactionKind,
    points: Points,
}

impl Transaction {
    pub fn new(date: NaiveDate, kind: TransactionKind, points: Points) -> Result<Self, TypeError> {
        if points == 0 {
            return Err(TypeError::ZeroPoints);
        }
        Ok(Self { date, kind, points })
    }

    /// An `Earned` transaction.
    pub fn earned(date: NaiveDate, points: Points) -> Result<Self, TypeError> {
        Self::new(date, TransactionKind::Earned, points)
    }

    /// A `Used` transaction.
    pub fn used(date: NaiveDate, points: Points) -> Result<Self, TypeError> {
        Self::new(date, TransactionKind::Used, points)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn is_earned(&self) -> bool {
        self.kind == TransactionKind::Earned
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.kind, self.points)
    }
}

#[derive(Deserialize)]
struct TransactionRecord {
    date: NaiveDate,
    kind: TransactionKind,
    points: Points,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TypeError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Self::new(record.date, record.kind, record.points)
    }
}
