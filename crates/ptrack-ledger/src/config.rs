use serde::{Deserialize, Serialize};

use ptrack_types::TransactionKind;

/// How transactions that share a date are ordered during replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameDayOrder {
    /// Keep the order in which transactions were appended.
    #[default]
    AppendOrder,
    /// Apply all of a day's earnings before any of its spends.
    EarnedFirst,
    /// Apply all of a day's spends before any of its earnings.
    UsedFirst,
}

impl SameDayOrder {
    /// Sort rank of `kind` within a single day. Equal ranks keep append order.
    pub fn rank(self, kind: TransactionKind) -> u8 {
        match (self, kind) {
            (Self::AppendOrder, _) => 0,
            (Self::EarnedFirst, TransactionKind::Earned) => 0,
            (Self::EarnedFirst, TransactionKind::Used) => 1,
            (Self::UsedFirst, TransactionKind::Used) => 0,
            (Self::UsedFirst, TransactionKind::Earned) => 1,
        }
    }
}

/// Configuration for ledger replay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Tie-break rule for transactions dated on the same day.
    pub same_day_order: SameDayOrder,
}

impl LedgerConfig {
    /// Same-day earnings are available to same-day spends.
    pub fn earned_first() -> Self {
        Self {
            same_day_order: SameDayOrder::EarnedFirst,
        }
    }

    /// Same-day spends only see points earned on earlier days.
    pub fn used_first() -> Self {
        Self {
            same_day_order: SameDayOrder::UsedFirst,
        }
    }
}
