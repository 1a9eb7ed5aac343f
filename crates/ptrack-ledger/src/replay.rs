use chrono::NaiveDate;
use tracing::trace;

use ptrack_types::{Lot, Points, Transaction, TransactionKind};

use crate::config::SameDayOrder;
use crate::error::LedgerError;

/// Deterministic lot reconstruction from a transaction log.
///
/// Lots are a pure function of `(log, today, same-day order)`: every replay
/// starts from no lots and walks the whole log in date order.
pub struct ReplayEngine;

impl ReplayEngine {
    /// Rebuild all lots from `transactions`.
    ///
    /// Before each transaction is applied, lots that have reached their expiry
    /// by that transaction's date are swept, so a spend dated exactly on a
    /// lot's expiry date cannot draw from it. A final sweep at `today` catches
    /// lots that lapsed after the last transaction.
    ///
    /// The sum of all earned points must fit in [`Points`]; every balance,
    /// total, and forecast bucket is bounded by it.
    pub fn replay(
        transactions: &[Transaction],
        today: NaiveDate,
        order: SameDayOrder,
    ) -> Result<Vec<Lot>, LedgerError> {
        let mut lots = Vec::new();
        let mut earned_total: Points = 0;

        for txn in Self::chronological(transactions, order) {
            Self::expire(&mut lots, txn.date());
            match txn.kind() {
                TransactionKind::Earned => {
                    earned_total = earned_total
                        .checked_add(txn.points())
                        .ok_or(LedgerError::PointsOverflow { date: txn.date() })?;
                    lots.push(Lot::new(txn.date(), txn.points())?);
                }
                TransactionKind::Used => Self::consume(&mut lots, txn.points(), txn.date())?,
            }
        }

        Self::expire(&mut lots, today);
        Ok(lots)
    }

    /// Transactions sorted by date, ties broken by `order` and then by append
    /// position.
    pub fn chronological(transactions: &[Transaction], order: SameDayOrder) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| {
            a.date()
                .cmp(&b.date())
                .then_with(|| order.rank(a.kind()).cmp(&order.rank(b.kind())))
        });
        sorted
    }

    /// Spend `points` from `lots`, oldest earned date first.
    ///
    /// Lots sharing an earned date are drained in the order they appear in
    /// `lots`. On failure the lots are left partially drained; callers replay
    /// into scratch state and discard it.
    pub fn consume(lots: &mut [Lot], points: Points, date: NaiveDate) -> Result<(), LedgerError> {
        let mut order: Vec<usize> = (0..lots.len()).collect();
        order.sort_by_key(|&i| lots[i].earned_date());

        let mut needed = points;
        for i in order {
            if needed == 0 {
                break;
            }
            needed -= lots[i].consume(needed);
        }

        if needed > 0 {
            return Err(LedgerError::InsufficientBalance {
                date,
                requested: points,
                available: points - needed,
            });
        }
        Ok(())
    }

    /// Write off the remainder of every lot whose expiry is on or before
    /// `cutoff`. Returns the total newly expired.
    pub fn expire(lots: &mut [Lot], cutoff: NaiveDate) -> Points {
        let mut swept_total = 0;
        for lot in lots.iter_mut().filter(|lot| lot.is_expired_at(cutoff)) {
            let swept = lot.expire_remaining();
            if swept > 0 {
                trace!(earned = %lot.earned_date(), expiry = %lot.expiry(), swept, "lot expired");
                swept_total += swept;
            }
        }
        swept_total
    }
}
