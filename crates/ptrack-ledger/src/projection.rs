use chrono::NaiveDate;
use serde::Serialize;

use ptrack_types::{add_months, first_of_month, Lot, Points};

use crate::error::LedgerError;

/// Number of months covered by a forecast when the caller does not say.
pub const DEFAULT_FORECAST_MONTHS: usize = 3;

/// Points expiring within one calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExpiryBucket {
    /// First day of the month; the bucket covers `[month_start, next month_start)`.
    pub month_start: NaiveDate,
    pub points: Points,
}

/// Totals across every lot produced by the last replay.
///
/// `earned == consumed + expired + balance` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub lots: usize,
    pub earned: Points,
    pub consumed: Points,
    pub expired: Points,
    pub balance: Points,
}

/// Read-only views computed from replayed lots.
///
/// Replay rejects logs whose earned total overflows [`Points`], so sums over
/// replayed lots are exact. Sums over arbitrary lots saturate.
pub struct ProjectionBuilder;

impl ProjectionBuilder {
    pub fn balance(lots: &[Lot]) -> Points {
        total(lots.iter().map(Lot::remaining))
    }

    pub fn summary(lots: &[Lot]) -> LedgerSummary {
        LedgerSummary {
            lots: lots.len(),
            earned: total(lots.iter().map(Lot::original)),
            consumed: total(lots.iter().map(Lot::consumed)),
            expired: total(lots.iter().map(Lot::expired)),
            balance: Self::balance(lots),
        }
    }

    /// Remaining points grouped by the calendar month in which they expire,
    /// for `months` consecutive months starting with the month containing
    /// `start`. Always returns exactly `months` buckets.
    pub fn expiry_forecast(
        lots: &[Lot],
        start: NaiveDate,
        months: usize,
    ) -> Result<Vec<ExpiryBucket>, LedgerError> {
        let first = first_of_month(start);
        let mut buckets = Vec::with_capacity(months);

        for i in 0..months {
            let offset = i32::try_from(i).map_err(|_| LedgerError::DateOutOfRange(first))?;
            let month_start =
                add_months(first, offset).ok_or(LedgerError::DateOutOfRange(first))?;
            let month_end =
                add_months(month_start, 1).ok_or(LedgerError::DateOutOfRange(month_start))?;

            let points = total(
                lots.iter()
                    .filter(|lot| month_start <= lot.expiry() && lot.expiry() < month_end)
                    .map(Lot::remaining),
            );
            buckets.push(ExpiryBucket {
                month_start,
                points,
            });
        }

        Ok(buckets)
    }
}

fn total(points: impl Iterator<Item = Points>) -> Points {
    points.fold(0, Points::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn summary_of_no_lots_is_zero() {
        assert_eq!(ProjectionBuilder::summary(&[]), LedgerSummary::default());
        assert_eq!(ProjectionBuilder::balance(&[]), 0);
    }

    #[test]
    fn summary_conserves_points() {
        let mut a = Lot::new(d(2023, 1, 1), 100).unwrap();
        let mut b = Lot::new(d(2023, 2, 1), 40).unwrap();
        a.consume(30);
        a.expire_remaining();
        b.consume(5);

        let summary = ProjectionBuilder::summary(&[a, b]);
        assert_eq!(summary.lots, 2);
        assert_eq!(summary.earned, 140);
        assert_eq!(summary.consumed, 35);
        assert_eq!(summary.expired, 70);
        assert_eq!(summary.balance, 35);
        assert_eq!(
            summary.earned,
            summary.consumed + summary.expired + summary.balance
        );
    }

    #[test]
    fn sums_over_unbounded_lots_saturate() {
        let lots = [
            Lot::new(d(2023, 1, 1), Points::MAX).unwrap(),
            Lot::new(d(2023, 1, 2), 1).unwrap(),
        ];
        assert_eq!(ProjectionBuilder::balance(&lots), Points::MAX);
        assert_eq!(ProjectionBuilder::summary(&lots).earned, Points::MAX);
        let buckets = ProjectionBuilder::expiry_forecast(&lots, d(2024, 1, 1), 1).unwrap();
        assert_eq!(buckets[0].points, Points::MAX);
    }

    #[test]
    fn forecast_past_last_representable_month_fails() {
        assert_eq!(
            ProjectionBuilder::expiry_forecast(&[], NaiveDate::MAX, 1),
            Err(LedgerError::DateOutOfRange(first_of_month(NaiveDate::MAX)))
        );
    }

    #[test]
    fn forecast_starts_at_first_of_month() {
        let buckets = ProjectionBuilder::expiry_forecast(&[], d(2024, 1, 20), 2).unwrap();
        assert_eq!(buckets[0].month_start, d(2024, 1, 1));
        assert_eq!(buckets[1].month_start, d(2024, 2, 1));
    }

    #[test]
    fn forecast_of_zero_months_is_empty() {
        let lot = Lot::new(d(2023, 2, 10), 100).unwrap();
        assert!(ProjectionBuilder::expiry_forecast(&[lot], d(2024, 1, 1), 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn forecast_windows_are_half_open() {
        // Expires 2024-03-01: belongs to March, not February.
        let lot = Lot::new(d(2023, 3, 1), 25).unwrap();
        let buckets = ProjectionBuilder::expiry_forecast(&[lot], d(2024, 2, 15), 2).unwrap();
        assert_eq!(buckets[0].points, 0);
        assert_eq!(buckets[1].points, 25);
    }

    #[test]
    fn forecast_sums_lots_in_the_same_month() {
        let lots = [
            Lot::new(d(2023, 4, 1), 10).unwrap(),
            Lot::new(d(2023, 4, 30), 15).unwrap(),
            Lot::new(d(2023, 5, 1), 7).unwrap(),
        ];
        let buckets = ProjectionBuilder::expiry_forecast(&lots, d(2024, 4, 1), 2).unwrap();
        assert_eq!(buckets[0].points, 25);
        assert_eq!(buckets[1].points, 7);
    }

    #[test]
    fn forecast_crosses_year_boundary() {
        let lot = Lot::new(d(2023, 1, 31), 9).unwrap();
        let buckets = ProjectionBuilder::expiry_forecast(&[lot], d(2023, 11, 30), 3).unwrap();
        let starts: Vec<NaiveDate> = buckets.iter().map(|b| b.month_start).collect();
        assert_eq!(starts, vec![d(2023, 11, 1), d(2023, 12, 1), d(2024, 1, 1)]);
        assert_eq!(buckets[2].points, 9);
    }
}
