use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{add_months, LOT_LIFETIME_MONTHS};
use crate::error::TypeError;
use crate::Points;

/// One earned batch of points and how much of it has been spent or written off.
///
/// Lots are derived state: they are rebuilt from the transaction log on every
/// replay and carry no identity between replays.
///
/// Invariant: `consumed + expired <= original`. The only mutation paths are
/// [`Lot::consume`], which is bounded by [`Lot::remaining`], and
/// [`Lot::expire_remaining`], which sweeps whatever is left exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Lot {
    earned_date: NaiveDate,
    expiry: NaiveDate,
    original: Points,
    consumed: Points,
    expired: Points,
}

impl Lot {
    /// Open a fresh lot. Fails only if the expiry date is not representable.
    pub fn new(earned_date: NaiveDate, original: Points) -> Result<Self, TypeError> {
        let expiry = add_months(earned_date, LOT_LIFETIME_MONTHS)
            .ok_or(TypeError::DateOutOfRange(earned_date))?;
        Ok(Self {
            earned_date,
            expiry,
            original,
            consumed: 0,
            expired: 0,
        })
    }

    pub fn earned_date(&self) -> NaiveDate {
        self.earned_date
    }

    /// Date on which the lot expires: twelve calendar months after it was earned.
    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    pub fn original(&self) -> Points {
        self.original
    }

    pub fn consumed(&self) -> Points {
        self.consumed
    }

    pub fn expired(&self) -> Points {
        self.expired
    }

    pub fn remaining(&self) -> Points {
        self.original - self.consumed - self.expired
    }

    /// Returns `true` if the lot has reached its expiry date by `cutoff`.
    pub fn is_expired_at(&self, cutoff: NaiveDate) -> bool {
        self.expiry <= cutoff
    }

    /// Spend up to `wanted` points from this lot. Returns the amount taken.
    pub fn consume(&mut self, wanted: Points) -> Points {
        let take = wanted.min(self.remaining());
        self.consumed += take;
        take
    }

    /// Write off everything still remaining. Returns the amount newly expired;
    /// zero once the lot is empty.
    pub fn expire_remaining(&mut self) -> Points {
        let swept = self.remaining();
        self.expired += swept;
        swept
    }
}
