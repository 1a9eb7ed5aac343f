//! Foundation types for Point Tracker.
//!
//! Every other Point Tracker crate depends on `ptrack-types`.
//!
//! # Key Types
//!
//! - [`Transaction`] — Immutable earn or spend event
//! - [`TransactionKind`] — `Earned` or `Used`
//! - [`Lot`] — One earned batch and how much of it was spent or expired
//! - [`calendar`] — Calendar-correct month arithmetic used for expiry and forecasting

pub mod calendar;
pub mod error;
pub mod lot;
pub mod transaction;

pub use calendar::{add_months, days_in_month, first_of_month, LOT_LIFETIME_MONTHS};
pub use error::TypeError;
pub use lot::Lot;
pub use transaction::{Transaction, TransactionKind};

/// Whole loyalty points. Negative counts are unrepresentable.
pub type Points = u64;
