//! FIFO lot ledger for Point Tracker.
//!
//! This crate is the heart of Point Tracker. It provides:
//! - [`Ledger`], an append-only transaction log whose lots are rebuilt from
//!   scratch on every write
//! - Deterministic chronological replay with FIFO consumption and
//!   twelve-month expiry
//! - Balance, totals, and per-month expiry forecasts over the replayed lots
//!
//! Writes are staged: a transaction is replayed against a trial copy of the
//! log and committed only if the replay succeeds, so a rejected spend leaves
//! the ledger untouched.

pub mod config;
pub mod error;
pub mod ledger;
pub mod projection;
pub mod replay;

pub use config::{LedgerConfig, SameDayOrder};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use projection::{ExpiryBucket, LedgerSummary, ProjectionBuilder, DEFAULT_FORECAST_MONTHS};
pub use replay::ReplayEngine;
