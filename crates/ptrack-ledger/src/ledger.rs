use chrono::NaiveDate;
use tracing::{debug, warn};

use ptrack_types::{Lot, Points, Transaction};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::projection::{ExpiryBucket, LedgerSummary, ProjectionBuilder};
use crate::replay::ReplayEngine;

/// Append-only points ledger with FIFO lots and twelve-month expiry.
///
/// The transaction log is the only source of truth. Lots are rebuilt from the
/// full log on every write and are never patched in place. Writes take
/// `&mut self`, so a ledger has a single writer; queries take `&self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    today: NaiveDate,
    config: LedgerConfig,
    transactions: Vec<Transaction>,
    lots: Vec<Lot>,
}

impl Ledger {
    /// An empty ledger with the default configuration. `today` is the
    /// end-of-history cutoff for expiry.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_config(today, LedgerConfig::default())
    }

    pub fn with_config(today: NaiveDate, config: LedgerConfig) -> Self {
        Self {
            today,
            config,
            transactions: Vec::new(),
            lots: Vec::new(),
        }
    }

    /// An empty ledger whose cutoff is the local calendar date.
    pub fn today_local(config: LedgerConfig) -> Self {
        Self::with_config(chrono::Local::now().date_naive(), config)
    }

    /// Append one transaction and replay.
    ///
    /// If the replay fails (a spend exceeds what is available at its date, the
    /// earned total overflows, or the lot's expiry is not representable) the
    /// transaction is not recorded and the ledger is unchanged.
    pub fn add(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        self.extend([transaction])
    }

    /// Append a batch of transactions with a single replay. All or nothing.
    pub fn extend<I>(&mut self, transactions: I) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut staged = self.transactions.clone();
        let committed = staged.len();
        staged.extend(transactions);

        let lots = ReplayEngine::replay(&staged, self.today, self.config.same_day_order)
            .inspect_err(|e| {
                warn!(error = %e, rejected = staged.len() - committed, "transactions rejected");
            })?;

        self.transactions = staged;
        self.lots = lots;
        debug!(
            appended = self.transactions.len() - committed,
            log_len = self.transactions.len(),
            lots = self.lots.len(),
            balance = self.balance(),
            "ledger replayed"
        );
        Ok(())
    }

    /// Move the expiry cutoff and replay.
    pub fn set_today(&mut self, today: NaiveDate) -> Result<(), LedgerError> {
        let lots = ReplayEngine::replay(&self.transactions, today, self.config.same_day_order)?;
        self.today = today;
        self.lots = lots;
        debug!(%today, balance = self.balance(), "ledger cutoff moved");
        Ok(())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Transactions in the order they were appended.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Lots from the last replay, in the order they were created.
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// Points still spendable as of `today`.
    pub fn balance(&self) -> Points {
        ProjectionBuilder::balance(&self.lots)
    }

    pub fn summary(&self) -> LedgerSummary {
        ProjectionBuilder::summary(&self.lots)
    }

    /// Points expiring in each of `months` calendar months, starting with the
    /// month that contains `start`.
    pub fn expiring_soon(
        &self,
        start: NaiveDate,
        months: usize,
    ) -> Result<Vec<ExpiryBucket>, LedgerError> {
        ProjectionBuilder::expiry_forecast(&self.lots, start, months)
    }

    /// [`Ledger::expiring_soon`] starting from the month containing `today`.
    pub fn expiring_from_today(&self, months: usize) -> Result<Vec<ExpiryBucket>, LedgerError> {
        self.expiring_soon(self.today, months)
    }
}
