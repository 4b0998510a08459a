//! The module contains the `Aggregator`, the shared core of both reports.
use chrono::{Days, NaiveDate};

use crate::{Clock, Record, clock::SystemClock};

/// Days before today still counted by [`Aggregator::week_total`].
///
/// The window is inclusive at both ends, so it spans eight calendar days.
pub const WEEK_WINDOW_DAYS: u64 = 7;

/// Holds a daily limit and the records added so far.
///
/// Records are kept in insertion order and never removed. Totals are computed
/// on demand against the clock's current date, so they follow day rollover.
#[derive(Clone, Debug)]
pub struct Aggregator<C = SystemClock> {
    limit: f64,
    records: Vec<Record>,
    clock: C,
}

impl Aggregator {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> Aggregator<C> {
    pub fn with_clock(limit: f64, clock: C) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "adding record"
        );
        self.records.push(record);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current date as seen by this aggregator's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Sums the amounts of records dated within `[from, to]`.
    ///
    /// An inverted range matches nothing and sums to 0.
    pub fn total_between(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.records
            .iter()
            .filter(|record| (from..=to).contains(&record.date()))
            .map(Record::amount)
            .sum()
    }

    /// Sums the amounts of records dated today.
    pub fn today_total(&self) -> f64 {
        let today = self.today();
        let total = self.total_between(today, today);
        tracing::trace!(%today, total, "today total");
        total
    }

    /// Sums the amounts of records dated from seven days ago through today.
    pub fn week_total(&self) -> f64 {
        let today = self.today();
        let start = today
            .checked_sub_days(Days::new(WEEK_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        let total = self.total_between(start, today);
        tracing::trace!(%start, %today, total, "week total");
        total
    }
}
