//! Append-only record storage with day and trailing-week totals.

use chrono::{Duration, NaiveDate};
use daytally_domain::Record;

use crate::time::Clock;

/// Days before the reference date covered by [`RecordBook::week_total`].
const WEEK_SPAN_DAYS: i64 = 7;

/// Owns an append-only collection of records plus a daily limit, and sums
/// amounts for the reference day and its trailing week.
///
/// "Today" is the `reference` date fixed at construction. A book built from
/// a live clock keeps reporting against the date captured when it was
/// created, even across midnight; build a new book to move the window.
#[derive(Debug, Clone)]
pub struct RecordBook {
    records: Vec<Record>,
    limit: f64,
    reference: NaiveDate,
}

impl RecordBook {
    /// Creates an empty book with the given daily limit, treating
    /// `reference` as "today".
    pub fn new(limit: f64, reference: NaiveDate) -> Self {
        Self {
            records: Vec::new(),
            limit,
            reference,
        }
    }

    /// Creates an empty book whose reference date is captured from `clock`
    /// once, at this call.
    pub fn with_clock(limit: f64, clock: &dyn Clock) -> Self {
        Self::new(limit, clock.today())
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Appends a record. Duplicates are kept and all counted.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Sums amounts recorded on the reference date. Recomputed from the
    /// collection on every call so live additions are reflected.
    pub fn today_total(&self) -> f64 {
        self.records
            .iter()
            .filter(|record| record.date == self.reference)
            .map(|record| record.amount)
            .sum()
    }

    /// Sums amounts recorded in the window ending on the reference date and
    /// starting seven days before it, both ends inclusive.
    pub fn week_total(&self) -> f64 {
        let window_start = self.reference - Duration::days(WEEK_SPAN_DAYS);
        self.records
            .iter()
            .filter(|record| record.date >= window_start && record.date <= self.reference)
            .map(|record| record.amount)
            .sum()
    }
}
