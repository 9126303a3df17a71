//! Daily calorie reporting over a record book.

use chrono::NaiveDate;
use daytally_domain::Record;

use crate::record_book::RecordBook;
use crate::time::Clock;

/// Reports how many kilocalories remain within the daily limit.
#[derive(Debug, Clone)]
pub struct CalorieTracker {
    book: RecordBook,
}

impl CalorieTracker {
    pub fn new(limit: f64, reference: NaiveDate) -> Self {
        Self {
            book: RecordBook::new(limit, reference),
        }
    }

    pub fn with_clock(limit: f64, clock: &dyn Clock) -> Self {
        Self {
            book: RecordBook::with_clock(limit, clock),
        }
    }

    pub fn book(&self) -> &RecordBook {
        &self.book
    }

    pub fn add_record(&mut self, record: Record) {
        self.book.add_record(record);
    }

    /// Returns the daily status message: an invitation to eat up to the
    /// remaining kilocalories, or a hard stop once the limit is reached.
    ///
    /// The remainder keeps its natural numeric formatting; only the cash
    /// messages pin decimals.
    pub fn calories_remained(&self) -> String {
        let eaten = self.book.today_total();
        let remainder = self.book.limit() - eaten;
        if eaten < self.book.limit() {
            format!("You can eat something else today, but no more than {remainder} kcal")
        } else {
            "Stop eating!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn invites_to_eat_while_under_the_limit() {
        let mut tracker = CalorieTracker::new(2000.0, reference());
        tracker.add_record(Record::new(445.0, "breakfast", reference()));
        let message = tracker.calories_remained();
        assert!(message.contains("1555"), "unexpected message: {message}");
        assert!(message.contains("kcal"));
    }

    #[test]
    fn stops_once_the_limit_is_reached_exactly() {
        let mut tracker = CalorieTracker::new(2000.0, reference());
        tracker.add_record(Record::new(2000.0, "feast", reference()));
        assert_eq!(tracker.calories_remained(), "Stop eating!");
    }

    #[test]
    fn stops_once_the_limit_is_exceeded() {
        let mut tracker = CalorieTracker::new(2000.0, reference());
        tracker.add_record(Record::new(2500.0, "feast", reference()));
        assert_eq!(tracker.calories_remained(), "Stop eating!");
    }

    #[test]
    fn ignores_records_outside_the_reference_date() {
        let mut tracker = CalorieTracker::new(2000.0, reference());
        tracker.add_record(Record::new(
            2500.0,
            "yesterday",
            reference().pred_opt().unwrap(),
        ));
        let message = tracker.calories_remained();
        assert!(message.contains("2000"), "unexpected message: {message}");
    }
}
