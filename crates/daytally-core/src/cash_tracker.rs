//! Daily cash reporting with fixed-rate currency conversion.

use chrono::NaiveDate;
use daytally_domain::{Currency, Record};

use crate::error::CoreError;
use crate::record_book::RecordBook;
use crate::time::Clock;

/// Units of rubles per one foreign unit. The defaults are the historical
/// constants; callers may supply fresher rates at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    pub usd: f64,
    pub eur: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd: 69.45,
            eur: 77.76,
        }
    }
}

/// Reports how much money remains within the daily limit, in rubles or
/// converted with the configured rates.
#[derive(Debug, Clone)]
pub struct CashTracker {
    book: RecordBook,
    rates: ExchangeRates,
}

impl CashTracker {
    pub fn new(limit: f64, reference: NaiveDate) -> Self {
        Self::with_rates(limit, reference, ExchangeRates::default())
    }

    pub fn with_rates(limit: f64, reference: NaiveDate, rates: ExchangeRates) -> Self {
        Self {
            book: RecordBook::new(limit, reference),
            rates,
        }
    }

    pub fn with_clock(limit: f64, clock: &dyn Clock) -> Self {
        Self {
            book: RecordBook::with_clock(limit, clock),
            rates: ExchangeRates::default(),
        }
    }

    pub fn book(&self) -> &RecordBook {
        &self.book
    }

    pub fn rates(&self) -> ExchangeRates {
        self.rates
    }

    pub fn add_record(&mut self, record: Record) {
        self.book.add_record(record);
    }

    /// Returns the daily budget message for the requested currency code.
    ///
    /// `currency` must be exactly `rub`, `usd`, or `eur`; any other code
    /// fails with [`CoreError::UnknownCurrency`] rather than defaulting.
    pub fn cash_remained(&self, currency: &str) -> Result<String, CoreError> {
        let currency = Currency::from_code(currency)
            .ok_or_else(|| CoreError::UnknownCurrency(currency.to_string()))?;
        let spent = self.book.today_total();
        let limit = self.book.limit();
        let remainder = (limit - spent).abs();
        let remainder = match currency {
            Currency::Rub => remainder,
            Currency::Usd => remainder / self.rates.usd,
            Currency::Eur => remainder / self.rates.eur,
        };
        let label = currency.label();
        let message = if spent < limit {
            format!("You have {remainder:.2} {label} left for today")
        } else if spent > limit {
            format!("No money left, hang in there: you owe {remainder:.2} {label}")
        } else {
            "No money left, hang in there".to_string()
        };
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 11, 10).unwrap()
    }

    fn tracker_with_spending(limit: f64, spent: f64) -> CashTracker {
        let mut tracker = CashTracker::new(limit, reference());
        tracker.add_record(Record::new(spent, "spending", reference()));
        tracker
    }

    #[test]
    fn reports_remaining_rubles_with_two_decimals() {
        let mut tracker = CashTracker::new(1000.0, reference());
        tracker.add_record(Record::new(145.0, "coffee", reference()));
        tracker.add_record(Record::new(300.0, "lunch", reference()));
        tracker.add_record(
            Record::from_date_str(3000.0, "party", "08.11.2019").expect("valid date"),
        );
        assert_eq!(tracker.book().today_total(), 445.0);
        let message = tracker.cash_remained("rub").expect("known currency");
        assert!(message.contains("555.00 руб"), "unexpected message: {message}");
    }

    #[test]
    fn conversion_is_linear_in_the_configured_rate() {
        let tracker = tracker_with_spending(1000.0, 445.0);
        let rates = tracker.rates();
        let usd = tracker.cash_remained("usd").expect("known currency");
        let expected = 555.0 / rates.usd;
        assert!(
            usd.contains(&format!("{expected:.2} USD")),
            "unexpected message: {usd}"
        );
        let eur = tracker.cash_remained("eur").expect("known currency");
        assert!(
            eur.contains(&format!("{:.2} Euro", 555.0 / rates.eur)),
            "unexpected message: {eur}"
        );
    }

    #[test]
    fn custom_rates_apply_at_construction() {
        let mut tracker = CashTracker::with_rates(
            1000.0,
            reference(),
            ExchangeRates {
                usd: 100.0,
                eur: 200.0,
            },
        );
        tracker.add_record(Record::new(500.0, "spending", reference()));
        let message = tracker.cash_remained("usd").expect("known currency");
        assert!(message.contains("5.00 USD"), "unexpected message: {message}");
    }

    #[test]
    fn reports_debt_when_over_the_limit() {
        let tracker = tracker_with_spending(1000.0, 1250.0);
        let message = tracker.cash_remained("rub").expect("known currency");
        assert!(message.contains("owe"), "unexpected message: {message}");
        assert!(message.contains("250.00 руб"), "unexpected message: {message}");
    }

    #[test]
    fn reports_a_fixed_message_at_exactly_the_limit() {
        let tracker = tracker_with_spending(1000.0, 1000.0);
        let message = tracker.cash_remained("rub").expect("known currency");
        assert_eq!(message, "No money left, hang in there");
    }

    #[test]
    fn unknown_currency_is_a_lookup_error() {
        let tracker = tracker_with_spending(1000.0, 100.0);
        let err = tracker.cash_remained("gbp").expect_err("unsupported code");
        match err {
            CoreError::UnknownCurrency(code) => assert_eq!(code, "gbp"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn currency_codes_are_case_sensitive() {
        let tracker = tracker_with_spending(1000.0, 100.0);
        assert!(tracker.cash_remained("RUB").is_err());
    }
}
