//! Strict day.month.year date parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Format string behind [`parse_day_month_year`].
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Raised when a date string does not match the `DD.MM.YYYY` contract.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("date `{input}` does not match DD.MM.YYYY")]
pub struct DateFormatError {
    pub input: String,
}

impl DateFormatError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Parses a `DD.MM.YYYY` date string.
///
/// The contract is strict: day and month zero-padded, period separators,
/// four-digit year. `"08.11.2019"` parses to 2019-11-08, while
/// `"8.11.2019"`, `"08-11-2019"`, and ISO dates are all rejected.
pub fn parse_day_month_year(input: &str) -> Result<NaiveDate, DateFormatError> {
    let bytes = input.as_bytes();
    // Length and separator checks keep chrono from accepting unpadded days.
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return Err(DateFormatError::new(input));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateFormatError::new(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_date() {
        let date = parse_day_month_year("08.11.2019").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
    }

    #[test]
    fn rejects_iso_date() {
        assert!(parse_day_month_year("2019-11-08").is_err());
    }

    #[test]
    fn rejects_unpadded_day() {
        assert!(parse_day_month_year("8.11.2019").is_err());
    }

    #[test]
    fn rejects_wrong_separator() {
        assert!(parse_day_month_year("08-11-2019").is_err());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(parse_day_month_year("32.01.2019").is_err());
        assert!(parse_day_month_year("01.13.2019").is_err());
        assert!(parse_day_month_year("29.02.2019").is_err());
    }

    #[test]
    fn error_carries_offending_input() {
        let err = parse_day_month_year("today").expect_err("malformed date");
        assert_eq!(err.input, "today");
    }
}
