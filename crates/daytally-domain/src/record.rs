//! Domain model for dated amount entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date::{parse_day_month_year, DateFormatError};

/// One dated amount entry: money spent or calories consumed, plus a
/// free-text comment. The unit of `amount` is implied by the tracker that
/// owns the record. Fields are never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub amount: f64,
    pub comment: String,
    pub date: NaiveDate,
}

impl Record {
    pub fn new(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Builds a record from a `DD.MM.YYYY` date string.
    ///
    /// Parse failures surface as [`DateFormatError`]; nothing is recovered
    /// here.
    pub fn from_date_str(
        amount: f64,
        comment: impl Into<String>,
        date: &str,
    ) -> Result<Self, DateFormatError> {
        Ok(Self::new(amount, comment, parse_day_month_year(date)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_fields_verbatim() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 8).unwrap();
        let record = Record::new(145.0, "coffee", date);
        assert_eq!(record.amount, 145.0);
        assert_eq!(record.comment, "coffee");
        assert_eq!(record.date, date);
    }

    #[test]
    fn from_date_str_parses_the_contract_format() {
        let record = Record::from_date_str(3000.0, "party", "08.11.2019").expect("valid date");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
    }

    #[test]
    fn from_date_str_propagates_format_errors() {
        let err = Record::from_date_str(3000.0, "party", "2019-11-08").expect_err("iso date");
        assert_eq!(err.input, "2019-11-08");
    }

    #[test]
    fn records_serialize_round_trip() {
        let record = Record::new(300.0, "lunch", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let json = serde_json::to_string(&record).expect("serialize");
        let back: Record = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.id, record.id);
        assert_eq!(back.amount, record.amount);
        assert_eq!(back.date, record.date);
    }
}
