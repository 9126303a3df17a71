//! daytally-core
//!
//! Business logic for DayTally: record aggregation plus the calorie and
//! cash reporting trackers. Depends on daytally-domain. No CLI, no terminal
//! I/O, no storage.

pub mod calorie_tracker;
pub mod cash_tracker;
pub mod error;
pub mod record_book;
pub mod time;

pub use calorie_tracker::*;
pub use cash_tracker::*;
pub use error::CoreError;
pub use record_book::*;
pub use time::*;
