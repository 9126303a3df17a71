//! daytally-domain
//!
//! Pure domain models (Record, Currency, date parsing).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod currency;
pub mod date;
pub mod record;

pub use currency::*;
pub use date::*;
pub use record::*;
