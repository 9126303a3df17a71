#![doc(test(attr(deny(warnings))))]

//! DayTally offers daily spending and calorie tracking primitives plus the
//! interactive shell that fronts them.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("DayTally tracing initialized.");
    });
}
