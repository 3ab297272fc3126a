#![doc(test(attr(deny(warnings))))]

//! Budget Engine offers the period-boundary, balance-aggregation, and
//! budget-period rollover primitives behind an envelope-style budgeting app.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod period;
pub mod policy;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Engine tracing initialized.");
    });
}
