#![doc(test(attr(deny(warnings))))]

//! Shop Core models a small sweet shop: a fixed catalog sold in preset
//! quantities, per-product revenue, expenses read from the console and
//! income reports grouped by currency.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod shop;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shop Core tracing initialized.");
    });
}
