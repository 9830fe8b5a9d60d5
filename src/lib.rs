#![doc(test(attr(deny(warnings))))]

//! Tally turns raw income and expense records into the filtered, sorted and
//! aggregated views a personal finance dashboard renders.
//!
//! The engines live in [`engine`]; this crate composes them with a clock and
//! the stored preferences.

pub mod errors;
pub mod services;
pub mod utils;

pub use tally_config as config;
pub use tally_core as engine;
pub use tally_domain as domain;

pub use errors::{TallyError, TallyResult};
pub use services::{AnalyticsService, DashboardService};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally tracing initialized.");
    });
}
