//! tally-config
//!
//! Stored preferences for the Tally engines: the locale that decides week
//! numbering, the default bucket and sort selectors, and dashboard sizes.

mod error;
mod manager;
mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, MAX_TREND_MONTHS};
