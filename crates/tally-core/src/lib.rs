//! tally-core
//!
//! Filtering, sorting and aggregation engines over income and expense records.
//! Depends on tally-domain. Every operation borrows its input and returns fresh
//! values; nothing here stores state, touches disk or reads the wall clock
//! except through [`Clock`].

pub mod aggregation_service;
pub mod bucket;
pub mod error;
pub mod filter_service;
pub mod query;
pub mod sort;
pub mod time;


pub use aggregation_service::*;
pub use bucket::DateBucket;
pub use error::EngineError;
pub use filter_service::*;
pub use query::*;
pub use sort::*;
pub use time::*;
