use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Unknown date bucket: {0}")]
    UnknownBucket(String),
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid amount range: {min} to {max}")]
    InvalidAmountRange { min: f64, max: f64 },
}
