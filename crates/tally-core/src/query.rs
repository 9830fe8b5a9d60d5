//! Validated ranges and a bundled query over one record collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_domain::FinancialRecord;

use crate::bucket::DateBucket;
use crate::error::EngineError;
use crate::filter_service::FilterService;
use crate::sort::SortKey;
use crate::time::WeekConvention;

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Inclusive amount range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub fn new(min: f64, max: f64) -> Result<Self, EngineError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(EngineError::InvalidAmountRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Stages applied in the order bucket, date range, amount range, search, sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    pub bucket: DateBucket,
    pub date_range: Option<DateRange>,
    pub amount_range: Option<AmountRange>,
    pub search: Option<String>,
    pub sort: SortKey,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from selector names, rejecting unknown ones.
    pub fn parse(bucket: &str, sort: &str) -> Result<Self, EngineError> {
        Ok(Self {
            bucket: bucket.parse()?,
            sort: sort.parse()?,
            ..Self::default()
        })
    }

    pub fn with_bucket(mut self, bucket: DateBucket) -> Self {
        self.bucket = bucket;
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_amount_range(mut self, range: AmountRange) -> Self {
        self.amount_range = Some(range);
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn apply<R>(&self, records: &[R], now: NaiveDate, week: WeekConvention) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        let mut current = FilterService::by_bucket(records, self.bucket, now, week);
        if let Some(range) = self.date_range {
            current = FilterService::by_date_range(&current, range.start, range.end);
        }
        if let Some(range) = self.amount_range {
            current = FilterService::by_amount_range(&current, range.min, range.max);
        }
        if let Some(text) = self.search.as_deref() {
            current = FilterService::search(&current, text);
        }
        FilterService::sort(&current, self.sort)
    }
}
