//! Filter and sort stages over borrowed record collections.
//!
//! Every stage returns a new `Vec`, leaving its input untouched, so callers can
//! chain them in whatever order their screen needs.

use chrono::NaiveDate;
use tally_domain::{ExpenseRecord, FinancialRecord};
use tracing::debug;

use crate::bucket::DateBucket;
use crate::sort::{sort_records, SortKey};
use crate::time::WeekConvention;

pub struct FilterService;

impl FilterService {
    /// Keeps the records whose date falls inside `bucket` relative to `now`.
    pub fn by_bucket<R>(
        records: &[R],
        bucket: DateBucket,
        now: NaiveDate,
        week: WeekConvention,
    ) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        let filtered: Vec<R> = records
            .iter()
            .filter(|record| bucket.matches(record.date(), now, week))
            .cloned()
            .collect();
        debug!(%bucket, %now, input = records.len(), output = filtered.len(), "bucket filter");
        filtered
    }

    /// Bucket filter followed by a stable sort.
    pub fn filter_and_sort<R>(
        records: &[R],
        bucket: DateBucket,
        sort: SortKey,
        now: NaiveDate,
        week: WeekConvention,
    ) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        let mut filtered = Self::by_bucket(records, bucket, now, week);
        filtered.sort_by(|a, b| sort.compare(a, b));
        filtered
    }

    pub fn sort<R>(records: &[R], key: SortKey) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        debug!(%key, input = records.len(), "sort");
        sort_records(records, key)
    }

    /// Keeps records dated within `[start, end]`; an inverted range keeps nothing.
    pub fn by_date_range<R>(records: &[R], start: NaiveDate, end: NaiveDate) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        let filtered: Vec<R> = records
            .iter()
            .filter(|record| {
                let date = record.date();
                date >= start && date <= end
            })
            .cloned()
            .collect();
        debug!(%start, %end, input = records.len(), output = filtered.len(), "date range filter");
        filtered
    }

    /// Keeps records with `min <= amount <= max`.
    pub fn by_amount_range<R>(records: &[R], min: f64, max: f64) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        let filtered: Vec<R> = records
            .iter()
            .filter(|record| {
                let amount = record.amount();
                amount >= min && amount <= max
            })
            .cloned()
            .collect();
        debug!(min, max, input = records.len(), output = filtered.len(), "amount range filter");
        filtered
    }

    /// Case-insensitive substring search over category, label and description.
    ///
    /// A blank query returns the input unchanged.
    pub fn search<R>(records: &[R], query: &str) -> Vec<R>
    where
        R: FinancialRecord + Clone,
    {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return records.to_vec();
        }
        let filtered: Vec<R> = records
            .iter()
            .filter(|record| matches_text(*record, &needle))
            .cloned()
            .collect();
        debug!(query = %needle, input = records.len(), output = filtered.len(), "search");
        filtered
    }

    /// Keeps expenses paid with `method`, compared case-insensitively after trimming.
    pub fn by_payment_method(expenses: &[ExpenseRecord], method: &str) -> Vec<ExpenseRecord> {
        let wanted = method.trim().to_lowercase();
        expenses
            .iter()
            .filter(|expense| expense.payment_method.trim().to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn by_recurrence(expenses: &[ExpenseRecord], is_recurring: bool) -> Vec<ExpenseRecord> {
        expenses
            .iter()
            .filter(|expense| expense.is_recurring == is_recurring)
            .cloned()
            .collect()
    }
}

fn matches_text<R: FinancialRecord>(record: &R, needle: &str) -> bool {
    record.category().to_lowercase().contains(needle)
        || record.label().to_lowercase().contains(needle)
        || record
            .description()
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
}
