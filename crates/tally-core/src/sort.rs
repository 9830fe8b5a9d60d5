//! Sort keys for record listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tally_domain::FinancialRecord;
use tracing::warn;

use crate::bucket::normalize_selector;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    AmountHighToLow,
    AmountLowToHigh,
    DateOldest,
    #[default]
    DateNewest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::AmountHighToLow,
        SortKey::AmountLowToHigh,
        SortKey::DateOldest,
        SortKey::DateNewest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::AmountHighToLow => "AMOUNT_HIGH_TO_LOW",
            SortKey::AmountLowToHigh => "AMOUNT_LOW_TO_HIGH",
            SortKey::DateOldest => "DATE_OLDEST",
            SortKey::DateNewest => "DATE_NEWEST",
        }
    }

    /// Orders two records by this key. Equal keys compare as `Equal`; callers
    /// rely on a stable sort to keep the incoming order for ties.
    pub fn compare<R: FinancialRecord>(self, a: &R, b: &R) -> Ordering {
        match self {
            SortKey::AmountHighToLow => compare_amounts(b.amount(), a.amount()),
            SortKey::AmountLowToHigh => compare_amounts(a.amount(), b.amount()),
            SortKey::DateOldest => a.date().cmp(&b.date()),
            SortKey::DateNewest => b.date().cmp(&a.date()),
        }
    }

    /// Parses `raw`, falling back to [`SortKey::DateNewest`] for unknown names.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: EngineError| {
            warn!(%err, "falling back to DATE_NEWEST");
            SortKey::DateNewest
        })
    }
}

fn compare_amounts(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_selector(s).as_str() {
            "AMOUNT_HIGH_TO_LOW" => Ok(SortKey::AmountHighToLow),
            "AMOUNT_LOW_TO_HIGH" => Ok(SortKey::AmountLowToHigh),
            "DATE_OLDEST" => Ok(SortKey::DateOldest),
            "DATE_NEWEST" => Ok(SortKey::DateNewest),
            _ => Err(EngineError::UnknownSortKey(s.trim().to_string())),
        }
    }
}

/// Returns a stably sorted copy of `records`.
pub fn sort_records<R>(records: &[R], key: SortKey) -> Vec<R>
where
    R: FinancialRecord + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
