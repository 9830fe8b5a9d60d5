//! Temporal buckets and the date membership predicate.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;
use crate::time::{monday_of, shift_year_month, WeekConvention};

/// Named temporal window a record date is tested against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateBucket {
    #[default]
    AllTime,
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    LastWeek,
    LastMonth,
    LastYear,
}

impl DateBucket {
    pub const ALL: [DateBucket; 8] = [
        DateBucket::AllTime,
        DateBucket::Today,
        DateBucket::ThisWeek,
        DateBucket::ThisMonth,
        DateBucket::ThisYear,
        DateBucket::LastWeek,
        DateBucket::LastMonth,
        DateBucket::LastYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DateBucket::AllTime => "ALL_TIME",
            DateBucket::Today => "TODAY",
            DateBucket::ThisWeek => "THIS_WEEK",
            DateBucket::ThisMonth => "THIS_MONTH",
            DateBucket::ThisYear => "THIS_YEAR",
            DateBucket::LastWeek => "LAST_WEEK",
            DateBucket::LastMonth => "LAST_MONTH",
            DateBucket::LastYear => "LAST_YEAR",
        }
    }

    /// Returns `true` when `date` falls inside this bucket relative to `now`.
    ///
    /// `ThisWeek` numbers weeks with `week`, while `LastWeek` always spans
    /// Monday to Sunday of the week before `now`, whatever the convention.
    pub fn matches(self, date: NaiveDate, now: NaiveDate, week: WeekConvention) -> bool {
        match self {
            DateBucket::AllTime => true,
            DateBucket::Today => date == now,
            DateBucket::ThisWeek => {
                date.year() == now.year() && week.week_of_year(date) == week.week_of_year(now)
            }
            DateBucket::ThisMonth => date.year() == now.year() && date.month() == now.month(),
            DateBucket::ThisYear => date.year() == now.year(),
            DateBucket::LastWeek => {
                let start = monday_of(now - Duration::days(7));
                let end = start + Duration::days(6);
                date >= start && date <= end
            }
            DateBucket::LastMonth => {
                let (year, month) = shift_year_month(now.year(), now.month(), -1);
                date.year() == year && date.month() == month
            }
            DateBucket::LastYear => date.year() == now.year() - 1,
        }
    }

    /// Parses `raw`, falling back to [`DateBucket::AllTime`] for unknown names.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: EngineError| {
            warn!(%err, "falling back to ALL_TIME");
            DateBucket::AllTime
        })
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateBucket {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_selector(s).as_str() {
            "ALL_TIME" | "ALL" => Ok(DateBucket::AllTime),
            "TODAY" => Ok(DateBucket::Today),
            "THIS_WEEK" => Ok(DateBucket::ThisWeek),
            "THIS_MONTH" => Ok(DateBucket::ThisMonth),
            "THIS_YEAR" => Ok(DateBucket::ThisYear),
            "LAST_WEEK" => Ok(DateBucket::LastWeek),
            "LAST_MONTH" => Ok(DateBucket::LastMonth),
            "LAST_YEAR" => Ok(DateBucket::LastYear),
            _ => Err(EngineError::UnknownBucket(s.trim().to_string())),
        }
    }
}

/// Upper-cases a selector name and joins its words with `_`, so `this-month`,
/// `ThisMonth` and `THIS_MONTH` compare equal.
pub(crate) fn normalize_selector(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len() + 4);
    let mut previous_lower = false;
    for ch in raw.trim().chars() {
        if matches!(ch, '-' | '_' | ' ') {
            if !normalized.is_empty() && !normalized.ends_with('_') {
                normalized.push('_');
            }
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower {
            normalized.push('_');
        }
        previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
        normalized.extend(ch.to_uppercase());
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn check(bucket: DateBucket, record: NaiveDate, now: NaiveDate) -> bool {
        bucket.matches(record, now, WeekConvention::Iso)
    }

    #[test]
    fn all_time_accepts_everything() {
        assert!(check(DateBucket::AllTime, date(1999, 1, 1), date(2024, 6, 1)));
        assert!(check(DateBucket::AllTime, date(2030, 1, 1), date(2024, 6, 1)));
    }

    #[test]
    fn today_requires_exact_date() {
        let now = date(2024, 5, 20);
        assert!(check(DateBucket::Today, now, now));
        assert!(!check(DateBucket::Today, date(2024, 5, 19), now));
    }

    #[test]
    fn this_month_ignores_other_months_and_years() {
        let now = date(2024, 1, 15);
        assert!(check(DateBucket::ThisMonth, date(2024, 1, 10), now));
        assert!(!check(DateBucket::ThisMonth, date(2024, 2, 10), now));
        assert!(!check(DateBucket::ThisMonth, date(2023, 1, 10), now));
    }

    #[test]
    fn this_year_and_last_year() {
        let now = date(2024, 7, 4);
        assert!(check(DateBucket::ThisYear, date(2024, 12, 31), now));
        assert!(!check(DateBucket::ThisYear, date(2023, 12, 31), now));
        assert!(check(DateBucket::LastYear, date(2023, 1, 1), now));
        assert!(!check(DateBucket::LastYear, date(2022, 12, 31), now));
    }

    #[test]
    fn this_week_uses_locale_week_numbers() {
        // Sunday 2024-03-10 opens a US week but closes an ISO week.
        let now = date(2024, 3, 11);
        let sunday = date(2024, 3, 10);
        assert!(!DateBucket::ThisWeek.matches(sunday, now, WeekConvention::Iso));
        assert!(DateBucket::ThisWeek.matches(sunday, now, WeekConvention::SundayFirst));
        assert!(DateBucket::ThisWeek.matches(date(2024, 3, 17), now, WeekConvention::Iso));
    }

    #[test]
    fn this_week_requires_same_calendar_year() {
        // ISO week 1 of 2025 starts on Monday 2024-12-30.
        let now = date(2025, 1, 2);
        assert!(!check(DateBucket::ThisWeek, date(2024, 12, 30), now));
        assert!(check(DateBucket::ThisWeek, date(2025, 1, 1), now));
    }

    #[test]
    fn this_week_never_pairs_december_with_january() {
        for week in [WeekConvention::Iso, WeekConvention::SundayFirst] {
            for (record, now) in [
                (date(2024, 1, 1), date(2024, 12, 31)),
                (date(2024, 1, 2), date(2024, 12, 30)),
                (date(2022, 1, 1), date(2022, 12, 28)),
                (date(2023, 1, 1), date(2023, 12, 31)),
            ] {
                assert!(
                    !DateBucket::ThisWeek.matches(record, now, week),
                    "{week:?}: {record} matched THIS_WEEK for now={now}"
                );
            }
            assert!(DateBucket::ThisWeek.matches(date(2024, 12, 31), date(2024, 12, 31), week));
        }
    }

    #[test]
    fn this_week_groups_days_before_week_one() {
        // 2022-01-01 and 2022-01-02 precede the first ISO Monday.
        let now = date(2022, 1, 2);
        assert!(check(DateBucket::ThisWeek, date(2022, 1, 1), now));
        assert!(!check(DateBucket::ThisWeek, date(2022, 1, 3), now));
        assert!(!check(DateBucket::ThisWeek, date(2021, 12, 31), now));
    }

    #[test]
    fn last_week_spans_previous_monday_to_sunday() {
        let now = date(2024, 3, 13); // Wednesday
        assert!(check(DateBucket::LastWeek, date(2024, 3, 4), now));
        assert!(check(DateBucket::LastWeek, date(2024, 3, 10), now));
        assert!(!check(DateBucket::LastWeek, date(2024, 3, 3), now));
        assert!(!check(DateBucket::LastWeek, date(2024, 3, 11), now));
    }

    #[test]
    fn last_week_ignores_sunday_first_locales() {
        let now = date(2024, 3, 13);
        let sunday_before = date(2024, 3, 3);
        assert!(!DateBucket::LastWeek.matches(sunday_before, now, WeekConvention::SundayFirst));
        assert!(DateBucket::LastWeek.matches(date(2024, 3, 4), now, WeekConvention::SundayFirst));
    }

    #[test]
    fn last_month_uses_calendar_arithmetic() {
        let now = date(2024, 3, 31);
        assert!(check(DateBucket::LastMonth, date(2024, 2, 29), now));
        assert!(check(DateBucket::LastMonth, date(2024, 2, 1), now));
        assert!(!check(DateBucket::LastMonth, date(2024, 3, 1), now));

        let january = date(2024, 1, 15);
        assert!(check(DateBucket::LastMonth, date(2023, 12, 1), january));
        assert!(!check(DateBucket::LastMonth, date(2024, 12, 1), january));
    }

    #[test]
    fn parses_upstream_and_relaxed_names() {
        assert_eq!("THIS_MONTH".parse::<DateBucket>(), Ok(DateBucket::ThisMonth));
        assert_eq!("this-month".parse::<DateBucket>(), Ok(DateBucket::ThisMonth));
        assert_eq!("LastWeek".parse::<DateBucket>(), Ok(DateBucket::LastWeek));
        assert_eq!(" all time ".parse::<DateBucket>(), Ok(DateBucket::AllTime));
        for bucket in DateBucket::ALL {
            assert_eq!(bucket.to_string().parse::<DateBucket>(), Ok(bucket));
        }
    }

    #[test]
    fn unknown_names_error_strictly_and_fall_back_leniently() {
        assert_eq!(
            "NEXT_DECADE".parse::<DateBucket>(),
            Err(EngineError::UnknownBucket("NEXT_DECADE".into()))
        );
        assert_eq!(DateBucket::parse_lenient("NEXT_DECADE"), DateBucket::AllTime);
    }

    #[test]
    fn serializes_with_upstream_names() {
        let json = serde_json::to_string(&DateBucket::LastMonth).unwrap();
        assert_eq!(json, "\"LAST_MONTH\"");
    }
}
