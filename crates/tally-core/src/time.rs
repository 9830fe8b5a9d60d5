//! Clock access and calendar helpers shared by the engines.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.today.and_time(NaiveTime::MIN).and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Regions whose calendars start the week on Sunday and count the week holding
/// January 1st as week 1.
const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "US", "CA", "MX", "BR", "JP", "IL", "PH", "ZA", "KR", "TW", "HK", "IN", "SA",
];

/// Week-of-year numbering rule: first weekday plus the minimal number of days
/// week 1 must have inside the new year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekConvention {
    /// Monday start, four minimal days (ISO-8601).
    #[default]
    Iso,
    /// Sunday start, one minimal day.
    SundayFirst,
}

impl WeekConvention {
    /// Picks the convention for a locale tag such as `en-US`, `pt_BR` or `zh-Hant-TW`.
    pub fn from_locale(locale: &str) -> Self {
        let region = locale
            .trim()
            .split(|c| c == '-' || c == '_')
            .skip(1)
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()));
        match region {
            Some(code)
                if SUNDAY_FIRST_REGIONS
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(code)) =>
            {
                WeekConvention::SundayFirst
            }
            _ => WeekConvention::Iso,
        }
    }

    pub fn first_day(self) -> Weekday {
        match self {
            WeekConvention::Iso => Weekday::Mon,
            WeekConvention::SundayFirst => Weekday::Sun,
        }
    }

    pub fn minimal_days(self) -> u32 {
        match self {
            WeekConvention::Iso => 4,
            WeekConvention::SundayFirst => 1,
        }
    }

    /// Week number of `date` within its calendar year.
    ///
    /// Days before week 1 are week 0 and late December days keep counting
    /// (52, 53) instead of rolling over into the next year's week 1.
    pub fn week_of_year(self, date: NaiveDate) -> u32 {
        let Some(start) = self.week_one_start(date.year()) else {
            return date.iso_week().week();
        };
        if date < start {
            return 0;
        }
        ((date - start).num_days() / 7) as u32 + 1
    }

    /// First day of the week containing `date`.
    pub fn week_start(self, date: NaiveDate) -> NaiveDate {
        date - Duration::days(days_since(date.weekday(), self.first_day()) as i64)
    }

    fn week_one_start(self, year: i32) -> Option<NaiveDate> {
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let offset = days_since(jan_first.weekday(), self.first_day());
        let start = jan_first - Duration::days(offset as i64);
        if 7 - offset >= self.minimal_days() {
            Some(start)
        } else {
            Some(start + Duration::days(7))
        }
    }
}

fn days_since(day: Weekday, first: Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - first.num_days_from_monday()) % 7
}

/// Monday on or before `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Moves a `(year, month)` pair by `delta` calendar months.
pub fn shift_year_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}
