use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Upper bound for the dashboard trend window, ten years of months.
pub const MAX_TREND_MONTHS: u32 = 120;

/// Preferences that shape the engine's default views.
///
/// Selector names are stored as written so a file edited by hand never fails
/// to load; they are resolved when a view is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_bucket_value")]
    pub default_bucket: String,
    #[serde(default = "Config::default_sort_value")]
    pub default_sort: String,
    #[serde(default = "Config::default_top_categories")]
    pub top_categories: usize,
    #[serde(default = "Config::default_trend_months")]
    pub trend_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            default_bucket: Self::default_bucket_value(),
            default_sort: Self::default_sort_value(),
            top_categories: Self::default_top_categories(),
            trend_months: Self::default_trend_months(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_bucket_value() -> String {
        "THIS_MONTH".into()
    }

    pub fn default_sort_value() -> String {
        "DATE_NEWEST".into()
    }

    pub fn default_top_categories() -> usize {
        5
    }

    pub fn default_trend_months() -> u32 {
        6
    }

    /// Rejects values no view can be built from. Selector names are not
    /// checked here; unknown ones fall back when resolved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(invalid("locale", "must not be blank"));
        }
        if self.currency.trim().is_empty() {
            return Err(invalid("currency", "must not be blank"));
        }
        if self.trend_months == 0 || self.trend_months > MAX_TREND_MONTHS {
            return Err(invalid(
                "trend_months",
                format!("must be between 1 and {MAX_TREND_MONTHS}, got {}", self.trend_months),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
