//! Shared traits and constants for finance records.

use chrono::NaiveDate;
use uuid::Uuid;

/// Payment method assumed when the record store supplies none.
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

/// Exposes a stable identifier assigned by the record store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Monetary value of a record, always non-negative.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Exposes the calendar date a record is booked on.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Read-only view shared by income and expense records.
///
/// `label` is the kind-specific free text: the income source or the expense title.
pub trait FinancialRecord: Identifiable + Amounted + Dated {
    fn category(&self) -> &str;
    fn label(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

/// One-line human readable rendering, used in debug logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

// Consumers build records without pinning these crates themselves.
pub use chrono;
pub use serde;
pub use uuid;
