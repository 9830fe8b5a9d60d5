//! Domain model for expense records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single outflow of money as handed over by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub amount: f64,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "ExpenseRecord::default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub is_recurring: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExpenseRecord {
    pub fn new(
        amount: f64,
        title: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            amount,
            title: title.into(),
            category: category.into(),
            date,
            description: None,
            payment_method: Self::default_payment_method(),
            is_recurring: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn default_payment_method() -> String {
        DEFAULT_PAYMENT_METHOD.into()
    }

    /// Replaces the generated identifier with one assigned by the store.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl FinancialRecord for ExpenseRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        let recurring = if self.is_recurring { " (recurring)" } else { "" };
        format!(
            "expense:{} {:.2} [{}] {} via {}{}",
            self.title, self.amount, self.category, self.date, self.payment_method, recurring
        )
    }
}
