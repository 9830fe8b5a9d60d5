//! Domain model for income records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single inflow of money as handed over by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeRecord {
    pub id: Uuid,
    pub amount: f64,
    pub source: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncomeRecord {
    pub fn new(
        amount: f64,
        source: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            amount,
            source: source.into(),
            category: category.into(),
            date,
            description: None,
            created_at: now,
            updated_at: now,
        }
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
}

impl Identifiable for IncomeRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for IncomeRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for IncomeRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl FinancialRecord for IncomeRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn label(&self) -> &str {
        &self.source
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Displayable for IncomeRecord {
    fn display_label(&self) -> String {
        format!("income:{} {:.2} [{}] {}", self.source, self.amount, self.category, self.date)
    }
}
