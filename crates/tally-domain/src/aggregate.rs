//! Derived views produced by the aggregation engine.
//!
//! These values are rebuilt on every engine call and never persisted.

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Income, expense and balance for one calendar month.
///
/// The balance is derived on read, so it always reflects the current operands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyAggregate {
    year: i32,
    month: u32,
    label: String,
    income: f64,
    expense: f64,
}

impl MonthlyAggregate {
    /// Creates an empty aggregate for `month` (1-based) of `year`.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            label: month_label(year, month),
            income: 0.0,
            expense: 0.0,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Short label such as `Jan 2024`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn expense(&self) -> f64 {
        self.expense
    }

    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }

    pub fn add_income(&mut self, amount: f64) {
        self.income += amount;
    }

    pub fn add_expense(&mut self, amount: f64) {
        self.expense += amount;
    }

    pub fn set_income(&mut self, amount: f64) {
        self.income = amount;
    }

    pub fn set_expense(&mut self, amount: f64) {
        self.expense = amount;
    }

    /// Sort key that orders aggregates chronologically.
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

impl Serialize for MonthlyAggregate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MonthlyAggregate", 6)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("income", &self.income)?;
        state.serialize_field("expense", &self.expense)?;
        state.serialize_field("balance", &self.balance())?;
        state.end()
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

/// Totals for one category within a homogeneous record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub total: f64,
    /// Share of the collection's grand total, in percent.
    pub percentage: f64,
    pub count: usize,
}

/// Headline totals for a set of income and expense records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    total_income: f64,
    total_expense: f64,
    balance: f64,
    savings_rate: f64,
    income_count: usize,
    expense_count: usize,
}

impl PeriodSummary {
    pub fn new(
        total_income: f64,
        total_expense: f64,
        income_count: usize,
        expense_count: usize,
    ) -> Self {
        let balance = total_income - total_expense;
        let savings_rate = if total_income != 0.0 {
            balance / total_income * 100.0
        } else {
            0.0
        };
        Self {
            total_income,
            total_expense,
            balance,
            savings_rate,
            income_count,
            expense_count,
        }
    }

    pub fn total_income(&self) -> f64 {
        self.total_income
    }

    pub fn total_expense(&self) -> f64 {
        self.total_expense
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Percentage of income left after expenses; zero when there is no income.
    pub fn savings_rate(&self) -> f64 {
        self.savings_rate
    }

    pub fn income_count(&self) -> usize {
        self.income_count
    }

    pub fn expense_count(&self) -> usize {
        self.expense_count
    }
}

/// Everything the dashboard screen needs for one reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub reference_date: NaiveDate,
    /// Name of the temporal bucket the summary and categories were filtered by.
    pub bucket: String,
    pub summary: PeriodSummary,
    pub trend: Vec<MonthlyAggregate>,
    pub top_expense_categories: Vec<CategoryAggregate>,
    pub top_income_categories: Vec<CategoryAggregate>,
}
