#![allow(dead_code)]

use chrono::NaiveDate;
use tally::config::ConfigManager;
use tally::domain::{ExpenseRecord, IncomeRecord};
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Friday of the fixture's "current" week.
pub fn reference_date() -> NaiveDate {
    date(2024, 3, 15)
}

pub fn household_incomes() -> Vec<IncomeRecord> {
    vec![
        IncomeRecord::new(3200.0, "Employer", "Salary", date(2024, 3, 1)),
        IncomeRecord::new(250.0, "Freelance", "Side work", date(2024, 3, 10))
            .with_description("logo design"),
        IncomeRecord::new(3200.0, "Employer", "Salary", date(2024, 2, 1)),
        IncomeRecord::new(3200.0, "Employer", "Salary", date(2023, 12, 1)),
        IncomeRecord::new(500.0, "Year-end bonus", "Salary", date(2023, 12, 20)),
    ]
}

pub fn household_expenses() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new(1200.0, "Rent", "Housing", date(2024, 3, 1))
            .with_payment_method("Bank Transfer"),
        ExpenseRecord::new(15.99, "Netflix Subscription", "Entertainment", date(2024, 3, 5))
            .with_payment_method("Card")
            .recurring(true),
        ExpenseRecord::new(89.0, "Electricity", "Utilities", date(2024, 3, 12))
            .with_payment_method("Bank Transfer")
            .recurring(true),
        ExpenseRecord::new(42.5, "Groceries", "Food", date(2024, 3, 14)),
        ExpenseRecord::new(1200.0, "Rent", "Housing", date(2024, 2, 1))
            .with_payment_method("Bank Transfer"),
        ExpenseRecord::new(75.5, "Dinner out", "Food", date(2024, 2, 20))
            .with_description("anniversary"),
        ExpenseRecord::new(300.0, "Gifts", "Shopping", date(2023, 12, 22)).with_payment_method("Card"),
    ]
}

/// Config manager backed by a fresh temporary directory; keep the guard alive.
pub fn setup_config_env() -> (TempDir, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().join("tally")).expect("create config manager");
    (temp, manager)
}
