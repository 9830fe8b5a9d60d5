mod common;

use std::fs;

use common::*;
use tally::config::{Config, ConfigError};
use tally::engine::FixedClock;
use tally::{DashboardService, TallyError};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_snapshot_covers_current_month() {
    tally::init();
    let clock = FixedClock::on(reference_date());
    let snapshot = DashboardService::snapshot(
        &household_incomes(),
        &household_expenses(),
        &Config::default(),
        &clock,
    );

    assert_eq!(snapshot.reference_date, reference_date());
    assert_eq!(snapshot.bucket, "THIS_MONTH");

    let summary = &snapshot.summary;
    assert_eq!(summary.income_count(), 2);
    assert_eq!(summary.expense_count(), 4);
    assert!(approx(summary.total_income(), 3450.0));
    assert!(approx(summary.total_expense(), 1347.49));
    assert!(approx(summary.balance(), 3450.0 - 1347.49));

    let expense_names: Vec<&str> = snapshot
        .top_expense_categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(expense_names, vec!["Housing", "Utilities", "Food", "Entertainment"]);

    let incomes = &snapshot.top_income_categories;
    assert_eq!(incomes.len(), 2);
    assert_eq!(incomes[0].category, "Salary");
    assert!(approx(incomes[0].percentage, 3200.0 / 3450.0 * 100.0));
}

#[test]
fn trend_spans_full_history_window() {
    let clock = FixedClock::on(reference_date());
    let snapshot = DashboardService::snapshot(
        &household_incomes(),
        &household_expenses(),
        &Config::default(),
        &clock,
    );

    let keys: Vec<(i32, u32)> = snapshot.trend.iter().map(|m| m.key()).collect();
    assert_eq!(
        keys,
        vec![(2023, 10), (2023, 11), (2023, 12), (2024, 1), (2024, 2), (2024, 3)]
    );

    let december = &snapshot.trend[2];
    assert!(approx(december.income(), 3700.0));
    assert!(approx(december.expense(), 300.0));
    assert_eq!(snapshot.trend[3].balance(), 0.0);

    let february = &snapshot.trend[4];
    assert!(approx(february.balance(), 3200.0 - 1275.5));
}

#[test]
fn saved_config_drives_snapshot() {
    let (_guard, manager) = setup_config_env();
    let config = Config {
        default_bucket: "LAST_MONTH".into(),
        top_categories: 2,
        trend_months: 3,
        ..Config::default()
    };
    manager.save(&config).expect("save config");

    let clock = FixedClock::on(reference_date());
    let snapshot = DashboardService::snapshot_with_saved_config(
        &manager,
        &household_incomes(),
        &household_expenses(),
        &clock,
    )
    .expect("snapshot");

    assert_eq!(snapshot.bucket, "LAST_MONTH");
    assert!(approx(snapshot.summary.total_income(), 3200.0));
    assert!(approx(snapshot.summary.total_expense(), 1275.5));
    assert_eq!(snapshot.trend.len(), 3);

    let names: Vec<&str> = snapshot
        .top_expense_categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec!["Housing", "Food"]);
}

#[test]
fn corrupt_config_surfaces_config_error() {
    let (_guard, manager) = setup_config_env();
    fs::write(manager.config_path(), "[1, 2").expect("write corrupt config");

    let clock = FixedClock::on(reference_date());
    let err = DashboardService::snapshot_with_saved_config(&manager, &[], &[], &clock)
        .expect_err("corrupt config must fail");
    assert!(matches!(err, TallyError::Config(ConfigError::Serde(_))));
}

#[test]
fn snapshot_serializes_for_presentation() {
    let clock = FixedClock::on(reference_date());
    let snapshot = DashboardService::snapshot(
        &household_incomes(),
        &household_expenses(),
        &Config::default(),
        &clock,
    );

    let json = DashboardService::render_json(&snapshot).expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["reference_date"], "2024-03-15");
    assert_eq!(value["bucket"], "THIS_MONTH");
    assert_eq!(value["summary"]["income_count"], 2);
    assert_eq!(value["trend"].as_array().map(Vec::len), Some(6));
}
