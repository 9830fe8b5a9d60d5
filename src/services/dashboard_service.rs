use tally_config::{Config, ConfigManager};
use tally_core::{
    AggregationService, Clock, DateBucket, FilterService, MonthOrder, WeekConvention,
};
use tally_domain::{DashboardSnapshot, ExpenseRecord, IncomeRecord};
use tracing::debug;

use crate::errors::TallyResult;

pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard for `clock.today()`.
    ///
    /// Summary and category rankings cover the configured default bucket; the
    /// trend always spans the last `trend_months` months of the full history.
    pub fn snapshot(
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        config: &Config,
        clock: &dyn Clock,
    ) -> DashboardSnapshot {
        let today = clock.today();
        let week = WeekConvention::from_locale(&config.locale);
        let bucket = DateBucket::parse_lenient(&config.default_bucket);

        let incomes_in_bucket = FilterService::by_bucket(incomes, bucket, today, week);
        let expenses_in_bucket = FilterService::by_bucket(expenses, bucket, today, week);

        let snapshot = DashboardSnapshot {
            reference_date: today,
            bucket: bucket.as_str().to_string(),
            summary: AggregationService::summarize(&incomes_in_bucket, &expenses_in_bucket),
            trend: AggregationService::monthly_trend(
                incomes,
                expenses,
                today,
                config.trend_months,
                MonthOrder::OldestFirst,
            ),
            top_expense_categories: AggregationService::by_category(
                &expenses_in_bucket,
                config.top_categories,
            ),
            top_income_categories: AggregationService::by_category(
                &incomes_in_bucket,
                config.top_categories,
            ),
        };
        debug!(
            %today,
            %bucket,
            incomes = incomes_in_bucket.len(),
            expenses = expenses_in_bucket.len(),
            "dashboard snapshot"
        );
        snapshot
    }

    /// Same as [`DashboardService::snapshot`] with preferences read from disk.
    pub fn snapshot_with_saved_config(
        manager: &ConfigManager,
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        clock: &dyn Clock,
    ) -> TallyResult<DashboardSnapshot> {
        let config = manager.load()?;
        Ok(Self::snapshot(incomes, expenses, &config, clock))
    }

    pub fn render_json(snapshot: &DashboardSnapshot) -> TallyResult<String> {
        Ok(serde_json::to_string_pretty(snapshot)?)
    }
}
