use tally_config::Config;
use tally_core::{
    AggregationService, Clock, DateBucket, RecordQuery, SortKey, WeekConvention,
};
use tally_domain::{CategoryAggregate, Displayable, ExpenseRecord, FinancialRecord, IncomeRecord};
use tracing::debug;

use crate::errors::TallyResult;

pub struct AnalyticsService;

impl AnalyticsService {
    pub fn expenses(
        expenses: &[ExpenseRecord],
        query: &RecordQuery,
        config: &Config,
        clock: &dyn Clock,
    ) -> Vec<ExpenseRecord> {
        Self::run(expenses, query, config, clock)
    }

    pub fn incomes(
        incomes: &[IncomeRecord],
        query: &RecordQuery,
        config: &Config,
        clock: &dyn Clock,
    ) -> Vec<IncomeRecord> {
        Self::run(incomes, query, config, clock)
    }

    pub fn category_breakdown<R: FinancialRecord>(
        records: &[R],
        top_n: usize,
    ) -> Vec<CategoryAggregate> {
        debug!(records = records.len(), top_n, "category breakdown requested");
        AggregationService::by_category(records, top_n)
    }

    /// Query seeded from the stored default selectors; unknown names fall back.
    pub fn default_query(config: &Config) -> RecordQuery {
        RecordQuery::new()
            .with_bucket(DateBucket::parse_lenient(&config.default_bucket))
            .sorted_by(SortKey::parse_lenient(&config.default_sort))
    }

    /// Query built from user supplied selector names, rejecting unknown ones.
    pub fn parse_query(bucket: &str, sort: &str) -> TallyResult<RecordQuery> {
        Ok(RecordQuery::parse(bucket, sort)?)
    }

    fn run<R>(records: &[R], query: &RecordQuery, config: &Config, clock: &dyn Clock) -> Vec<R>
    where
        R: FinancialRecord + Displayable + Clone,
    {
        let week = WeekConvention::from_locale(&config.locale);
        let found = query.apply(records, clock.today(), week);
        if let Some(first) = found.first() {
            debug!(
                matched = found.len(),
                first = %first.display_label(),
                "analytics query"
            );
        }
        found
    }
}
