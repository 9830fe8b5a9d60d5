//! Monthly, per-category and headline rollups.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tally_domain::{
    CategoryAggregate, ExpenseRecord, FinancialRecord, IncomeRecord, MonthlyAggregate,
    PeriodSummary,
};
use tracing::{debug, warn};

use crate::time::shift_year_month;

/// Chronological direction of a monthly series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MonthOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// Longest trend window `monthly_trend` builds, ten years of months.
pub const MAX_TREND_MONTHS: u32 = 120;

pub struct AggregationService;

impl AggregationService {
    /// One aggregate per month that has at least one record.
    pub fn monthly(
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        order: MonthOrder,
    ) -> Vec<MonthlyAggregate> {
        let mut months: BTreeMap<(i32, u32), MonthlyAggregate> = BTreeMap::new();
        for income in incomes {
            month_entry(&mut months, income.date).add_income(income.amount);
        }
        for expense in expenses {
            month_entry(&mut months, expense.date).add_expense(expense.amount);
        }
        let series = ordered(months.into_values().collect(), order);
        debug!(
            incomes = incomes.len(),
            expenses = expenses.len(),
            months = series.len(),
            "monthly aggregation"
        );
        series
    }

    /// Exactly `months` consecutive aggregates ending with the month of `now`,
    /// empty months included. Records outside the window are ignored.
    /// Windows longer than [`MAX_TREND_MONTHS`] are cut to that length.
    pub fn monthly_trend(
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        now: NaiveDate,
        months: u32,
        order: MonthOrder,
    ) -> Vec<MonthlyAggregate> {
        if months > MAX_TREND_MONTHS {
            warn!(months, max = MAX_TREND_MONTHS, "trend window capped");
        }
        let months = months.min(MAX_TREND_MONTHS);
        let mut window: BTreeMap<(i32, u32), MonthlyAggregate> = (0..months)
            .map(|back| {
                let (year, month) = shift_year_month(now.year(), now.month(), -(back as i32));
                ((year, month), MonthlyAggregate::new(year, month))
            })
            .collect();
        for income in incomes {
            if let Some(entry) = window.get_mut(&(income.date.year(), income.date.month())) {
                entry.add_income(income.amount);
            }
        }
        for expense in expenses {
            if let Some(entry) = window.get_mut(&(expense.date.year(), expense.date.month())) {
                entry.add_expense(expense.amount);
            }
        }
        debug!(%now, months, "monthly trend window");
        ordered(window.into_values().collect(), order)
    }

    /// Groups one record kind by category, ranks by total and keeps the first `top_n`.
    ///
    /// Percentages are relative to the total of `records`; a zero total yields 0%.
    pub fn by_category<R: FinancialRecord>(records: &[R], top_n: usize) -> Vec<CategoryAggregate> {
        let mut groups: Vec<CategoryAggregate> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for record in records {
            let slot = *index.entry(record.category()).or_insert_with(|| {
                groups.push(CategoryAggregate {
                    category: record.category().to_string(),
                    total: 0.0,
                    percentage: 0.0,
                    count: 0,
                });
                groups.len() - 1
            });
            let group = &mut groups[slot];
            group.total += record.amount();
            group.count += 1;
        }

        let grand_total: f64 = groups.iter().map(|group| group.total).sum();
        for group in &mut groups {
            group.percentage = if grand_total != 0.0 {
                group.total / grand_total * 100.0
            } else {
                0.0
            };
        }

        groups.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let categories = groups.len();
        groups.truncate(top_n);
        debug!(records = records.len(), categories, top_n, "category aggregation");
        groups
    }

    pub fn summarize(incomes: &[IncomeRecord], expenses: &[ExpenseRecord]) -> PeriodSummary {
        let total_income = incomes.iter().map(|income| income.amount).sum();
        let total_expense = expenses.iter().map(|expense| expense.amount).sum();
        PeriodSummary::new(total_income, total_expense, incomes.len(), expenses.len())
    }
}

fn month_entry(
    months: &mut BTreeMap<(i32, u32), MonthlyAggregate>,
    date: NaiveDate,
) -> &mut MonthlyAggregate {
    months
        .entry((date.year(), date.month()))
        .or_insert_with(|| MonthlyAggregate::new(date.year(), date.month()))
}

fn ordered(mut series: Vec<MonthlyAggregate>, order: MonthOrder) -> Vec<MonthlyAggregate> {
    if order == MonthOrder::NewestFirst {
        series.reverse();
    }
    series
}
