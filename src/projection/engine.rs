use chrono::NaiveDate;

use crate::currency::{format_month, LocaleConfig};
use crate::domain::{FlowKind, ProjectionSettings, RecurringItem};
use crate::time::{add_months, first_of_month, month_key};

/// One month of projected cash flow. Amounts are rounded to whole currency
/// units at emission; the running balance is carried at full precision
/// between months so rounding never compounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRecord {
    /// Stable `YYYY-MM` key, unique and strictly increasing across a series.
    pub month_key: String,
    /// Display label, e.g. `"Mar 2025"`.
    pub month_label: String,
    pub income: i64,
    pub expense: i64,
    pub net: i64,
    pub cumulative: i64,
}

pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Projects `horizon_months` months of cash flow starting from the month
    /// containing `reference`.
    ///
    /// Income compounds with the salary-increase rate and expenses with the
    /// inflation rate, both as a function of fractional years elapsed since
    /// the first projected month. Malformed items degrade to contributing
    /// nothing; the call itself never fails.
    pub fn project(
        starting_assets: f64,
        items: &[RecurringItem],
        settings: &ProjectionSettings,
        horizon_months: u32,
        reference: NaiveDate,
        locale: &LocaleConfig,
    ) -> Vec<MonthRecord> {
        let anchor = first_of_month(reference);
        let mut records = Vec::with_capacity(horizon_months as usize);
        let mut cumulative = starting_assets;

        for index in 0..horizon_months {
            let month_start = add_months(anchor, index as i32);
            let years_passed = f64::from(index) / 12.0;
            let expense_multiplier = compound(settings.inflation_rate, years_passed);
            let income_multiplier = compound(settings.salary_increase_rate, years_passed);

            let mut income = 0.0;
            let mut expense = 0.0;
            for item in items {
                if !item.applies_on(month_start) {
                    continue;
                }
                match item.kind {
                    FlowKind::Income => income += item.amount * income_multiplier,
                    FlowKind::Expense => expense += item.amount * expense_multiplier,
                }
            }

            let net = income - expense;
            cumulative += net;
            records.push(MonthRecord {
                month_key: month_key(month_start),
                month_label: format_month(locale, month_start),
                income: round_unit(income),
                expense: round_unit(expense),
                net: round_unit(net),
                cumulative: round_unit(cumulative),
            });
        }

        records
    }
}

fn compound(annual_rate_percent: f64, years_passed: f64) -> f64 {
    (1.0 + annual_rate_percent / 100.0).powf(years_passed)
}

/// Half-up rounding to whole units, negatives included (-2.5 rounds to -2).
fn round_unit(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
