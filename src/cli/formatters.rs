use chrono::NaiveDate;

use crate::currency::{format_number, symbol_for, LocaleConfig};

/// Formats a whole-unit amount with grouping and a currency symbol.
pub fn format_amount(locale: &LocaleConfig, amount: i64, currency: &str) -> String {
    let body = format_number(locale, amount as f64, 0);
    format!("{}{}", symbol_for(currency), body)
}

/// Formats a fractional amount with two decimals and a currency symbol.
pub fn format_amount_exact(locale: &LocaleConfig, amount: f64, currency: &str) -> String {
    let body = format_number(locale, amount, 2);
    format!("{}{}", symbol_for(currency), body)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
