#![allow(dead_code)]

use chrono::NaiveDate;

use cashflow_core::currency::CurrencyCode;
use cashflow_core::domain::{FlowKind, Frequency, Profile, RecurringItem};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn monthly_income(name: &str, amount: f64, start: NaiveDate) -> RecurringItem {
    RecurringItem::new(name, FlowKind::Income, amount, Frequency::Monthly, start)
}

pub fn monthly_expense(name: &str, amount: f64, start: NaiveDate) -> RecurringItem {
    RecurringItem::new(name, FlowKind::Expense, amount, Frequency::Monthly, start)
}

pub fn yearly_expense(name: &str, amount: f64, start: NaiveDate) -> RecurringItem {
    RecurringItem::new(name, FlowKind::Expense, amount, Frequency::Yearly, start)
}

pub fn usd_profile(name: &str) -> Profile {
    Profile::new(name, CurrencyCode::new("USD"))
}
