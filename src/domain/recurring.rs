use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        }
    }
}

/// A named cash flow that repeats monthly or yearly over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringItem {
    pub id: Uuid,
    pub name: String,
    pub kind: FlowKind,
    pub amount: f64,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RecurringItem {
    pub fn new(
        name: impl Into<String>,
        kind: FlowKind,
        amount: f64,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount,
            frequency,
            start_date,
            end_date: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Whether the item contributes in the month beginning at `month_start`.
    ///
    /// Yearly items fire only in the calendar month of their start date, at
    /// full amount. An inverted date range never passes both bounds, so such
    /// an item is inert rather than an error.
    pub fn applies_on(&self, month_start: NaiveDate) -> bool {
        if month_start < self.start_date {
            return false;
        }
        if let Some(end) = self.end_date {
            if month_start > end {
                return false;
            }
        }
        match self.frequency {
            Frequency::Monthly => true,
            Frequency::Yearly => month_start.month() == self.start_date.month(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_item_waits_for_start_date() {
        let item = RecurringItem::new(
            "Retainer",
            FlowKind::Income,
            900.0,
            Frequency::Monthly,
            date(2025, 3, 15),
        );
        // First of March precedes the mid-month start, so March is skipped.
        assert!(!item.applies_on(date(2025, 3, 1)));
        assert!(item.applies_on(date(2025, 4, 1)));
    }

    #[test]
    fn yearly_item_fires_in_anchor_month_only() {
        let item = RecurringItem::new(
            "Insurance",
            FlowKind::Expense,
            1200.0,
            Frequency::Yearly,
            date(2024, 6, 1),
        );
        assert!(item.applies_on(date(2025, 6, 1)));
        assert!(!item.applies_on(date(2025, 5, 1)));
        assert!(!item.applies_on(date(2025, 7, 1)));
    }

    #[test]
    fn end_date_is_inclusive() {
        let item = RecurringItem::new(
            "Lease",
            FlowKind::Expense,
            450.0,
            Frequency::Monthly,
            date(2025, 1, 1),
        )
        .with_end_date(date(2025, 4, 1));
        assert!(item.applies_on(date(2025, 4, 1)));
        assert!(!item.applies_on(date(2025, 5, 1)));
    }

    #[test]
    fn inverted_range_never_applies() {
        let item = RecurringItem::new(
            "Typo",
            FlowKind::Income,
            10.0,
            Frequency::Monthly,
            date(2025, 6, 1),
        )
        .with_end_date(date(2025, 1, 1));
        for month in 1..=12 {
            assert!(!item.applies_on(date(2025, month, 1)));
        }
    }
}
