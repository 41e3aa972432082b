//! Maintenance of a profile's recurring cash-flow items.

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{FlowKind, Frequency, Profile, RecurringItem};
use crate::errors::CoreError;

pub struct RecurringService;

impl RecurringService {
    /// Adds a recurring item. The amount must be positive; an inverted date
    /// range is accepted but logged, and the item will simply never apply.
    pub fn add(
        profile: &mut Profile,
        name: impl Into<String>,
        kind: FlowKind,
        amount: f64,
        frequency: Frequency,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Uuid, CoreError> {
        if !(amount > 0.0) {
            return Err(CoreError::InvalidInput(
                "recurring amount must be positive".into(),
            ));
        }
        let name = name.into();
        if let Some(end) = end_date {
            if end < start_date {
                warn!(
                    item = %name,
                    %start_date,
                    end_date = %end,
                    "recurring item ends before it starts and will never apply"
                );
            }
        }
        let mut item = RecurringItem::new(name, kind, amount, frequency, start_date);
        item.end_date = end_date;
        let id = item.id;
        profile.recurring_items.push(item);
        profile.touch();
        Ok(id)
    }

    pub fn set_amount(profile: &mut Profile, id: Uuid, amount: f64) -> Result<(), CoreError> {
        if !(amount > 0.0) {
            return Err(CoreError::InvalidInput(
                "recurring amount must be positive".into(),
            ));
        }
        let item = profile
            .recurring_item_mut(id)
            .ok_or(CoreError::ItemNotFound(id))?;
        item.amount = amount;
        profile.touch();
        Ok(())
    }

    /// Terminates an item by giving it an end date.
    pub fn close(profile: &mut Profile, id: Uuid, end_date: NaiveDate) -> Result<(), CoreError> {
        let item = profile
            .recurring_item_mut(id)
            .ok_or(CoreError::ItemNotFound(id))?;
        item.end_date = Some(end_date);
        profile.touch();
        Ok(())
    }

    pub fn remove(profile: &mut Profile, id: Uuid) -> Result<(), CoreError> {
        let before = profile.recurring_items.len();
        profile.recurring_items.retain(|item| item.id != id);
        if profile.recurring_items.len() == before {
            return Err(CoreError::ItemNotFound(id));
        }
        profile.touch();
        Ok(())
    }
}
