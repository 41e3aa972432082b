use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;

use super::{AssetHolding, Board, Debt, ProjectionSettings, RecurringItem};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Per-user snapshot consumed by the projection and payoff engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub base_currency: CurrencyCode,
    #[serde(default)]
    pub settings: ProjectionSettings,
    #[serde(default)]
    pub recurring_items: Vec<RecurringItem>,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub boards: Vec<Board>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Profile::schema_version_default")]
    pub schema_version: u8,
}

impl Profile {
    pub fn new(name: impl Into<String>, base_currency: CurrencyCode) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            base_currency,
            settings: ProjectionSettings::default(),
            recurring_items: Vec::new(),
            assets: Vec::new(),
            debts: Vec::new(),
            boards: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn recurring_item_mut(&mut self, id: Uuid) -> Option<&mut RecurringItem> {
        self.recurring_items.iter_mut().find(|item| item.id == id)
    }

    pub fn asset_mut(&mut self, id: Uuid) -> Option<&mut AssetHolding> {
        self.assets.iter_mut().find(|asset| asset.id == id)
    }

    pub fn debt_mut(&mut self, id: Uuid) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|debt| debt.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
