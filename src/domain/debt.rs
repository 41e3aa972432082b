use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outstanding liability with a fixed monthly payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    /// Remaining principal, in the profile's base currency.
    pub balance: f64,
    pub monthly_payment: f64,
}

impl Debt {
    pub fn new(name: impl Into<String>, balance: f64, monthly_payment: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            monthly_payment,
        }
    }
}
