use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;

/// A current holding contributing to the opening balance of a projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetHolding {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub currency: CurrencyCode,
}

impl AssetHolding {
    pub fn new(name: impl Into<String>, amount: f64, currency: CurrencyCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            currency,
        }
    }
}

/// Sums holdings denominated in `base`. Holdings in any other currency are
/// excluded outright; no conversion is attempted.
pub fn starting_assets(holdings: &[AssetHolding], base: &CurrencyCode) -> f64 {
    holdings
        .iter()
        .filter(|holding| holding.currency == *base)
        .map(|holding| holding.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_currencies_are_excluded() {
        let base = CurrencyCode::new("USD");
        let holdings = vec![
            AssetHolding::new("Checking", 1500.0, CurrencyCode::new("USD")),
            AssetHolding::new("Savings", 2500.0, CurrencyCode::new("usd")),
            AssetHolding::new("Euro account", 900.0, CurrencyCode::new("EUR")),
        ];
        assert_eq!(starting_assets(&holdings, &base), 4000.0);
    }

    #[test]
    fn empty_holdings_sum_to_zero() {
        assert_eq!(starting_assets(&[], &CurrencyCode::default()), 0.0);
    }
}
