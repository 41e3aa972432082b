//! Maintenance of a profile's asset holdings.

use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::domain::{starting_assets, AssetHolding, Profile};
use crate::errors::CoreError;

pub struct AssetService;

impl AssetService {
    pub fn add(
        profile: &mut Profile,
        name: impl Into<String>,
        amount: f64,
        currency: CurrencyCode,
    ) -> Result<Uuid, CoreError> {
        if !(amount >= 0.0) {
            return Err(CoreError::InvalidInput(
                "asset amount must be non-negative".into(),
            ));
        }
        let holding = AssetHolding::new(name, amount, currency);
        let id = holding.id;
        profile.assets.push(holding);
        profile.touch();
        Ok(id)
    }

    pub fn set_amount(profile: &mut Profile, id: Uuid, amount: f64) -> Result<(), CoreError> {
        if !(amount >= 0.0) {
            return Err(CoreError::InvalidInput(
                "asset amount must be non-negative".into(),
            ));
        }
        let holding = profile.asset_mut(id).ok_or(CoreError::AssetNotFound(id))?;
        holding.amount = amount;
        profile.touch();
        Ok(())
    }

    pub fn remove(profile: &mut Profile, id: Uuid) -> Result<(), CoreError> {
        let before = profile.assets.len();
        profile.assets.retain(|asset| asset.id != id);
        if profile.assets.len() == before {
            return Err(CoreError::AssetNotFound(id));
        }
        profile.touch();
        Ok(())
    }

    /// Opening balance for projections: holdings in the profile's base
    /// currency only.
    pub fn opening_balance(profile: &Profile) -> f64 {
        starting_assets(&profile.assets, &profile.base_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_balance_filters_by_base_currency() {
        let mut profile = Profile::new("Test", CurrencyCode::new("EUR"));
        AssetService::add(&mut profile, "Checking", 800.0, CurrencyCode::new("EUR")).unwrap();
        AssetService::add(&mut profile, "Cash", 200.0, CurrencyCode::new("EUR")).unwrap();
        AssetService::add(&mut profile, "Dollars", 5000.0, CurrencyCode::new("USD")).unwrap();
        assert_eq!(AssetService::opening_balance(&profile), 1000.0);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut profile = Profile::new("Test", CurrencyCode::default());
        let result = AssetService::add(&mut profile, "Bad", -1.0, CurrencyCode::default());
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
