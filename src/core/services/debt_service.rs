//! Maintenance of a profile's debts.

use uuid::Uuid;

use crate::domain::{Debt, Profile};
use crate::errors::CoreError;

pub struct DebtService;

impl DebtService {
    /// Adds a debt. A zero monthly payment is legal; the payoff deriver
    /// reports such a debt as unbounded instead of dividing by it.
    pub fn add(
        profile: &mut Profile,
        name: impl Into<String>,
        balance: f64,
        monthly_payment: f64,
    ) -> Result<Uuid, CoreError> {
        if !(balance >= 0.0) {
            return Err(CoreError::InvalidInput(
                "debt balance must be non-negative".into(),
            ));
        }
        if !(monthly_payment >= 0.0) {
            return Err(CoreError::InvalidInput(
                "monthly payment must be non-negative".into(),
            ));
        }
        let debt = Debt::new(name, balance, monthly_payment);
        let id = debt.id;
        profile.debts.push(debt);
        profile.touch();
        Ok(id)
    }

    pub fn set_payment(
        profile: &mut Profile,
        id: Uuid,
        monthly_payment: f64,
    ) -> Result<(), CoreError> {
        if !(monthly_payment >= 0.0) {
            return Err(CoreError::InvalidInput(
                "monthly payment must be non-negative".into(),
            ));
        }
        let debt = profile.debt_mut(id).ok_or(CoreError::DebtNotFound(id))?;
        debt.monthly_payment = monthly_payment;
        profile.touch();
        Ok(())
    }

    pub fn record_payment(profile: &mut Profile, id: Uuid, amount: f64) -> Result<(), CoreError> {
        if !(amount > 0.0) {
            return Err(CoreError::InvalidInput(
                "payment amount must be positive".into(),
            ));
        }
        let debt = profile.debt_mut(id).ok_or(CoreError::DebtNotFound(id))?;
        debt.balance = (debt.balance - amount).max(0.0);
        profile.touch();
        Ok(())
    }

    pub fn remove(profile: &mut Profile, id: Uuid) -> Result<(), CoreError> {
        let before = profile.debts.len();
        profile.debts.retain(|debt| debt.id != id);
        if profile.debts.len() == before {
            return Err(CoreError::DebtNotFound(id));
        }
        profile.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;

    #[test]
    fn record_payment_floors_balance_at_zero() {
        let mut profile = Profile::new("Test", CurrencyCode::default());
        let id = DebtService::add(&mut profile, "Card", 120.0, 50.0).unwrap();
        DebtService::record_payment(&mut profile, id, 200.0).unwrap();
        assert_eq!(profile.debt_mut(id).unwrap().balance, 0.0);
    }

    #[test]
    fn zero_payment_is_accepted() {
        let mut profile = Profile::new("Test", CurrencyCode::default());
        assert!(DebtService::add(&mut profile, "Frozen loan", 900.0, 0.0).is_ok());
    }
}
