use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Debt;
use crate::time::add_months;

/// Payoff outlook for a single debt. `months_remaining` is `None` when the
/// monthly payment is zero or negative and the balance can never retire.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtPayoff {
    pub debt_id: Uuid,
    pub name: String,
    pub balance: f64,
    pub monthly_payment: f64,
    pub months_remaining: Option<u32>,
    pub payoff_date: Option<NaiveDate>,
}

/// Aggregate payoff schedule across all debts.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffPlan {
    pub total_balance: f64,
    pub total_monthly_payment: f64,
    pub entries: Vec<DebtPayoff>,
    /// The date the last bounded debt retires. `None` when no debt has a
    /// bounded payoff; unbounded debts never push this out.
    pub debt_free_date: Option<NaiveDate>,
}

pub struct DebtSchedule;

impl DebtSchedule {
    pub fn derive(debts: &[Debt], reference: NaiveDate) -> PayoffPlan {
        let mut entries = Vec::with_capacity(debts.len());
        let mut total_balance = 0.0;
        let mut total_monthly_payment = 0.0;
        let mut debt_free_date: Option<NaiveDate> = None;

        for debt in debts {
            total_balance += debt.balance;
            total_monthly_payment += debt.monthly_payment;

            let months_remaining = months_to_retire(debt.balance, debt.monthly_payment);
            let payoff_date =
                months_remaining.map(|months| add_months(reference, months as i32));
            if let Some(date) = payoff_date {
                debt_free_date = Some(match debt_free_date {
                    Some(current) if current >= date => current,
                    _ => date,
                });
            }

            entries.push(DebtPayoff {
                debt_id: debt.id,
                name: debt.name.clone(),
                balance: debt.balance,
                monthly_payment: debt.monthly_payment,
                months_remaining,
                payoff_date,
            });
        }

        PayoffPlan {
            total_balance,
            total_monthly_payment,
            entries,
            debt_free_date,
        }
    }
}

/// Whole months until the balance reaches zero under the fixed payment.
/// A non-positive payment can never retire a positive balance.
fn months_to_retire(balance: f64, monthly_payment: f64) -> Option<u32> {
    if balance <= 0.0 {
        return Some(0);
    }
    if monthly_payment <= 0.0 {
        return None;
    }
    Some((balance / monthly_payment).ceil() as u32)
}
