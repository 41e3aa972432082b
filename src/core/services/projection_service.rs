//! Composition root for the pure engines: resolves clock, settings, and
//! opening balance from a profile, then delegates to `projection`.

use crate::currency::LocaleConfig;
use crate::domain::Profile;
use crate::projection::{DebtSchedule, MonthRecord, PayoffPlan, ProjectionEngine};
use crate::time::{first_of_month, Clock};

use super::AssetService;

pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

pub struct ProjectionService;

impl ProjectionService {
    /// Month-by-month outlook for the profile, anchored to the first day of
    /// the clock's current month.
    pub fn monthly_outlook(
        profile: &Profile,
        horizon_months: u32,
        clock: &dyn Clock,
        locale: &LocaleConfig,
    ) -> Vec<MonthRecord> {
        let reference = first_of_month(clock.today());
        ProjectionEngine::project(
            AssetService::opening_balance(profile),
            &profile.recurring_items,
            &profile.settings,
            horizon_months,
            reference,
            locale,
        )
    }

    /// Payoff schedule for the profile's debts, measured from today.
    pub fn payoff_plan(profile: &Profile, clock: &dyn Clock) -> PayoffPlan {
        DebtSchedule::derive(&profile.debts, clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn outlook_is_anchored_to_month_start() {
        let profile = Profile::new("Test", CurrencyCode::default());
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 7, 23, 10, 0, 0).unwrap());
        let records =
            ProjectionService::monthly_outlook(&profile, 3, &clock, &LocaleConfig::default());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].month_key, "2025-07");
        assert_eq!(records[2].month_key, "2025-09");
    }

    #[test]
    fn payoff_plan_uses_clock_today() {
        let mut profile = Profile::new("Test", CurrencyCode::default());
        crate::core::DebtService::add(&mut profile, "Loan", 600.0, 200.0).unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap());
        let plan = ProjectionService::payoff_plan(&profile, &clock);
        assert_eq!(
            plan.debt_free_date,
            Some(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())
        );
    }
}
