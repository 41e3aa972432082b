//! Pure forward-looking calculations: the monthly cash-flow projection and
//! the debt payoff schedule. Neither performs I/O or touches persistence.

pub mod debt_schedule;
pub mod engine;

pub use debt_schedule::{DebtPayoff, DebtSchedule, PayoffPlan};
pub use engine::{MonthRecord, ProjectionEngine};
