use serde::{Deserialize, Serialize};

/// Annual growth rates applied while projecting, in whole percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectionSettings {
    /// Applied to expenses, compounding per elapsed year.
    #[serde(default = "ProjectionSettings::default_inflation_rate")]
    pub inflation_rate: f64,
    /// Applied to income, compounding per elapsed year.
    #[serde(default = "ProjectionSettings::default_salary_increase_rate")]
    pub salary_increase_rate: f64,
}

impl ProjectionSettings {
    pub fn new(inflation_rate: f64, salary_increase_rate: f64) -> Self {
        Self {
            inflation_rate,
            salary_increase_rate,
        }
    }

    pub fn default_inflation_rate() -> f64 {
        25.0
    }

    pub fn default_salary_increase_rate() -> f64 {
        15.0
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            inflation_rate: Self::default_inflation_rate(),
            salary_increase_rate: Self::default_salary_increase_rate(),
        }
    }
}
