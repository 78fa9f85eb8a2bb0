//! Student loan interest calculator

use super::{Calculator, InputField};
use crate::formulas::{monthly_interest, DAYS_PER_MONTH, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentLoanField {
    Balance,
    RatePercent,
}

impl InputField for StudentLoanField {
    const ALL: &'static [Self] = &[StudentLoanField::Balance, StudentLoanField::RatePercent];

    fn key(self) -> &'static str {
        match self {
            StudentLoanField::Balance => "balance",
            StudentLoanField::RatePercent => "rate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentLoanInputs {
    #[serde(default = "default_balance")]
    pub balance: f64,

    /// Annual rate as a percentage
    #[serde(default = "default_rate")]
    pub rate_percent: f64,
}

fn default_balance() -> f64 { 20_000.0 }
fn default_rate() -> f64 { 5.5 }

impl Default for StudentLoanInputs {
    fn default() -> Self {
        Self {
            balance: default_balance(),
            rate_percent: default_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentLoanResult {
    pub monthly_interest: f64,
    /// monthly / 30, a flat month rather than calendar days
    pub daily_interest: f64,
    /// monthly × 12
    pub yearly_interest: f64,
}

/// Marker type for the student loan calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentLoan;

impl Calculator for StudentLoan {
    const NAMESPACE: &'static str = "student_loan";

    type Field = StudentLoanField;
    type Inputs = StudentLoanInputs;
    type Outputs = StudentLoanResult;

    fn get(inputs: &StudentLoanInputs, field: StudentLoanField) -> f64 {
        match field {
            StudentLoanField::Balance => inputs.balance,
            StudentLoanField::RatePercent => inputs.rate_percent,
        }
    }

    fn set(inputs: &mut StudentLoanInputs, field: StudentLoanField, value: f64) {
        match field {
            StudentLoanField::Balance => inputs.balance = value,
            StudentLoanField::RatePercent => inputs.rate_percent = value,
        }
    }

    fn compute(inputs: &StudentLoanInputs) -> StudentLoanResult {
        let monthly = monthly_interest(inputs.balance, inputs.rate_percent);
        StudentLoanResult {
            monthly_interest: monthly,
            daily_interest: monthly / DAYS_PER_MONTH,
            yearly_interest: monthly * MONTHS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_interest() {
        let result = StudentLoan::compute(&StudentLoanInputs::default());
        assert_abs_diff_eq!(result.monthly_interest, 91.67, epsilon = 0.01);
        assert_abs_diff_eq!(result.daily_interest, 3.06, epsilon = 0.01);
        assert_abs_diff_eq!(result.yearly_interest, 1100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_daily_uses_thirty_day_month() {
        let inputs = StudentLoanInputs {
            balance: 36_000.0,
            rate_percent: 10.0,
        };
        let result = StudentLoan::compute(&inputs);
        // 36000 × 10% / 12 = 300 per month, 10 per day
        assert_abs_diff_eq!(result.monthly_interest, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.daily_interest, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.yearly_interest, 3600.0, epsilon = 1e-9);
    }
}
