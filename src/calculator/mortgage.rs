//! Mortgage refinance calculator: payment at the old rate vs the new rate

use super::{Calculator, InputField};
use crate::formulas::monthly_payment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MortgageField {
    Principal,
    TermYears,
    OldRatePercent,
    NewRatePercent,
}

impl InputField for MortgageField {
    const ALL: &'static [Self] = &[
        MortgageField::Principal,
        MortgageField::TermYears,
        MortgageField::OldRatePercent,
        MortgageField::NewRatePercent,
    ];

    fn key(self) -> &'static str {
        match self {
            MortgageField::Principal => "principal",
            MortgageField::TermYears => "years",
            MortgageField::OldRatePercent => "old_rate",
            MortgageField::NewRatePercent => "new_rate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInputs {
    /// Loan balance in dollars
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Remaining term in years
    #[serde(default = "default_term_years")]
    pub term_years: f64,

    /// Annual rate before the change, as a percentage
    #[serde(default = "default_old_rate")]
    pub old_rate_percent: f64,

    /// Annual rate after the change, as a percentage
    #[serde(default = "default_new_rate")]
    pub new_rate_percent: f64,
}

fn default_principal() -> f64 { 400_000.0 }
fn default_term_years() -> f64 { 30.0 }
fn default_old_rate() -> f64 { 6.63 }
fn default_new_rate() -> f64 { 6.58 }

impl Default for MortgageInputs {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            term_years: default_term_years(),
            old_rate_percent: default_old_rate(),
            new_rate_percent: default_new_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub old_monthly_payment: f64,
    pub new_monthly_payment: f64,
    /// old − new; positive when the new rate saves money
    pub delta: f64,
}

/// Marker type for the mortgage calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct Mortgage;

impl Calculator for Mortgage {
    const NAMESPACE: &'static str = "mortgage";

    type Field = MortgageField;
    type Inputs = MortgageInputs;
    type Outputs = MortgageResult;

    fn get(inputs: &MortgageInputs, field: MortgageField) -> f64 {
        match field {
            MortgageField::Principal => inputs.principal,
            MortgageField::TermYears => inputs.term_years,
            MortgageField::OldRatePercent => inputs.old_rate_percent,
            MortgageField::NewRatePercent => inputs.new_rate_percent,
        }
    }

    fn set(inputs: &mut MortgageInputs, field: MortgageField, value: f64) {
        match field {
            MortgageField::Principal => inputs.principal = value,
            MortgageField::TermYears => inputs.term_years = value,
            MortgageField::OldRatePercent => inputs.old_rate_percent = value,
            MortgageField::NewRatePercent => inputs.new_rate_percent = value,
        }
    }

    fn compute(inputs: &MortgageInputs) -> MortgageResult {
        let old_monthly_payment =
            monthly_payment(inputs.principal, inputs.old_rate_percent, inputs.term_years);
        let new_monthly_payment =
            monthly_payment(inputs.principal, inputs.new_rate_percent, inputs.term_years);
        MortgageResult {
            old_monthly_payment,
            new_monthly_payment,
            delta: old_monthly_payment - new_monthly_payment,
        }
    }
}
