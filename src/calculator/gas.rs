//! Fuel cost impact calculator

use super::{Calculator, InputField};
use crate::formulas::gas_impact;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasField {
    GallonsPerMonth,
    PriceDeltaPerGallon,
}

impl InputField for GasField {
    const ALL: &'static [Self] = &[GasField::GallonsPerMonth, GasField::PriceDeltaPerGallon];

    fn key(self) -> &'static str {
        match self {
            GasField::GallonsPerMonth => "gallons",
            GasField::PriceDeltaPerGallon => "delta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasInputs {
    #[serde(default = "default_gallons")]
    pub gallons_per_month: f64,

    /// Change in price per gallon; negative for a drop
    #[serde(default = "default_delta")]
    pub price_delta_per_gallon: f64,
}

fn default_gallons() -> f64 { 60.0 }
fn default_delta() -> f64 { 0.10 }

impl Default for GasInputs {
    fn default() -> Self {
        Self {
            gallons_per_month: default_gallons(),
            price_delta_per_gallon: default_delta(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasResult {
    pub monthly_impact: f64,
}

/// Marker type for the fuel cost calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct Gas;

impl Calculator for Gas {
    const NAMESPACE: &'static str = "gas";

    type Field = GasField;
    type Inputs = GasInputs;
    type Outputs = GasResult;

    fn get(inputs: &GasInputs, field: GasField) -> f64 {
        match field {
            GasField::GallonsPerMonth => inputs.gallons_per_month,
            GasField::PriceDeltaPerGallon => inputs.price_delta_per_gallon,
        }
    }

    fn set(inputs: &mut GasInputs, field: GasField, value: f64) {
        match field {
            GasField::GallonsPerMonth => inputs.gallons_per_month = value,
            GasField::PriceDeltaPerGallon => inputs.price_delta_per_gallon = value,
        }
    }

    fn compute(inputs: &GasInputs) -> GasResult {
        GasResult {
            monthly_impact: gas_impact(inputs.gallons_per_month, inputs.price_delta_per_gallon),
        }
    }
}
