//! Household rate-impact calculators
//!
//! Three small estimators behind one widget:
//! - **Mortgage**: monthly payment at an old vs a new rate, and the difference
//! - **Student loan**: simple monthly interest, with daily and yearly figures
//! - **Gas**: monthly cost change from a per-gallon price move
//!
//! Data flows one way: raw inputs → [`formulas`] → [`calculator`] outputs →
//! [`present`] formatting and [`profile`] CSV export. Inputs are optionally
//! persisted through a [`storage::KeyValueStore`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod formulas;
pub mod present;
pub mod profile;
pub mod storage;

pub use calculator::{
    Calculator, CalculatorSession, CalculatorState, GasCalculator, ImpactSummary, InputField,
    MortgageCalculator, StudentLoanCalculator,
};
pub use config::AppConfig;
pub use error::{CalcError, Result};
pub use formulas::{gas_impact, monthly_interest, monthly_payment};
