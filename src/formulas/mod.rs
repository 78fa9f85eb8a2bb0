//! Closed-form formulas behind the calculators
//!
//! Every function here is pure: no I/O, no hidden state, and no validation.
//! NaN and infinities propagate per IEEE-754; guarding for display happens in
//! the presentation layer.

mod fuel;
mod loan;

pub use fuel::gas_impact;
pub use loan::{
    checked_monthly_interest, checked_monthly_payment, monthly_interest, monthly_payment,
};

// ============================================================================
// Period Conventions
// ============================================================================
// Rates are quoted as annual percentages (6.5 means 6.5%) and converted to a
// monthly periodic rate by dividing by 12. Daily figures use a flat 30-day
// month, never a calendar day count.

/// Number of monthly periods in a year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Days in the fixed month used for daily interest figures
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Convert an annual percentage rate to the monthly periodic rate
/// (6.0 → 0.005).
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR
}
