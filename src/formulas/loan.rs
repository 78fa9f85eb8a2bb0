//! Loan payment and interest formulas

use super::{monthly_rate, MONTHS_PER_YEAR};
use crate::error::{CalcError, Result};

/// Fixed monthly payment for a fully amortizing loan.
///
/// With r = monthly periodic rate and n = number of monthly periods:
/// - n = 0 or principal ≤ 0 → 0
/// - r = 0 → straight-line repayment, principal / n
/// - otherwise principal × r / (1 − (1+r)^−n)
///
/// The discount term is evaluated as `-expm1(-n × ln1p(r))`, which stays
/// accurate when r is tiny (tends to principal / n) and when n is huge
/// (tends to principal × r) instead of overflowing or cancelling to zero.
///
/// # Arguments
/// * `principal` - Loan amount in currency units
/// * `annual_rate_percent` - Nominal annual rate as a percentage (6.5 = 6.5%)
/// * `term_years` - Loan term in years
///
/// # Returns
/// Monthly payment; finite and non-negative for any finite non-negative input.
/// Negative inputs are not guarded, see [`checked_monthly_payment`].
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    let r = monthly_rate(annual_rate_percent);
    let n = term_years * MONTHS_PER_YEAR;

    if n == 0.0 || principal <= 0.0 {
        return 0.0;
    }

    if r == 0.0 {
        return principal / n;
    }

    let discount = -(-n * r.ln_1p()).exp_m1();
    if discount == 0.0 {
        // n × r underflowed; the straight-line limit is exact here
        return principal / n;
    }
    principal * (r / discount)
}

/// Simple (non-compounding) interest accrued on a balance in one month.
///
/// Daily and yearly figures are derived by the caller as `/ 30` and `× 12`.
pub fn monthly_interest(balance: f64, annual_rate_percent: f64) -> f64 {
    balance * (annual_rate_percent / 100.0) / MONTHS_PER_YEAR
}

/// [`monthly_payment`] with domain validation.
///
/// Rejects negative or non-finite arguments instead of computing on them.
/// This is stricter than the calculators, which accept whatever was entered.
pub fn checked_monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<f64> {
    non_negative("principal", principal)?;
    non_negative("annual_rate_percent", annual_rate_percent)?;
    non_negative("term_years", term_years)?;
    Ok(monthly_payment(principal, annual_rate_percent, term_years))
}

/// [`monthly_interest`] with domain validation.
pub fn checked_monthly_interest(balance: f64, annual_rate_percent: f64) -> Result<f64> {
    non_negative("balance", balance)?;
    non_negative("annual_rate_percent", annual_rate_percent)?;
    Ok(monthly_interest(balance, annual_rate_percent))
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, value, "must not be negative"));
    }
    Ok(())
}
