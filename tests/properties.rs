//! Property tests for the formulas and derived outputs

use proptest::prelude::*;
use rate_impact::calculator::{StudentLoan, StudentLoanInputs};
use rate_impact::formulas::{gas_impact, monthly_interest, monthly_payment};
use rate_impact::Calculator;

/// Annual rates from zero through tiny positive values up to ordinary ones.
fn any_rate() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0_f64),
        0.0_f64..30.0,
        1e-300_f64..1e-10,
        Just(f64::MIN_POSITIVE),
        Just(1e-310_f64),
    ]
}

/// Terms in years, whole or fractional, up to a millennium.
fn any_term() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u32..=1000).prop_map(f64::from),
        0.0_f64..1000.0,
    ]
}

proptest! {
    /// Finite, non-negative payment for any non-negative input.
    #[test]
    fn payment_is_finite_and_non_negative(
        principal in 0.0_f64..10_000_000.0,
        rate in any_rate(),
        years in any_term(),
    ) {
        let payment = monthly_payment(principal, rate, years);
        prop_assert!(payment.is_finite(), "payment {} for rate {} over {} years", payment, rate, years);
        prop_assert!(payment >= 0.0);
    }

    #[test]
    fn zero_term_or_principal_pays_nothing(
        principal in 0.0_f64..10_000_000.0,
        rate in any_rate(),
        years in any_term(),
    ) {
        prop_assert_eq!(monthly_payment(principal, rate, 0.0), 0.0);
        prop_assert_eq!(monthly_payment(0.0, rate, years), 0.0);
    }

    #[test]
    fn zero_rate_is_straight_line(principal in 1.0_f64..10_000_000.0, years in 1u32..=50) {
        let expected = principal / (years as f64 * 12.0);
        let payment = monthly_payment(principal, 0.0, years as f64);
        prop_assert!((payment - expected).abs() <= expected * 1e-12);
    }

    /// The payment repays at least the principal over the term.
    #[test]
    fn payment_covers_principal(
        principal in 1.0_f64..10_000_000.0,
        rate in 0.0_f64..30.0,
        years in 1u32..=50,
    ) {
        let n = years as f64 * 12.0;
        let payment = monthly_payment(principal, rate, years as f64);
        prop_assert!(payment * n >= principal * (1.0 - 1e-6));
    }

    #[test]
    fn student_loan_derivations(balance in 0.0_f64..500_000.0, rate in 0.0_f64..20.0) {
        let result = StudentLoan::compute(&StudentLoanInputs { balance, rate_percent: rate });
        let monthly = monthly_interest(balance, rate);
        prop_assert_eq!(result.monthly_interest, monthly);
        prop_assert!((result.daily_interest - monthly / 30.0).abs() <= 1e-9);
        prop_assert!((result.yearly_interest - monthly * 12.0).abs() <= 1e-9);
    }

    #[test]
    fn gas_impact_is_product(gallons in 0.0_f64..1_000.0, delta in -5.0_f64..5.0) {
        let impact = gas_impact(gallons, delta);
        prop_assert_eq!(impact, gallons * delta);
        if delta < 0.0 && gallons > 0.0 {
            prop_assert!(impact < 0.0);
        }
    }

    #[test]
    fn formulas_are_deterministic(
        principal in 0.0_f64..1_000_000.0,
        rate in 0.0_f64..20.0,
        years in 0u32..=40,
    ) {
        let years = years as f64;
        prop_assert_eq!(
            monthly_payment(principal, rate, years).to_bits(),
            monthly_payment(principal, rate, years).to_bits()
        );
        prop_assert_eq!(
            monthly_interest(principal, rate).to_bits(),
            monthly_interest(principal, rate).to_bits()
        );
    }
}
