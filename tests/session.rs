//! Session behavior against a real state file

use approx::assert_abs_diff_eq;
use rate_impact::calculator::{
    Gas, GasField, Mortgage, MortgageField, MortgageInputs, StudentLoanField,
};
use rate_impact::present::{format_currency, normalize_input};
use rate_impact::profile::{to_csv_string, Profile, ProfileBook};
use rate_impact::storage::JsonFileStore;
use rate_impact::{Calculator, CalculatorSession};
use std::sync::Arc;

fn open_session(path: &std::path::Path) -> CalculatorSession {
    let store = JsonFileStore::open(path).expect("open state file");
    CalculatorSession::restore(Arc::new(store))
}

#[test]
fn test_inputs_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = open_session(&path);
    session.mortgage.set_input(MortgageField::Principal, normalize_input("350000"));
    session.mortgage.set_input(MortgageField::NewRatePercent, normalize_input("5.875"));
    session.student_loan.set_input(StudentLoanField::RatePercent, 4.99);
    session.gas.set_input(GasField::PriceDeltaPerGallon, normalize_input("-0.15"));
    let before = session.summary();
    drop(session);

    let reloaded = open_session(&path);
    assert_eq!(reloaded.summary(), before);
    assert_eq!(reloaded.mortgage.inputs().new_rate_percent, 5.875);
}

#[test]
fn test_absent_keys_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let session = open_session(&dir.path().join("state.json"));
    assert_eq!(session.mortgage.inputs(), &MortgageInputs::default());
    assert_eq!(session.summary(), CalculatorSession::new().summary());
}

#[test]
fn test_reset_after_edits_matches_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = open_session(&path);
    session.mortgage.set_input(MortgageField::TermYears, 15.0);
    session.gas.set_input(GasField::GallonsPerMonth, 0.0);
    session.mortgage.reset();

    let expected = Mortgage::compute(&MortgageInputs {
        principal: 400_000.0,
        term_years: 30.0,
        old_rate_percent: 6.63,
        new_rate_percent: 6.58,
    });
    assert_eq!(session.mortgage.outputs(), &expected);
    // gas was not reset
    assert_eq!(session.gas.outputs().monthly_impact, 0.0);

    let reloaded = open_session(&path);
    assert_eq!(reloaded.mortgage.outputs(), &expected);
}

#[test]
fn test_bad_entry_displays_as_zero() {
    let mut session = CalculatorSession::new();
    session.gas.set_input(GasField::GallonsPerMonth, normalize_input("sixty"));
    assert_eq!(format_currency(session.gas.outputs().monthly_impact), "$0.00");

    session.gas.set_input(GasField::GallonsPerMonth, f64::NAN);
    assert!(session.gas.outputs().monthly_impact.is_nan());
    assert_eq!(format_currency(session.gas.outputs().monthly_impact), "$0.00");
}

#[test]
fn test_profiles_export() {
    let mut session = CalculatorSession::new();
    let mut book = ProfileBook::new();
    book.upsert(Profile::capture("Today", &session));

    session.mortgage.set_input(MortgageField::OldRatePercent, 0.0);
    session.mortgage.set_input(MortgageField::NewRatePercent, 0.0);
    session.gas.set_input(GasField::PriceDeltaPerGallon, -0.25);
    book.upsert(Profile::capture("Zero rate", &session));

    let summaries = book.summaries();
    assert_abs_diff_eq!(summaries[0].impact.mortgage_delta, 13.21, epsilon = 0.01);
    assert_eq!(summaries[1].impact.mortgage_delta, 0.0);
    assert_eq!(summaries[1].impact.gas_impact, Gas::compute(session.gas.inputs()).monthly_impact);

    let csv = to_csv_string(&summaries).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Profile,Mortgage Delta,Student Interest,Gas Impact");
    assert_eq!(lines[1], "Today,13.21,91.67,6.00");
    assert_eq!(lines[2], "Zero rate,0.00,91.67,-15.00");
}
