//! CSV export of profile summaries

use super::ProfileSummary;
use crate::error::Result;
use crate::present::display_value;
use chrono::NaiveDate;
use std::io::Write;

pub const CSV_HEADER: [&str; 4] = ["Profile", "Mortgage Delta", "Student Interest", "Gas Impact"];

/// Write a header row and one row per summary.
///
/// Amounts are written with exactly two decimals; NaN and infinities are
/// written as `0.00`, matching what the calculators display.
pub fn write_csv<W: Write>(writer: W, summaries: &[ProfileSummary]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for summary in summaries {
        csv.write_record([
            summary.name.clone(),
            two_decimals(summary.impact.mortgage_delta),
            two_decimals(summary.impact.student_interest),
            two_decimals(summary.impact.gas_impact),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(summaries: &[ProfileSummary]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, summaries)?;
    // csv only ever writes the UTF-8 text it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Default download name, e.g. `rate-impact-profiles-2026-10-19.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("rate-impact-profiles-{}.csv", date.format("%Y-%m-%d"))
}

/// Two-decimal text; negative zero and negatives that round to zero print
/// as `0.00`
fn two_decimals(value: f64) -> String {
    let text = format!("{:.2}", display_value(value));
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}
