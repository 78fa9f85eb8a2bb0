//! Named profiles: saved inputs for all three calculators
//!
//! A profile book is a JSON array of profiles on disk. Summaries of every
//! profile feed the CSV export.

mod export;

pub use export::{export_file_name, to_csv_string, write_csv, CSV_HEADER};

use crate::calculator::{
    CalculatorSession, GasCalculator, GasInputs, ImpactSummary, MortgageCalculator,
    MortgageInputs, StudentLoanCalculator, StudentLoanInputs,
};
use crate::error::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    #[serde(default)]
    pub mortgage: MortgageInputs,

    #[serde(default)]
    pub student_loan: StudentLoanInputs,

    #[serde(default)]
    pub gas: GasInputs,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Profile on documented defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mortgage: MortgageInputs::default(),
            student_loan: StudentLoanInputs::default(),
            gas: GasInputs::default(),
            saved_at: None,
        }
    }

    /// Snapshot the current inputs of a session
    pub fn capture(name: impl Into<String>, session: &CalculatorSession) -> Self {
        Self {
            name: name.into(),
            mortgage: session.mortgage.inputs().clone(),
            student_loan: session.student_loan.inputs().clone(),
            gas: session.gas.inputs().clone(),
            saved_at: Some(Utc::now()),
        }
    }

    /// Load this profile's inputs into a session (persisted if the session is)
    pub fn apply_to(&self, session: &mut CalculatorSession) {
        session.mortgage.replace_inputs(self.mortgage.clone());
        session.student_loan.replace_inputs(self.student_loan.clone());
        session.gas.replace_inputs(self.gas.clone());
    }

    pub fn summary(&self) -> ProfileSummary {
        let session = CalculatorSession {
            mortgage: MortgageCalculator::with_inputs(self.mortgage.clone()),
            student_loan: StudentLoanCalculator::with_inputs(self.student_loan.clone()),
            gas: GasCalculator::with_inputs(self.gas.clone()),
        };
        ProfileSummary {
            name: self.name.clone(),
            impact: session.summary(),
        }
    }
}

/// One export row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    #[serde(flatten)]
    pub impact: ImpactSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileBook {
    profiles: Vec<Profile>,
}

impl ProfileBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file; a missing file is an empty book
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let book = Self::from_reader(BufReader::new(file))?;
                log::debug!("loaded {} profiles from {}", book.len(), path.display());
                Ok(book)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Add a profile, replacing any existing one with the same name
    pub fn upsert(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        let idx = self.profiles.iter().position(|p| p.name == name)?;
        Some(self.profiles.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Evaluate every profile, in book order
    pub fn summaries(&self) -> Vec<ProfileSummary> {
        self.profiles.par_iter().map(Profile::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::GasField;

    #[test]
    fn test_partial_profile_json() {
        let json = r#"[
            {"name": "Default"},
            {"name": "Commuter", "gas": {"gallons_per_month": 90}}
        ]"#;
        let book = ProfileBook::from_reader(json.as_bytes()).unwrap();
        assert_eq!(book.len(), 2);

        let commuter = book.get("Commuter").unwrap();
        assert_eq!(commuter.gas.gallons_per_month, 90.0);
        assert_eq!(commuter.gas.price_delta_per_gallon, 0.10);
        assert_eq!(commuter.mortgage, MortgageInputs::default());
        assert!(commuter.saved_at.is_none());
    }

    #[test]
    fn test_summaries_keep_order() {
        let mut book = ProfileBook::new();
        for gallons in [10.0, 20.0, 30.0, 40.0] {
            let mut profile = Profile::new(format!("g{gallons}"));
            profile.gas.gallons_per_month = gallons;
            book.upsert(profile);
        }

        let summaries = book.summaries();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["g10", "g20", "g30", "g40"]);
        assert!((summaries[3].impact.gas_impact - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut book = ProfileBook::new();
        book.upsert(Profile::new("Home"));
        let mut updated = Profile::new("Home");
        updated.mortgage.principal = 320_000.0;
        book.upsert(updated);

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Home").unwrap().mortgage.principal, 320_000.0);
        assert!(book.remove("Home").is_some());
        assert!(book.remove("Home").is_none());
    }

    #[test]
    fn test_capture_and_apply() {
        let mut session = CalculatorSession::new();
        session.gas.set_input(GasField::PriceDeltaPerGallon, -0.20);
        let profile = Profile::capture("Cheaper gas", &session);
        assert!(profile.saved_at.is_some());
        assert_eq!(profile.summary().impact, session.summary());

        let mut other = CalculatorSession::new();
        profile.apply_to(&mut other);
        assert_eq!(other.gas.inputs().price_delta_per_gallon, -0.20);
        assert_eq!(other.summary(), session.summary());
    }

    #[test]
    fn test_book_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        assert!(ProfileBook::load(&path).unwrap().is_empty());

        let mut book = ProfileBook::new();
        book.upsert(Profile::capture("Now", &CalculatorSession::new()));
        book.save(&path).unwrap();

        let loaded = ProfileBook::load(&path).unwrap();
        assert_eq!(loaded, book);
    }
}
