//! Application configuration for the front ends
//!
//! A JSON file where every field is optional:
//!
//! ```json
//! { "store_path": "state.json", "currency_symbol": "$", "telemetry": true }
//! ```

use crate::error::{CalcError, Result};
use crate::present::CurrencyFormat;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where calculator inputs are persisted
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Saved profiles used by the CSV export
    #[serde(default = "default_profiles_path")]
    pub profiles_path: PathBuf,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Report user actions to the telemetry log target
    #[serde(default)]
    pub telemetry: bool,
}

fn default_store_path() -> PathBuf { PathBuf::from("calculator_state.json") }
fn default_profiles_path() -> PathBuf { PathBuf::from("profiles.json") }
fn default_currency_symbol() -> String { "$".to_string() }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            profiles_path: default_profiles_path(),
            currency_symbol: default_currency_symbol(),
            telemetry: false,
        }
    }
}

impl AppConfig {
    /// Defaults when no path is given; a named file must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path)
            .map_err(|e| CalcError::Config(format!("cannot open {}: {e}", path.display())))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| CalcError::Config(format!("cannot parse {}: {e}", path.display())))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone())
    }
}
