//! Error types for the calculator core and its collaborators
//!
//! The formula functions themselves never fail. Errors come from the opt-in
//! validated formulas, field lookup by name, persistence, configuration and
//! export.

use thiserror::Error;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CalcError {
    /// A numeric argument is outside the domain accepted by a checked formula.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Field name not known to the given calculator.
    #[error("unknown field '{field}' for {calculator} calculator")]
    UnknownField {
        calculator: &'static str,
        field: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        CalcError::InvalidInput { field, value, reason }
    }
}
