//! Presentation adapters around the calculator core
//!
//! Text input normalization, currency formatting and the telemetry sink live
//! here. The formulas and calculator states never call into this module.

mod currency;
mod input;
mod telemetry;

pub use currency::{format_currency, CurrencyFormat};
pub use input::{display_value, normalize_input};
pub use telemetry::{LogSink, NoopSink, TelemetrySink};
