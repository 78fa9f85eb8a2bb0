//! Telemetry sink for user actions (reset, export, profile saves)
//!
//! Front ends hold a sink and report what the user did. Nothing in the
//! formulas or calculator states takes a sink.

use serde_json::{Map, Value};

pub trait TelemetrySink: Send + Sync {
    fn track(&self, event: &str, params: &Map<String, Value>);
}

/// Writes events to the `telemetry` log target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn track(&self, event: &str, params: &Map<String, Value>) {
        log::info!(target: "telemetry", "{event} {}", Value::Object(params.clone()));
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn track(&self, _event: &str, _params: &Map<String, Value>) {}
}
