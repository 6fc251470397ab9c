//! Captured console output.
//!
//! Transforms cannot write to the host's stdout; `console.*` calls append
//! structured entries to the evaluation context instead, and the caller
//! decides how to surface them.

use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Log => "log",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleEntry {
    pub level: LogLevel,
    /// Evaluated arguments, in call order.
    pub args: Vec<Value>,
    /// Milliseconds since the Unix epoch at capture time.
    pub timestamp_ms: u64,
}

impl ConsoleEntry {
    pub fn new(level: LogLevel, args: Vec<Value>) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        ConsoleEntry {
            level,
            args,
            timestamp_ms,
        }
    }

    /// Space-joined human-readable rendering of the arguments.
    pub fn message(&self) -> String {
        self.args
            .iter()
            .map(format_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Renders one console argument: strings bare, containers as pretty JSON,
/// other scalars via their display form.
pub fn format_arg(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(arg).unwrap_or_else(|_| arg.to_string())
        }
        other => other.to_string(),
    }
}
