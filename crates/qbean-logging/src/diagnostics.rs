//! Diagnostic sinks backed by tracing or memory

use parking_lot::Mutex;
use qbean_core::{Diagnostics, LogLevel};

/// Reports diagnostics as tracing events carrying an `entity` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn info(&self, entity: Option<&str>, message: &str) {
        match entity {
            Some(entity) => tracing::info!(entity, "{message}"),
            None => tracing::info!("{message}"),
        }
    }

    fn warn(&self, entity: Option<&str>, message: &str) {
        match entity {
            Some(entity) => tracing::warn!(entity, "{message}"),
            None => tracing::warn!("{message}"),
        }
    }

    fn error(&self, entity: Option<&str>, message: &str) {
        match entity {
            Some(entity) => tracing::error!(entity, "{message}"),
            None => tracing::error!("{message}"),
        }
    }
}

/// One collected diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    pub level: LogLevel,
    pub entity: Option<String>,
    pub message: String,
}

/// In-memory diagnostic sink.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<Collected>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Collected> {
        self.entries.lock().clone()
    }

    /// Messages at `level`, in order.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn push(&self, level: LogLevel, entity: Option<&str>, message: &str) {
        self.entries.lock().push(Collected {
            level,
            entity: entity.map(str::to_string),
            message: message.to_string(),
        });
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn info(&self, entity: Option<&str>, message: &str) {
        self.push(LogLevel::Info, entity, message);
    }

    fn warn(&self, entity: Option<&str>, message: &str) {
        self.push(LogLevel::Warn, entity, message);
    }

    fn error(&self, entity: Option<&str>, message: &str) {
        self.push(LogLevel::Error, entity, message);
    }
}
