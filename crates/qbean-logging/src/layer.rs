//! Tracing layer that records diagnostics

use parking_lot::Mutex;
use qbean_core::LogLevel;
use std::sync::{Arc, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// One warning or error seen by a [`DiagnosticLayer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub level: LogLevel,
    pub entity: Option<String>,
    pub message: String,
}

/// Shared log of warning and error events.
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    records: Arc<Mutex<Vec<DiagnosticRecord>>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: DiagnosticRecord) {
        self.records.lock().push(record);
    }

    pub fn warnings(&self) -> usize {
        self.count(LogLevel::Warn)
    }

    pub fn errors(&self) -> usize {
        self.count(LogLevel::Error)
    }

    /// Snapshot of every record so far, in arrival order.
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.lock().clone()
    }

    fn count(&self, level: LogLevel) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|record| record.level == level)
            .count()
    }
}

/// Tracing layer that counts warning and error events into a [`DiagnosticLog`]
pub struct DiagnosticLayer {
    log: DiagnosticLog,
}

impl DiagnosticLayer {
    pub fn new(log: DiagnosticLog) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::convert_level(event.metadata().level());
        if level < LogLevel::Warn {
            return;
        }

        let mut visitor = DiagnosticVisitor::default();
        event.record(&mut visitor);

        self.log.push(DiagnosticRecord {
            level,
            entity: visitor.entity,
            message: visitor.message.unwrap_or_default(),
        });
    }
}

/// Visitor extracting the message and `entity` fields
#[derive(Default)]
struct DiagnosticVisitor {
    message: Option<String>,
    entity: Option<String>,
}

impl Visit for DiagnosticVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{:?}", value)),
            "entity" => self.entity = Some(format!("{:?}", value)),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "entity" => self.entity = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Initialize logging for a generator run
///
/// Installs a registry with a stderr `fmt` layer filtered at `level` (or by
/// `RUST_LOG` when set) and a [`DiagnosticLayer`] that sees warnings and
/// errors regardless of either.
///
/// Only the first call installs anything; every call returns the log of
/// that first subscriber.
pub fn init_logging(level: LogLevel) -> DiagnosticLog {
    static GLOBAL_LOG: OnceLock<DiagnosticLog> = OnceLock::new();

    GLOBAL_LOG.get_or_init(|| install(level)).clone()
}

fn install(level: LogLevel) -> DiagnosticLog {
    use tracing_subscriber::prelude::*;

    let log = DiagnosticLog::new();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_filter(level).into()));
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let subscriber = tracing_subscriber::registry()
        .with(fmt)
        .with(DiagnosticLayer::new(log.clone()));

    // Ignore the error when a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
    log
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
