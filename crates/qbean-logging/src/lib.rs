//! qbean-logging - Tracing setup and diagnostic sinks
//!
//! This crate provides:
//! - [`init_logging`] installing a stderr subscriber and a [`DiagnosticLayer`]
//! - [`TracingDiagnostics`] forwarding generator diagnostics to tracing
//! - [`CollectingDiagnostics`] keeping diagnostics in memory

mod diagnostics;
mod layer;

pub use diagnostics::{Collected, CollectingDiagnostics, TracingDiagnostics};
pub use layer::{DiagnosticLayer, DiagnosticLog, DiagnosticRecord, init_logging, level_filter};
pub use qbean_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CollectingDiagnostics, DiagnosticLayer, DiagnosticLog, LogLevel, TracingDiagnostics,
        init_logging,
    };
}
