//! qbean-core - Entity model, property classification and import management
//!
//! This crate provides the language-independent half of query bean generation:
//! - [`EntitySource`] trait and the in-memory [`Model`] implementing it
//! - [`PropertyTypeCatalog`] mapping field types to query property types
//! - [`ModelBuilder`] producing an ordered [`EntityModel`] per entity
//! - [`ImportSet`] for deduplicated, sorted import lists
//! - [`GenerationContext`] describing the artifact being generated
//! - [`GeneratorConfig`] and the [`Diagnostics`] sink trait

mod config;
mod context;
mod diagnostics;
mod entity;
mod error;
mod imports;
mod model;
mod property;
mod types;

pub mod names;

pub use config::{GeneratedAnnotation, GeneratorConfig, TargetLanguage};
pub use context::GenerationContext;
pub use diagnostics::{Diagnostics, NoopDiagnostics};
pub use entity::{
    EntityDefinition, EntityDescriptor, EntityKind, EntitySource, FieldDescriptor, Model,
    TypeKind,
};
pub use error::{ModelError, ModelResult};
pub use imports::{FamilyMapping, ImportSet};
pub use model::{EntityModel, ModelBuilder, PropertyDescriptor, SkippedField};
pub use property::{
    Classification, PropertyType, PropertyTypeCatalog, SkipReason,
};
pub use types::{BoxedScalar, TypeArg, TypeExpr, TypeRef};

/// Log levels for generator output
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Parse a level name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Diagnostics, EntityDefinition, EntityKind, EntityModel, EntitySource, FieldDescriptor,
        GeneratedAnnotation, GenerationContext, GeneratorConfig, ImportSet, LogLevel, Model,
        ModelBuilder, ModelError, ModelResult, PropertyType, TargetLanguage, TypeRef,
    };
}

#[cfg(test)]
mod lib_tests;
