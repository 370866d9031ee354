//! # qbean
//!
//! Generates Ebean-style type-safe query beans from an entity model.
//!
//! For every entity `app.Country` qbean writes:
//! - a root bean `app.query.QCountry` used to start queries
//! - an association bean `app.query.assoc.QAssocCountry<R>` used when another
//!   bean navigates to a `Country`
//!
//! Embeddables only get the association bean. Output is Java or Kotlin source.
//!
//! ## Quick Start
//!
//! ```
//! use qbean::prelude::*;
//!
//! let model = Model::from_parts(
//!     vec![
//!         EntityDefinition::entity("app.Country")
//!             .field(FieldDescriptor::parse("name", "java.lang.String")?)
//!             .field(FieldDescriptor::parse("population", "java.lang.Integer")?),
//!     ],
//!     Vec::<String>::new(),
//! )?;
//!
//! let config = GeneratorConfig {
//!     language: TargetLanguage::Java,
//!     ..GeneratorConfig::default()
//! };
//! let sink = MemorySink::new();
//! let summary = Generator::new(&config, &sink, &NoopDiagnostics).run_all(&model);
//!
//! assert_eq!(summary.artifacts, 2);
//! assert!(sink.get("app/query/QCountry.java").is_some());
//! # Ok::<(), qbean::ModelError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`qbean_core`] - Entity model, property classification, imports and config
//! - [`qbean_codegen`] - Java/Kotlin emitters, output sinks and the run loop
//! - [`qbean_logging`] - Tracing setup and diagnostic sinks

// Re-export core types
pub use qbean_core::{
    Diagnostics, EntityDefinition, EntityKind, EntityModel, EntitySource, FieldDescriptor,
    GeneratedAnnotation, GeneratorConfig, LogLevel, Model, ModelBuilder, ModelError, ModelResult,
    NoopDiagnostics, PropertyType, PropertyTypeCatalog, TargetLanguage, TypeRef, names,
};

// Re-export code generation
pub use qbean_codegen::{
    EmitError, FsSink, GenerateError, GenerationSummary, Generator, JavaEmitter, KotlinEmitter,
    LanguageEmitter, MemorySink, OutputSink, QueryBeanWriter, emitter_for,
};

// Re-export logging
pub use qbean_logging::{CollectingDiagnostics, TracingDiagnostics, init_logging};

// Re-export common dependencies
pub use serde;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use qbean::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Diagnostics, EntityDefinition, EntitySource, FieldDescriptor, FsSink, GeneratorConfig,
        Generator, MemorySink, Model, NoopDiagnostics, OutputSink, TargetLanguage,
        TracingDiagnostics,
    };
}
