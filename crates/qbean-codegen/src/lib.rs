//! qbean-codegen - Query bean emission
//!
//! This crate turns [`qbean_core::EntityModel`]s into source files:
//! - [`LanguageEmitter`] trait with [`JavaEmitter`] and [`KotlinEmitter`]
//! - [`QueryBeanWriter`] producing the root and association bean of one entity
//! - [`OutputSink`] with the file-system [`FsSink`] and in-memory [`MemorySink`]
//! - [`Generator`] running a whole model and summarizing the result

mod emitter;
mod error;
mod generator;
mod java;
mod kotlin;
mod sink;
mod writer;

pub mod naming;

pub use emitter::{LanguageEmitter, emitter_for};
pub use error::{EmitError, EmitResult, GenerateError};
pub use generator::{GenerationSummary, Generator};
pub use java::JavaEmitter;
pub use kotlin::KotlinEmitter;
pub use sink::{ArtifactStream, FsSink, MemorySink, OutputSink, artifact_path};
pub use writer::{EntityOutcome, QueryBeanWriter, association_imports, root_imports};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FsSink, GenerationSummary, Generator, JavaEmitter, KotlinEmitter, LanguageEmitter,
        MemorySink, OutputSink, QueryBeanWriter,
    };
}
