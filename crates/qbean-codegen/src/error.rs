//! Error types for emission and generation

use qbean_core::ModelError;
use thiserror::Error;

/// Result type alias for emitter operations
pub type EmitResult<T> = Result<T, EmitError>;

/// Error raised while writing one artifact
#[derive(Error, Debug)]
pub enum EmitError {
    /// Writing to the artifact stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A name cannot be used as an identifier in the target language
    #[error("invalid {kind} identifier: '{name}'")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// A name collides with a reserved word of the target language
    #[error("'{0}' is a reserved word")]
    ReservedWord(String),
}

impl EmitError {
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        EmitError::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }
}

/// Error raised while generating the query beans of one entity
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The entity model could not be built
    #[error("failed to build model for {entity}: {source}")]
    Model {
        entity: String,
        #[source]
        source: ModelError,
    },

    /// The output sink could not open an artifact
    #[error("failed to open {artifact}: {source}")]
    Open {
        artifact: String,
        #[source]
        source: std::io::Error,
    },

    /// The output sink could not commit an artifact
    #[error("failed to write {artifact}: {source}")]
    Sink {
        artifact: String,
        #[source]
        source: std::io::Error,
    },

    /// The emitter failed part way through an artifact
    #[error("failed to emit {artifact}: {source}")]
    Emit {
        artifact: String,
        #[source]
        source: EmitError,
    },
}

impl GenerateError {
    /// Name of the entity or artifact the error concerns
    pub fn subject(&self) -> &str {
        match self {
            GenerateError::Model { entity, .. } => entity,
            GenerateError::Open { artifact, .. }
            | GenerateError::Sink { artifact, .. }
            | GenerateError::Emit { artifact, .. } => artifact,
        }
    }

    /// Whether the sink refused to open the artifact at all
    pub fn is_open_failure(&self) -> bool {
        matches!(self, GenerateError::Open { .. })
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
