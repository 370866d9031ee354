//! Error types for model construction

use thiserror::Error;

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error type for building the entity model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A raw declared-type descriptor could not be parsed
    #[error("invalid type descriptor '{descriptor}': {reason}")]
    InvalidTypeDescriptor { descriptor: String, reason: String },

    /// A name (entity, field or type) was empty
    #[error("empty {0} name")]
    EmptyName(&'static str),

    /// The entity source has no definition for the requested name
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// An entity names a superclass the source does not define
    #[error("entity {entity} extends unknown type {superclass}")]
    UnknownSuperclass { entity: String, superclass: String },

    /// The superclass chain of an entity loops back on itself
    #[error("superclass cycle detected for entity {0}")]
    SuperclassCycle(String),

    /// The same type was defined twice
    #[error("duplicate definition: {0}")]
    DuplicateDefinition(String),
}

impl ModelError {
    /// Shorthand for [`ModelError::InvalidTypeDescriptor`]
    pub fn invalid_type(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidTypeDescriptor {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }
}
