//! Per-artifact generation context

use crate::entity::EntityDescriptor;
use crate::names::{
    ROOT_TYPE_VARIABLE, assoc_namespace, assoc_short_name, qualify, root_bean_name,
};

/// Which of the two artifacts of an entity is being generated.
///
/// Built fresh for every artifact; never mutated between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationContext {
    /// Root bean `Q<E>` in `<ns>.query`.
    Root {
        namespace: String,
        short_name: String,
        is_entity: bool,
    },

    /// Association bean `QAssoc<E>` in `<ns>.query.assoc`.
    Association {
        namespace: String,
        /// `Assoc<E>`
        short_name: String,
        /// `<E>`
        original_name: String,
        is_entity: bool,
    },
}

impl GenerationContext {
    pub fn root(entity: &EntityDescriptor) -> Self {
        GenerationContext::Root {
            namespace: entity.dest_namespace.clone(),
            short_name: entity.short_name.clone(),
            is_entity: entity.is_entity(),
        }
    }

    pub fn association(entity: &EntityDescriptor) -> Self {
        GenerationContext::Association {
            namespace: assoc_namespace(&entity.dest_namespace),
            short_name: assoc_short_name(&entity.short_name),
            original_name: entity.short_name.clone(),
            is_entity: entity.is_entity(),
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            GenerationContext::Root { namespace, .. }
            | GenerationContext::Association { namespace, .. } => namespace,
        }
    }

    /// Short name without the bean prefix: `Country` or `AssocCountry`.
    pub fn short_name(&self) -> &str {
        match self {
            GenerationContext::Root { short_name, .. }
            | GenerationContext::Association { short_name, .. } => short_name,
        }
    }

    /// Short name of the entity itself.
    pub fn original_name(&self) -> &str {
        match self {
            GenerationContext::Root { short_name, .. } => short_name,
            GenerationContext::Association { original_name, .. } => original_name,
        }
    }

    pub fn is_entity(&self) -> bool {
        match self {
            GenerationContext::Root { is_entity, .. }
            | GenerationContext::Association { is_entity, .. } => *is_entity,
        }
    }

    pub fn is_association(&self) -> bool {
        matches!(self, GenerationContext::Association { .. })
    }

    /// Generated class name, e.g. `QCountry` or `QAssocCountry`.
    pub fn artifact_name(&self) -> String {
        root_bean_name(self.short_name())
    }

    /// Fully-qualified generated class name.
    pub fn artifact_full_name(&self) -> String {
        qualify(self.namespace(), &self.artifact_name())
    }

    /// Owner type used to parameterize field declarations.
    pub fn owner_type(&self) -> String {
        match self {
            GenerationContext::Root { short_name, .. } => root_bean_name(short_name),
            GenerationContext::Association { .. } => ROOT_TYPE_VARIABLE.to_string(),
        }
    }
}
