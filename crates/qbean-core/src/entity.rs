//! Entity source model
//!
//! The entity source supplies, for each data-entity type, its declared fields,
//! its kind and its mapped-superclass chain. [`Model`] is the in-memory
//! implementation of [`EntitySource`] built from [`EntityDefinition`]s.

use crate::error::{ModelError, ModelResult};
use crate::names::{derive_namespace, derive_short_name, query_namespace};
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Kind of a data-model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// Persisted, independently queryable entity.
    #[default]
    Entity,
    /// Structured value without identity, only used inside entities.
    Embeddable,
    /// Base type contributing fields to its subclasses, never generated itself.
    #[serde(alias = "mapped_superclass")]
    MappedSuperclass,
}

impl EntityKind {
    /// Whether query beans are generated for this kind.
    pub fn is_generated(self) -> bool {
        !matches!(self, EntityKind::MappedSuperclass)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Entity => write!(f, "entity"),
            EntityKind::Embeddable => write!(f, "embeddable"),
            EntityKind::MappedSuperclass => write!(f, "mapped-superclass"),
        }
    }
}

/// Kind of a type referenced from a field, as known to the entity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Entity,
    Embeddable,
    MappedSuperclass,
    Enum,
}

impl From<EntityKind> for TypeKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Entity => TypeKind::Entity,
            EntityKind::Embeddable => TypeKind::Embeddable,
            EntityKind::MappedSuperclass => TypeKind::MappedSuperclass,
        }
    }
}

/// One declared field of a source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, used verbatim as the generated property name.
    pub name: String,

    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,

    /// Not persisted.
    #[serde(default)]
    pub transient: bool,

    /// Class-level field.
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Collection of scalars stored as a database array.
    #[serde(default)]
    pub db_array: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            transient: false,
            is_static: false,
            db_array: false,
        }
    }

    /// Parse `descriptor` as the declared type.
    pub fn parse(name: impl Into<String>, descriptor: &str) -> ModelResult<Self> {
        Ok(Self::new(name, TypeRef::parse(descriptor)?))
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn db_array(mut self) -> Self {
        self.db_array = true;
        self
    }
}

/// Source-level definition of one data-model type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Fully-qualified name, e.g. `app.Country`.
    pub name: String,

    #[serde(default)]
    pub kind: EntityKind,

    /// Fully-qualified name of the mapped superclass, if any.
    #[serde(default)]
    pub extends: Option<String>,

    /// Logical database the entity belongs to, when not the default one.
    #[serde(default)]
    pub db_name: Option<String>,

    /// Fields declared directly on this type, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl EntityDefinition {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            extends: None,
            db_name: None,
            fields: Vec::new(),
        }
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Entity)
    }

    pub fn embeddable(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Embeddable)
    }

    pub fn mapped_superclass(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::MappedSuperclass)
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.extends = Some(superclass.into());
        self
    }

    pub fn db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = Some(db_name.into());
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// Identity of one entity being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Fully-qualified name, e.g. `app.Country`.
    pub full_name: String,

    /// Short name, e.g. `Country`.
    pub short_name: String,

    /// Namespace of the entity itself, e.g. `app`.
    pub namespace: String,

    /// Destination namespace of the root bean, e.g. `app.query`.
    pub dest_namespace: String,

    pub kind: EntityKind,

    pub db_name: Option<String>,
}

impl EntityDescriptor {
    pub fn from_definition(definition: &EntityDefinition) -> Self {
        let namespace = derive_namespace(&definition.name).to_string();
        Self {
            full_name: definition.name.clone(),
            short_name: derive_short_name(&definition.name).to_string(),
            dest_namespace: query_namespace(&namespace),
            namespace,
            kind: definition.kind,
            db_name: definition.db_name.clone(),
        }
    }

    /// Full (queryable) entity, as opposed to an embeddable.
    pub fn is_entity(&self) -> bool {
        self.kind == EntityKind::Entity
    }
}

/// Supplies entity definitions and type knowledge to the model builder.
pub trait EntitySource {
    /// Definition of a data-model type by fully-qualified name.
    fn definition(&self, name: &str) -> Option<&EntityDefinition>;

    /// Kind of a referenced type, or `None` when the source knows nothing about it.
    fn type_kind(&self, name: &str) -> Option<TypeKind>;

    /// Names of all types query beans can be generated for, sorted.
    fn generated_names(&self) -> Vec<String>;

    /// Superclass chain of `name`, base first, excluding `name` itself.
    fn superclass_chain(&self, name: &str) -> ModelResult<Vec<&EntityDefinition>> {
        let definition = self
            .definition(name)
            .ok_or_else(|| ModelError::UnknownEntity(name.to_string()))?;

        let mut seen = BTreeSet::new();
        seen.insert(definition.name.as_str());
        let mut chain = Vec::new();
        let mut current = definition;

        while let Some(superclass) = current.extends.as_deref() {
            if !seen.insert(superclass) {
                return Err(ModelError::SuperclassCycle(name.to_string()));
            }
            let parent =
                self.definition(superclass)
                    .ok_or_else(|| ModelError::UnknownSuperclass {
                        entity: current.name.clone(),
                        superclass: superclass.to_string(),
                    })?;
            chain.push(parent);
            current = parent;
        }

        chain.reverse();
        Ok(chain)
    }
}

/// In-memory entity source.
#[derive(Debug, Clone, Default)]
pub struct Model {
    definitions: BTreeMap<String, EntityDefinition>,
    enums: BTreeSet<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model, rejecting empty or duplicate names.
    pub fn from_parts<I, E>(definitions: I, enums: E) -> ModelResult<Self>
    where
        I: IntoIterator<Item = EntityDefinition>,
        E: IntoIterator<Item = String>,
    {
        let mut model = Model::new();
        for definition in definitions {
            model.add_definition(definition)?;
        }
        for name in enums {
            model.add_enum(name)?;
        }
        Ok(model)
    }

    pub fn add_definition(&mut self, definition: EntityDefinition) -> ModelResult<()> {
        if definition.name.is_empty() {
            return Err(ModelError::EmptyName("entity"));
        }
        if self.enums.contains(&definition.name) || self.definitions.contains_key(&definition.name)
        {
            return Err(ModelError::DuplicateDefinition(definition.name));
        }
        self.definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    pub fn add_enum(&mut self, name: impl Into<String>) -> ModelResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName("enum"));
        }
        if self.definitions.contains_key(&name) || !self.enums.insert(name.clone()) {
            return Err(ModelError::DuplicateDefinition(name));
        }
        Ok(())
    }

    pub fn definitions(&self) -> impl Iterator<Item = &EntityDefinition> {
        self.definitions.values()
    }

    pub fn enums(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl EntitySource for Model {
    fn definition(&self, name: &str) -> Option<&EntityDefinition> {
        self.definitions.get(name)
    }

    fn type_kind(&self, name: &str) -> Option<TypeKind> {
        if self.enums.contains(name) {
            return Some(TypeKind::Enum);
        }
        self.definitions.get(name).map(|d| d.kind.into())
    }

    fn generated_names(&self) -> Vec<String> {
        self.definitions
            .values()
            .filter(|d| d.kind.is_generated())
            .map(|d| d.name.clone())
            .collect()
    }
}
