//! Entity model builder
//!
//! Turns one entity definition, together with its mapped-superclass chain,
//! into the ordered list of query properties and the base import set both
//! generated artifacts start from.

use crate::config::GeneratedAnnotation;
use crate::entity::{EntityDescriptor, EntitySource};
use crate::error::{ModelError, ModelResult};
use crate::imports::ImportSet;
use crate::names::{DATABASE, DB, TQ_ROOT_BEAN, TYPE_QUERY_BEAN};
use crate::property::{Classification, PropertyType, PropertyTypeCatalog, SkipReason};
use std::collections::BTreeMap;

/// One generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub property_type: PropertyType,
}

/// A field that produced no property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub name: String,
    pub reason: SkipReason,
}

/// Everything needed to emit the query beans of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityModel {
    pub entity: EntityDescriptor,

    /// Properties in hierarchy order (base fields first).
    pub properties: Vec<PropertyDescriptor>,

    /// Imports shared by both artifacts before per-artifact adjustment.
    pub imports: ImportSet,

    pub skipped: Vec<SkippedField>,
}

impl EntityModel {
    /// Skips the model author did not ask for.
    pub fn unsupported_fields(&self) -> impl Iterator<Item = &SkippedField> {
        self.skipped.iter().filter(|s| !s.reason.is_intentional())
    }
}

/// Builds [`EntityModel`]s from an [`EntitySource`].
pub struct ModelBuilder<'a> {
    source: &'a dyn EntitySource,
    catalog: PropertyTypeCatalog,
    generated_annotation: GeneratedAnnotation,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(source: &'a dyn EntitySource) -> Self {
        Self {
            source,
            catalog: PropertyTypeCatalog::new(),
            generated_annotation: GeneratedAnnotation::default(),
        }
    }

    pub fn with_generated_annotation(mut self, annotation: GeneratedAnnotation) -> Self {
        self.generated_annotation = annotation;
        self
    }

    /// Build the model of the entity or embeddable named `full_name`.
    pub fn build(&self, full_name: &str) -> ModelResult<EntityModel> {
        let definition = self
            .source
            .definition(full_name)
            .ok_or_else(|| ModelError::UnknownEntity(full_name.to_string()))?;
        if !definition.kind.is_generated() {
            return Err(ModelError::UnknownEntity(full_name.to_string()));
        }

        let mut hierarchy = self.source.superclass_chain(full_name)?;
        hierarchy.push(definition);

        // name -> position of first declaration; the latest declaration wins the slot
        let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
        let mut declared = Vec::new();
        for field in hierarchy.iter().flat_map(|d| d.fields.iter()) {
            match positions.get(field.name.as_str()) {
                Some(&index) => declared[index] = field,
                None => {
                    positions.insert(field.name.as_str(), declared.len());
                    declared.push(field);
                }
            }
        }

        let entity = EntityDescriptor::from_definition(definition);
        let mut imports = self.base_imports(&entity);
        let mut properties = Vec::new();
        let mut skipped = Vec::new();

        for field in declared {
            match self.catalog.classify(field, self.source) {
                Classification::Property(property_type) => {
                    imports.extend(property_type.imports());
                    properties.push(PropertyDescriptor {
                        name: field.name.clone(),
                        property_type,
                    });
                }
                Classification::Skip(reason) => skipped.push(SkippedField {
                    name: field.name.clone(),
                    reason,
                }),
            }
        }

        Ok(EntityModel {
            entity,
            properties,
            imports,
            skipped,
        })
    }

    fn base_imports(&self, entity: &EntityDescriptor) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add(entity.full_name.as_str());
        imports.add(TQ_ROOT_BEAN);
        imports.add(TYPE_QUERY_BEAN);
        imports.add(DATABASE);
        if entity.db_name.is_some() {
            imports.add(DB);
        }
        if let Some(annotation) = self.generated_annotation.type_name() {
            imports.add(annotation);
        }
        imports
    }
}
