//! Query bean writer
//!
//! Generates the two artifacts of one entity from its [`EntityModel`]:
//!
//! | Artifact | Namespace | Written for |
//! |----------|-----------|-------------|
//! | `Q<E>` root bean | `<ns>.query` | entities |
//! | `QAssoc<E>` association bean | `<ns>.query.assoc` | entities and embeddables |
//!
//! Each artifact gets its own [`GenerationContext`] and import set, and is
//! written through its own scoped stream. An emit or commit failure in one
//! artifact never prevents the other. A sink that cannot open the root
//! artifact aborts the entity.

use crate::emitter::LanguageEmitter;
use crate::error::{EmitResult, GenerateError};
use crate::sink::OutputSink;
use qbean_core::names::{
    DATABASE, DB, TQ_ASSOC_BEAN, TQ_PROPERTY, TQ_ROOT_BEAN, qualify, root_bean_name,
};
use qbean_core::{EntityModel, FamilyMapping, GenerationContext, ImportSet};
use std::io::Write;

/// Result of writing one entity's artifacts.
#[derive(Debug, Default)]
pub struct EntityOutcome {
    /// Fully-qualified names of committed artifacts, root first.
    pub written: Vec<String>,
    pub failures: Vec<GenerateError>,
}

impl EntityOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Imports of the root artifact.
pub fn root_imports(model: &EntityModel, family: Option<&FamilyMapping>) -> ImportSet {
    let mut imports = model.imports.clone();
    if let Some(family) = family {
        imports.translate_family(family);
    }
    imports
}

/// Imports of the association artifact, derived from the base set.
pub fn association_imports(model: &EntityModel, family: Option<&FamilyMapping>) -> ImportSet {
    let entity = &model.entity;
    let context = GenerationContext::association(entity);

    let mut imports = root_imports(model, family);
    imports.remove(DB);
    imports.remove(TQ_ROOT_BEAN);
    imports.remove(DATABASE);
    imports.add(TQ_ASSOC_BEAN);
    if entity.is_entity() {
        imports.add(TQ_PROPERTY);
        imports.add(qualify(
            &entity.dest_namespace,
            &root_bean_name(&entity.short_name),
        ));
    }
    imports.filter_by_prefix(&format!("{}.QAssoc", context.namespace()));
    imports
}

/// Writes query beans through a [`LanguageEmitter`] into an [`OutputSink`].
pub struct QueryBeanWriter<'a> {
    emitter: &'a dyn LanguageEmitter,
    sink: &'a dyn OutputSink,
    generated: bool,
}

impl<'a> QueryBeanWriter<'a> {
    pub fn new(emitter: &'a dyn LanguageEmitter, sink: &'a dyn OutputSink) -> Self {
        Self {
            emitter,
            sink,
            generated: true,
        }
    }

    /// Whether to annotate classes with `@Generated`.
    pub fn with_generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }

    /// Write the root bean (entities only) and the association bean.
    pub fn write(&self, model: &EntityModel) -> EntityOutcome {
        let mut outcome = EntityOutcome::default();

        if model.entity.is_entity() {
            match self.write_root(model) {
                Ok(artifact) => outcome.written.push(artifact),
                Err(err) if err.is_open_failure() => {
                    outcome.failures.push(err);
                    return outcome;
                }
                Err(err) => outcome.failures.push(err),
            }
        }
        match self.write_association(model) {
            Ok(artifact) => outcome.written.push(artifact),
            Err(err) => outcome.failures.push(err),
        }

        outcome
    }

    /// Write the root bean `Q<E>`.
    pub fn write_root(&self, model: &EntityModel) -> Result<String, GenerateError> {
        let context = GenerationContext::root(&model.entity);
        let imports = root_imports(model, self.emitter.import_family());
        let name = context.short_name();

        self.write_artifact(&context, |emitter, out| {
            self.write_preamble(out, &context, &imports)?;
            emitter.emit_class_doc(out, &format!("Query bean for {name}."), self.generated)?;
            emitter.begin_root_class(out, name)?;
            emitter.emit_alias(out, name)?;
            self.write_fields(out, model, &context)?;
            emitter.emit_root_constructors(out, name, model.entity.db_name.as_deref())?;
            emitter.end_class(out)
        })
    }

    /// Write the association bean `QAssoc<E>`.
    pub fn write_association(&self, model: &EntityModel) -> Result<String, GenerateError> {
        let context = GenerationContext::association(&model.entity);
        let imports = association_imports(model, self.emitter.import_family());
        let name = context.short_name();
        let original_name = context.original_name();

        self.write_artifact(&context, |emitter, out| {
            self.write_preamble(out, &context, &imports)?;
            emitter.emit_class_doc(
                out,
                &format!("Association query bean for {original_name}."),
                self.generated,
            )?;
            emitter.begin_association_class(out, name, original_name)?;
            self.write_fields(out, model, &context)?;
            if context.is_entity() {
                emitter.emit_fetch_methods(out, original_name)?;
            }
            emitter.emit_association_constructor(out, name)?;
            emitter.end_class(out)
        })
    }

    fn write_preamble(
        &self,
        out: &mut dyn Write,
        context: &GenerationContext,
        imports: &ImportSet,
    ) -> EmitResult<()> {
        self.emitter.emit_package(out, context.namespace())?;
        for name in imports.for_namespace(context.namespace()) {
            self.emitter.emit_import(out, name)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_fields(
        &self,
        out: &mut dyn Write,
        model: &EntityModel,
        context: &GenerationContext,
    ) -> EmitResult<()> {
        let owner = context.owner_type();
        for property in &model.properties {
            let type_expr = property.property_type.type_expr(&owner);
            self.emitter
                .emit_field_declaration(out, &property.name, &type_expr)?;
        }
        if !model.properties.is_empty() {
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_artifact<F>(
        &self,
        context: &GenerationContext,
        body: F,
    ) -> Result<String, GenerateError>
    where
        F: FnOnce(&dyn LanguageEmitter, &mut dyn Write) -> EmitResult<()>,
    {
        let artifact = context.artifact_full_name();
        let mut stream = self
            .sink
            .open(
                context.namespace(),
                &context.artifact_name(),
                self.emitter.file_extension(),
            )
            .map_err(|source| GenerateError::Open {
                artifact: artifact.clone(),
                source,
            })?;

        // An early return drops the stream, discarding the partial artifact
        body(self.emitter, &mut stream).map_err(|source| GenerateError::Emit {
            artifact: artifact.clone(),
            source,
        })?;
        stream.commit().map_err(|source| GenerateError::Sink {
            artifact: artifact.clone(),
            source,
        })?;

        tracing::debug!(artifact = %artifact, "query bean generated");
        Ok(artifact)
    }
}
