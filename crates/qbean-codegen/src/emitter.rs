//! Language emitter capability trait
//!
//! A [`LanguageEmitter`] knows the syntax of one target language. It never
//! decides *what* to generate: the [`QueryBeanWriter`](crate::QueryBeanWriter)
//! drives it section by section, and every type-mapping decision has already
//! been made by the model.
//!
//! Section order for one artifact:
//!
//! ```text
//! package -> imports -> class doc -> class header -> [alias] -> fields
//!         -> constructors / fetch methods -> class end
//! ```

use crate::error::EmitResult;
use crate::java::JavaEmitter;
use crate::kotlin::KotlinEmitter;
use qbean_core::{FamilyMapping, TargetLanguage, TypeExpr};
use std::io::Write;

/// Output syntax for generated query beans.
pub trait LanguageEmitter {
    fn language(&self) -> TargetLanguage;

    /// File extension of generated sources, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Value of the `@Generated` annotation.
    fn generator_id(&self) -> &'static str;

    /// Boxed scalar translation applied to imports and field type arguments.
    fn import_family(&self) -> Option<&FamilyMapping>;

    fn emit_package(&self, out: &mut dyn Write, namespace: &str) -> EmitResult<()>;

    fn emit_import(&self, out: &mut dyn Write, name: &str) -> EmitResult<()>;

    /// Doc comment and annotations preceding the class line.
    fn emit_class_doc(
        &self,
        out: &mut dyn Write,
        description: &str,
        generated: bool,
    ) -> EmitResult<()>;

    /// `Q<name>` extending `TQRootBean<name,Q<name>>`.
    fn begin_root_class(&self, out: &mut dyn Write, name: &str) -> EmitResult<()>;

    /// `Q<name><R>` extending `TQAssocBean<original_name,R>`.
    fn begin_association_class(
        &self,
        out: &mut dyn Write,
        name: &str,
        original_name: &str,
    ) -> EmitResult<()>;

    /// Shared alias instance and its accessor.
    fn emit_alias(&self, out: &mut dyn Write, name: &str) -> EmitResult<()>;

    fn emit_field_declaration(
        &self,
        out: &mut dyn Write,
        property_name: &str,
        type_expr: &TypeExpr,
    ) -> EmitResult<()>;

    /// Explicit-database, default and alias-marker constructors.
    fn emit_root_constructors(
        &self,
        out: &mut dyn Write,
        name: &str,
        db_name: Option<&str>,
    ) -> EmitResult<()>;

    /// `fetch`, `fetchQuery` and `fetchLazy` over the root bean's properties.
    fn emit_fetch_methods(&self, out: &mut dyn Write, original_name: &str) -> EmitResult<()>;

    fn emit_association_constructor(&self, out: &mut dyn Write, name: &str) -> EmitResult<()>;

    fn end_class(&self, out: &mut dyn Write) -> EmitResult<()>;
}

/// Emitter for the configured language.
pub fn emitter_for(language: TargetLanguage) -> Box<dyn LanguageEmitter> {
    match language {
        TargetLanguage::Java => Box::new(JavaEmitter::new()),
        TargetLanguage::Kotlin => Box::new(KotlinEmitter::new()),
    }
}

/// Fetch variants: method suffix and doc line.
pub(crate) const FETCH_VARIANTS: [(&str, &str); 3] = [
    ("", "Eagerly fetch this association loading the specified properties."),
    (
        "Query",
        "Eagerly fetch this association using a 'query join' loading the specified properties.",
    ),
    (
        "Lazy",
        "Use lazy loading for this association loading the specified properties.",
    ),
];

/// Class doc comment and annotations; identical in both languages.
pub(crate) fn write_class_doc(
    out: &mut dyn Write,
    description: &str,
    generator_id: Option<&str>,
) -> EmitResult<()> {
    writeln!(out, "/**")?;
    writeln!(out, " * {description}")?;
    writeln!(out, " *")?;
    writeln!(out, " * THIS IS A GENERATED OBJECT, DO NOT MODIFY THIS CLASS.")?;
    writeln!(out, " */")?;
    if let Some(id) = generator_id {
        writeln!(out, "@Generated(\"{id}\")")?;
    }
    writeln!(out, "@TypeQueryBean")?;
    Ok(())
}

/// Escape a value for a string literal.
pub(crate) fn string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
