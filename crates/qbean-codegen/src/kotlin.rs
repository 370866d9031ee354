//! Kotlin query bean syntax.
//!
//! Differs from Java in more than punctuation: the association constructor
//! lives in the class header, the alias sits in a companion object, and boxed
//! scalars are imported and referenced under their `kotlin.*` names.

use crate::emitter::{FETCH_VARIANTS, LanguageEmitter, string_literal, write_class_doc};
use crate::error::EmitResult;
use crate::naming::{kotlin_identifier, namespace_segments};
use qbean_core::{BoxedScalar, FamilyMapping, TargetLanguage, TypeExpr};
use std::io::Write;

const KOTLIN_FAMILY: [(BoxedScalar, &str); 9] = [
    (BoxedScalar::String, "kotlin.String"),
    (BoxedScalar::Integer, "kotlin.Int"),
    (BoxedScalar::Long, "kotlin.Long"),
    (BoxedScalar::Double, "kotlin.Double"),
    (BoxedScalar::Float, "kotlin.Float"),
    (BoxedScalar::Short, "kotlin.Short"),
    (BoxedScalar::Boolean, "kotlin.Boolean"),
    (BoxedScalar::Byte, "kotlin.Byte"),
    (BoxedScalar::Character, "kotlin.Char"),
];

/// Emits `.kt` sources.
#[derive(Debug, Clone)]
pub struct KotlinEmitter {
    family: FamilyMapping,
}

impl KotlinEmitter {
    pub fn new() -> Self {
        Self {
            family: KOTLIN_FAMILY.into_iter().collect(),
        }
    }
}

impl Default for KotlinEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn qualified(kind: &'static str, name: &str) -> EmitResult<String> {
    Ok(namespace_segments(name, |segment| kotlin_identifier(kind, segment))?.join("."))
}

// The `Q` prefix keeps generated class names clear of keywords
fn bean_name(name: &str) -> EmitResult<String> {
    Ok(kotlin_identifier("class", &format!("Q{name}"))?.into_owned())
}

impl LanguageEmitter for KotlinEmitter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Kotlin
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn generator_id(&self) -> &'static str {
        "io.ebean.querybean.kotlin-generator"
    }

    fn import_family(&self) -> Option<&FamilyMapping> {
        Some(&self.family)
    }

    fn emit_package(&self, out: &mut dyn Write, namespace: &str) -> EmitResult<()> {
        writeln!(out, "package {}", qualified("package", namespace)?)?;
        writeln!(out)?;
        Ok(())
    }

    fn emit_import(&self, out: &mut dyn Write, name: &str) -> EmitResult<()> {
        writeln!(out, "import {}", qualified("import", name)?)?;
        Ok(())
    }

    fn emit_class_doc(
        &self,
        out: &mut dyn Write,
        description: &str,
        generated: bool,
    ) -> EmitResult<()> {
        write_class_doc(out, description, generated.then(|| self.generator_id()))
    }

    fn begin_root_class(&self, out: &mut dyn Write, name: &str) -> EmitResult<()> {
        let bean = bean_name(name)?;
        let entity = kotlin_identifier("class", name)?;
        writeln!(out, "class {bean} : TQRootBean<{entity},{bean}> {{")?;
        writeln!(out)?;
        Ok(())
    }

    fn begin_association_class(
        &self,
        out: &mut dyn Write,
        name: &str,
        original_name: &str,
    ) -> EmitResult<()> {
        let bean = bean_name(name)?;
        let entity = kotlin_identifier("class", original_name)?;
        writeln!(
            out,
            "class {bean}<R>(name: String, root: R) : TQAssocBean<{entity},R>(name, root) {{"
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn emit_alias(&self, out: &mut dyn Write, name: &str) -> EmitResult<()> {
        writeln!(out, "  companion object {{")?;
        writeln!(out, "    /**")?;
        writeln!(out, "     * shared 'Alias' instance used to provide")?;
        writeln!(out, "     * properties to select and fetch clauses")?;
        writeln!(out, "     */")?;
        writeln!(out, "    private val _alias = Q{name}(true)")?;
        writeln!(out)?;
        writeln!(out, "    /**")?;
        writeln!(out, "     * Return the shared 'Alias' instance.")?;
        writeln!(out, "     */")?;
        writeln!(out, "    fun alias() = _alias")?;
        writeln!(out, "  }}")?;
        writeln!(out)?;
        Ok(())
    }

    fn emit_field_declaration(
        &self,
        out: &mut dyn Write,
        property_name: &str,
        type_expr: &TypeExpr,
    ) -> EmitResult<()> {
        let property_name = kotlin_identifier("property", property_name)?;
        writeln!(
            out,
            "  lateinit var {property_name}: {}",
            type_expr.render(Some(&self.family))
        )?;
        Ok(())
    }

    fn emit_root_constructors(
        &self,
        out: &mut dyn Write,
        name: &str,
        db_name: Option<&str>,
    ) -> EmitResult<()> {
        let entity = kotlin_identifier("class", name)?;
        writeln!(out, "  /**")?;
        writeln!(out, "   * Construct with a given Database.")?;
        writeln!(out, "   */")?;
        writeln!(
            out,
            "  constructor(database: Database) : super({entity}::class.java, database)"
        )?;
        writeln!(out)?;

        writeln!(out, "  /**")?;
        match db_name {
            Some(db) => {
                writeln!(out, "   * Construct using the {db} Database.")?;
                writeln!(out, "   */")?;
                writeln!(
                    out,
                    "  constructor() : super({entity}::class.java, DB.byName(\"{}\"))",
                    string_literal(db).replace('$', "\\$")
                )?;
            }
            None => {
                writeln!(out, "   * Construct using the default Database.")?;
                writeln!(out, "   */")?;
                writeln!(out, "  constructor() : super({entity}::class.java)")?;
            }
        }
        writeln!(out)?;

        writeln!(out, "  /**")?;
        writeln!(out, "   * Construct for Alias.")?;
        writeln!(out, "   */")?;
        writeln!(out, "  private constructor(dummy: Boolean) : super(dummy)")?;
        Ok(())
    }

    fn emit_fetch_methods(&self, out: &mut dyn Write, original_name: &str) -> EmitResult<()> {
        for (suffix, doc) in FETCH_VARIANTS {
            writeln!(out, "  /**")?;
            writeln!(out, "   * {doc}")?;
            writeln!(out, "   */")?;
            writeln!(
                out,
                "  fun fetch{suffix}(vararg properties: TQProperty<Q{original_name}>) : R {{"
            )?;
            writeln!(out, "    return fetch{suffix}Properties(*properties)")?;
            writeln!(out, "  }}")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn emit_association_constructor(&self, _out: &mut dyn Write, _name: &str) -> EmitResult<()> {
        // declared in the class header
        Ok(())
    }

    fn end_class(&self, out: &mut dyn Write) -> EmitResult<()> {
        writeln!(out, "}}")?;
        Ok(())
    }
}
