//! Java query bean syntax.

use crate::emitter::{FETCH_VARIANTS, LanguageEmitter, string_literal, write_class_doc};
use crate::error::EmitResult;
use crate::naming::{java_identifier, namespace_segments};
use qbean_core::{FamilyMapping, TargetLanguage, TypeExpr};
use std::io::Write;

/// Emits `.java` sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitter;

impl JavaEmitter {
    pub fn new() -> Self {
        Self
    }
}

fn qualified(kind: &'static str, name: &str) -> EmitResult<String> {
    Ok(namespace_segments(name, |segment| java_identifier(kind, segment))?.join("."))
}

impl LanguageEmitter for JavaEmitter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Java
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn generator_id(&self) -> &'static str {
        "io.ebean.querybean.generator"
    }

    fn import_family(&self) -> Option<&FamilyMapping> {
        None
    }

    fn emit_package(&self, out: &mut dyn Write, namespace: &str) -> EmitResult<()> {
        writeln!(out, "package {};", qualified("package", namespace)?)?;
        writeln!(out)?;
        Ok(())
    }

    fn emit_import(&self, out: &mut dyn Write, name: &str) -> EmitResult<()> {
        writeln!(out, "import {};", qualified("import", name)?)?;
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
        let name = java_identifier("class", name)?;
        writeln!(
            out,
            "public class Q{name} extends TQRootBean<{name},Q{name}> {{"
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn begin_association_class(
        &self,
        out: &mut dyn Write,
        name: &str,
        original_name: &str,
    ) -> EmitResult<()> {
        let name = java_identifier("class", name)?;
        let original_name = java_identifier("class", original_name)?;
        writeln!(
            out,
            "public class Q{name}<R> extends TQAssocBean<{original_name},R> {{"
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn emit_alias(&self, out: &mut dyn Write, name: &str) -> EmitResult<()> {
        writeln!(
            out,
            "  private static final Q{name} _alias = new Q{name}(true);"
        )?;
        writeln!(out)?;
        writeln!(out, "  /**")?;
        writeln!(
            out,
            "   * Return the shared 'Alias' instance used to provide properties to"
        )?;
        writeln!(out, "   * <code>select()</code> and <code>fetch()</code>")?;
        writeln!(out, "   */")?;
        writeln!(out, "  public static Q{name} alias() {{")?;
        writeln!(out, "    return _alias;")?;
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
        let property_name = java_identifier("property", property_name)?;
        writeln!(out, "  public {} {property_name};", type_expr.render(None))?;
        Ok(())
    }

    fn emit_root_constructors(
        &self,
        out: &mut dyn Write,
        name: &str,
        db_name: Option<&str>,
    ) -> EmitResult<()> {
        writeln!(out, "  /**")?;
        writeln!(out, "   * Construct with a given Database.")?;
        writeln!(out, "   */")?;
        writeln!(out, "  public Q{name}(Database database) {{")?;
        writeln!(out, "    super({name}.class, database);")?;
        writeln!(out, "  }}")?;
        writeln!(out)?;

        writeln!(out, "  /**")?;
        match db_name {
            Some(db) => {
                writeln!(out, "   * Construct using the {db} Database.")?;
                writeln!(out, "   */")?;
                writeln!(out, "  public Q{name}() {{")?;
                writeln!(
                    out,
                    "    super({name}.class, DB.byName(\"{}\"));",
                    string_literal(db)
                )?;
            }
            None => {
                writeln!(out, "   * Construct using the default Database.")?;
                writeln!(out, "   */")?;
                writeln!(out, "  public Q{name}() {{")?;
                writeln!(out, "    super({name}.class);")?;
            }
        }
        writeln!(out, "  }}")?;
        writeln!(out)?;

        writeln!(out, "  /**")?;
        writeln!(out, "   * Construct for Alias.")?;
        writeln!(out, "   */")?;
        writeln!(out, "  private Q{name}(boolean dummy) {{")?;
        writeln!(out, "    super(dummy);")?;
        writeln!(out, "  }}")?;
        Ok(())
    }

    fn emit_fetch_methods(&self, out: &mut dyn Write, original_name: &str) -> EmitResult<()> {
        for (suffix, doc) in FETCH_VARIANTS {
            writeln!(out, "  /**")?;
            writeln!(out, "   * {doc}")?;
            writeln!(out, "   */")?;
            writeln!(out, "  @SafeVarargs @SuppressWarnings(\"varargs\")")?;
            writeln!(
                out,
                "  public final R fetch{suffix}(TQProperty<Q{original_name}>... properties) {{"
            )?;
            writeln!(out, "    return fetch{suffix}Properties(properties);")?;
            writeln!(out, "  }}")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn emit_association_constructor(&self, out: &mut dyn Write, name: &str) -> EmitResult<()> {
        writeln!(out, "  public Q{name}(String name, R root) {{")?;
        writeln!(out, "    super(name, root);")?;
        writeln!(out, "  }}")?;
        Ok(())
    }

    fn end_class(&self, out: &mut dyn Write) -> EmitResult<()> {
        writeln!(out, "}}")?;
        Ok(())
    }
}
