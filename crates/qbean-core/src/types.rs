//! Declared and generated type representations
//!
//! [`TypeRef`] is the raw declared type of a source field, as supplied by the
//! entity source (e.g. `java.util.List<app.Order>`). [`TypeExpr`] is the type
//! expression of a generated field declaration (e.g. `PString<QCountry>`).

use crate::error::{ModelError, ModelResult};
use crate::imports::FamilyMapping;
use crate::names::derive_short_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared field type: dotted name, generic arguments and array depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    /// Fully-qualified (or primitive) type name.
    pub name: String,

    /// Generic type arguments, in declaration order.
    pub args: Vec<TypeRef>,

    /// Number of trailing `[]` markers.
    pub array_depth: u8,
}

impl TypeRef {
    /// A non-generic, non-array type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            array_depth: 0,
        }
    }

    /// A generic type with the given arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
            array_depth: 0,
        }
    }

    /// Parse a type descriptor such as `java.util.Map<java.lang.String, app.Order>`.
    pub fn parse(descriptor: &str) -> ModelResult<Self> {
        let mut parser = TypeParser {
            source: descriptor,
            chars: descriptor.char_indices().peekable(),
        };
        let parsed = parser.parse_type()?;
        parser.skip_whitespace();
        if let Some((pos, _)) = parser.chars.peek() {
            return Err(ModelError::invalid_type(
                descriptor,
                format!("unexpected trailing input at offset {pos}"),
            ));
        }
        Ok(parsed)
    }

    /// Whether the type carries at least one `[]` marker.
    pub fn is_array(&self) -> bool {
        self.array_depth > 0
    }

    /// Last segment of the type name.
    pub fn simple_name(&self) -> &str {
        derive_short_name(&self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        for _ in 0..self.array_depth {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeRef::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct TypeParser<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl TypeParser<'_> {
    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some((_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn error(&self, reason: impl Into<String>) -> ModelError {
        ModelError::invalid_type(self.source, reason)
    }

    fn parse_type(&mut self) -> ModelResult<TypeRef> {
        self.skip_whitespace();
        let name = self.parse_name()?;
        let mut ty = TypeRef::named(name);

        self.skip_whitespace();
        if matches!(self.chars.peek(), Some((_, '<'))) {
            self.chars.next();
            loop {
                ty.args.push(self.parse_type()?);
                self.skip_whitespace();
                match self.chars.next() {
                    Some((_, ',')) => continue,
                    Some((_, '>')) => break,
                    Some((pos, c)) => {
                        return Err(self.error(format!("unexpected '{c}' at offset {pos}")));
                    }
                    None => return Err(self.error("unbalanced '<'")),
                }
            }
            self.skip_whitespace();
        }

        while matches!(self.chars.peek(), Some((_, '['))) {
            self.chars.next();
            match self.chars.next() {
                Some((_, ']')) => {}
                _ => return Err(self.error("expected ']' after '['")),
            }
            ty.array_depth = ty.array_depth.saturating_add(1);
            self.skip_whitespace();
        }

        Ok(ty)
    }

    fn parse_name(&mut self) -> ModelResult<String> {
        let mut name = String::new();
        let mut expect_segment = true;

        while let Some(&(pos, c)) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                if expect_segment && c.is_ascii_digit() {
                    return Err(self.error(format!("name segment starts with digit at offset {pos}")));
                }
                expect_segment = false;
                name.push(c);
            } else if c == '.' {
                if expect_segment {
                    return Err(self.error(format!("empty name segment at offset {pos}")));
                }
                expect_segment = true;
                name.push(c);
            } else {
                break;
            }
            self.chars.next();
        }

        if name.is_empty() {
            return Err(self.error("missing type name"));
        }
        if expect_segment {
            return Err(self.error("type name ends with '.'"));
        }
        Ok(name)
    }
}

/// Boxed scalar types whose import names differ between target languages.
///
/// This is the stable key of a [`FamilyMapping`]: each variant knows its
/// canonical (Java) name, and target languages map it to their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoxedScalar {
    String,
    Integer,
    Long,
    Double,
    Float,
    Short,
    Boolean,
    Byte,
    Character,
}

impl BoxedScalar {
    /// Every variant, in canonical order.
    pub const ALL: [BoxedScalar; 9] = [
        BoxedScalar::String,
        BoxedScalar::Integer,
        BoxedScalar::Long,
        BoxedScalar::Double,
        BoxedScalar::Float,
        BoxedScalar::Short,
        BoxedScalar::Boolean,
        BoxedScalar::Byte,
        BoxedScalar::Character,
    ];

    /// Canonical fully-qualified name.
    pub fn java_name(self) -> &'static str {
        match self {
            BoxedScalar::String => "java.lang.String",
            BoxedScalar::Integer => "java.lang.Integer",
            BoxedScalar::Long => "java.lang.Long",
            BoxedScalar::Double => "java.lang.Double",
            BoxedScalar::Float => "java.lang.Float",
            BoxedScalar::Short => "java.lang.Short",
            BoxedScalar::Boolean => "java.lang.Boolean",
            BoxedScalar::Byte => "java.lang.Byte",
            BoxedScalar::Character => "java.lang.Character",
        }
    }

    /// Canonical short name.
    pub fn simple_name(self) -> &'static str {
        derive_short_name(self.java_name())
    }

    /// Recognize a declared type name as a boxed scalar.
    ///
    /// Accepts the qualified boxed name, the bare boxed name and the
    /// primitive keyword (`int`, `boolean`, ...).
    pub fn from_type_name(name: &str) -> Option<Self> {
        let scalar = match name {
            "java.lang.String" | "String" => BoxedScalar::String,
            "java.lang.Integer" | "Integer" | "int" => BoxedScalar::Integer,
            "java.lang.Long" | "Long" | "long" => BoxedScalar::Long,
            "java.lang.Double" | "Double" | "double" => BoxedScalar::Double,
            "java.lang.Float" | "Float" | "float" => BoxedScalar::Float,
            "java.lang.Short" | "Short" | "short" => BoxedScalar::Short,
            "java.lang.Boolean" | "Boolean" | "boolean" => BoxedScalar::Boolean,
            "java.lang.Byte" | "Byte" | "byte" => BoxedScalar::Byte,
            "java.lang.Character" | "Character" | "char" => BoxedScalar::Character,
            _ => return None,
        };
        Some(scalar)
    }
}

/// Type expression of a generated field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// Simple name of the generic type, e.g. `PString` or `QAssocCountry`.
    pub base: String,

    /// Type arguments.
    pub args: Vec<TypeArg>,
}

/// One argument of a [`TypeExpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArg {
    /// A simple type name used as is (`QCountry`, `R`, `Status`).
    Name(String),

    /// A boxed scalar, rendered through the target language's family mapping.
    Boxed(BoxedScalar),

    /// A nested generic type.
    Expr(TypeExpr),
}

impl TypeExpr {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            args: Vec::new(),
        }
    }

    /// Append a type argument.
    pub fn with_arg(mut self, arg: TypeArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Append a plain named type argument.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_arg(TypeArg::Name(name.into()))
    }

    /// Render the expression, translating boxed scalars through `family`.
    ///
    /// With no family the canonical short names are used (`Integer`); the
    /// Kotlin family renders `Int`.
    pub fn render(&self, family: Option<&FamilyMapping>) -> String {
        let mut out = String::new();
        self.render_into(&mut out, family);
        out
    }

    fn render_into(&self, out: &mut String, family: Option<&FamilyMapping>) {
        out.push_str(&self.base);
        if self.args.is_empty() {
            return;
        }
        out.push('<');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            match arg {
                TypeArg::Name(name) => out.push_str(name),
                TypeArg::Boxed(scalar) => {
                    let name = family
                        .and_then(|f| f.target(*scalar))
                        .map(derive_short_name)
                        .unwrap_or_else(|| scalar.simple_name());
                    out.push_str(name);
                }
                TypeArg::Expr(expr) => expr.render_into(out, family),
            }
        }
        out.push('>');
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
