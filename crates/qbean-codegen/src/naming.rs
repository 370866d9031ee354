//! Identifier rules for the target languages.
//!
//! | Input | Java | Kotlin |
//! |-------|------|--------|
//! | `name` | `name` | `name` |
//! | `class` | error | `` `class` `` |
//! | `1st` | error | error |

use crate::error::{EmitError, EmitResult};
use std::borrow::Cow;

/// Java keywords and literals that can never be identifiers.
pub const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Kotlin hard keywords; usable as identifiers only when backtick-quoted.
pub const KOTLIN_HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Whether `name` is lexically a JVM identifier (ignoring keywords).
///
/// # Examples
///
/// ```
/// use qbean_codegen::naming::is_identifier;
///
/// assert!(is_identifier("name"));
/// assert!(is_identifier("_alias"));
/// assert!(is_identifier("$amount"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier("first-name"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Validate a Java identifier.
pub fn java_identifier<'a>(kind: &'static str, name: &'a str) -> EmitResult<&'a str> {
    if !is_identifier(name) {
        return Err(EmitError::invalid_identifier(kind, name));
    }
    if JAVA_RESERVED.contains(&name) {
        return Err(EmitError::ReservedWord(name.to_string()));
    }
    Ok(name)
}

/// Validate a Kotlin identifier, backtick-quoting hard keywords.
pub fn kotlin_identifier<'a>(kind: &'static str, name: &'a str) -> EmitResult<Cow<'a, str>> {
    // `$` is not legal in unquoted Kotlin names
    if !is_identifier(name) || name.contains('$') {
        return Err(EmitError::invalid_identifier(kind, name));
    }
    if KOTLIN_HARD_KEYWORDS.contains(&name) {
        return Ok(Cow::Owned(format!("`{name}`")));
    }
    Ok(Cow::Borrowed(name))
}

/// Validate each segment of a dotted namespace with `check`.
pub fn namespace_segments<'a, F, S>(namespace: &'a str, check: F) -> EmitResult<Vec<S>>
where
    F: FnMut(&'a str) -> EmitResult<S>,
{
    namespace.split('.').map(check).collect()
}
