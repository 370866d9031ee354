//! Generator configuration types

use crate::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Output syntax of generated query beans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Java,
    #[default]
    Kotlin,
}

impl TargetLanguage {
    /// Parse a language name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "java" => Some(TargetLanguage::Java),
            "kotlin" | "kt" => Some(TargetLanguage::Kotlin),
            _ => None,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Java => write!(f, "java"),
            TargetLanguage::Kotlin => write!(f, "kotlin"),
        }
    }
}

/// Which `@Generated` annotation, if any, generated beans carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedAnnotation {
    /// `javax.annotation.processing.Generated` (JDK 9+)
    #[default]
    Jdk9,
    /// `javax.annotation.Generated` (JDK 8)
    Jdk8,
    /// No annotation
    None,
}

impl GeneratedAnnotation {
    /// Fully-qualified annotation type to import, if any.
    pub fn type_name(self) -> Option<&'static str> {
        match self {
            GeneratedAnnotation::Jdk9 => Some("javax.annotation.processing.Generated"),
            GeneratedAnnotation::Jdk8 => Some("javax.annotation.Generated"),
            GeneratedAnnotation::None => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self.type_name().is_some()
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target language of the generated beans
    #[serde(default)]
    pub language: TargetLanguage,

    /// Root directory generated sources are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// `@Generated` annotation flavour
    #[serde(default)]
    pub generated_annotation: GeneratedAnnotation,

    /// Report fields dropped for lack of a generation rule as warnings
    ///
    /// Transient and static fields are never reported.
    #[serde(default = "default_warn_skipped")]
    pub warn_skipped: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target/generated-sources/querybeans")
}

fn default_warn_skipped() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: TargetLanguage::default(),
            output_dir: default_output_dir(),
            generated_annotation: GeneratedAnnotation::default(),
            warn_skipped: default_warn_skipped(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn log_level(&self) -> LogLevel {
        LogLevel::parse(&self.log_level).unwrap_or(LogLevel::Info)
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
