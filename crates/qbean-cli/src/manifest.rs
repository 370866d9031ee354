//! Manifest parsing and validation

use anyhow::{Context, Result};
use qbean_core::{EntityDefinition, GeneratorConfig, Model};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "qbean.toml";

/// qbean.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub enums: Vec<String>,

    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Kinds and field types are checked while parsing
    #[serde(default, rename = "entity")]
    pub entities: Vec<EntityDefinition>,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        let mut defined = BTreeSet::new();

        for name in &self.enums {
            if name.is_empty() {
                anyhow::bail!("Enum name cannot be empty");
            }
            if !defined.insert(name.as_str()) {
                anyhow::bail!("Duplicate definition: {}", name);
            }
        }

        for entity in &self.entities {
            if entity.name.is_empty() {
                anyhow::bail!("Entity name cannot be empty");
            }
            if !defined.insert(entity.name.as_str()) {
                anyhow::bail!("Duplicate definition: {}", entity.name);
            }
            if entity.fields.iter().any(|field| field.name.is_empty()) {
                anyhow::bail!("Field name cannot be empty in entity '{}'", entity.name);
            }
        }

        for entity in &self.entities {
            if let Some(superclass) = &entity.extends
                && !self.entities.iter().any(|e| &e.name == superclass)
            {
                anyhow::bail!(
                    "Entity '{}' extends unknown type '{}'",
                    entity.name,
                    superclass
                );
            }
        }

        Ok(())
    }

    /// Build the in-memory entity model
    pub fn to_model(&self) -> Result<Model> {
        Model::from_parts(self.entities.iter().cloned(), self.enums.iter().cloned())
            .context("Invalid entity model")
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;
    let model = manifest.to_model()?;

    let generated = model
        .definitions()
        .filter(|definition| definition.kind.is_generated())
        .count();

    println!("✓ Language: {}", manifest.generator.language);
    println!("✓ Entities: {} ({} generated)", model.len(), generated);
    println!("✓ Enums: {}", manifest.enums.len());
    println!("\nManifest is valid!");

    Ok(())
}
