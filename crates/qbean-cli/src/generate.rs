//! Generate command implementation

use crate::manifest::{DEFAULT_MANIFEST, Manifest};
use anyhow::{Context, Result};
use qbean_codegen::{FsSink, GenerationSummary, Generator};
use qbean_core::{GeneratorConfig, LogLevel, TargetLanguage};
use qbean_logging::{DiagnosticLog, TracingDiagnostics};
use std::path::PathBuf;

/// Options of one `qbean generate` invocation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub manifest: Option<String>,
    pub lang: Option<String>,
    pub output: Option<String>,
    pub entities: Vec<String>,
    pub strict: bool,
    pub verbose: bool,
}

/// Resolve the effective configuration: manifest values overridden by flags
pub fn resolve_config(
    mut config: GeneratorConfig,
    options: &GenerateOptions,
) -> Result<GeneratorConfig> {
    if let Some(lang) = &options.lang {
        config.language = TargetLanguage::parse(lang)
            .with_context(|| format!("Unsupported language: {lang}. Supported: java, kotlin"))?;
    }
    if let Some(output) = &options.output {
        config.output_dir = PathBuf::from(output);
    }
    if options.verbose {
        config.log_level = LogLevel::Debug.to_string().to_lowercase();
    }
    Ok(config)
}

/// Run the generate command
pub fn run(options: GenerateOptions) -> Result<()> {
    let path = options
        .manifest
        .clone()
        .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;
    let config = resolve_config(manifest.generator.clone(), &options)?;
    let log = qbean_logging::init_logging(config.log_level());

    println!("Generating {} query beans", config.language);
    println!("Manifest: {}", path);
    println!("Output: {}", config.output_dir.display());

    let summary = execute(&manifest, &config, &options.entities)?;
    report(&summary, &log);

    if options.strict && !summary.is_success() {
        anyhow::bail!(
            "Generation failed for {} artifact(s) or entity(ies)",
            summary.failures
        );
    }

    Ok(())
}

/// Generate into the configured output directory
pub fn execute(
    manifest: &Manifest,
    config: &GeneratorConfig,
    entities: &[String],
) -> Result<GenerationSummary> {
    let model = manifest.to_model()?;
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let sink = FsSink::new(&config.output_dir);
    let diagnostics = TracingDiagnostics::new();
    let generator = Generator::new(config, &sink, &diagnostics);

    tracing::debug!(entities = model.len(), "model loaded");

    let summary = if entities.is_empty() {
        generator.run_all(&model)
    } else {
        generator.run(&model, entities)
    };
    Ok(summary)
}

fn report(summary: &GenerationSummary, log: &DiagnosticLog) {
    if summary.is_success() {
        println!("\n✓ {}", summary.note());
    } else {
        println!("\n✗ {} ({} failed)", summary.note(), summary.failures);
    }
    if summary.unsupported_fields > 0 {
        println!("Skipped fields: {}", summary.unsupported_fields);
    }
    if log.warnings() > 0 || log.errors() > 0 {
        println!("Warnings: {}, errors: {}", log.warnings(), log.errors());
    }
}
