//! Generation run loop

use crate::emitter::{LanguageEmitter, emitter_for};
use crate::error::GenerateError;
use crate::sink::OutputSink;
use crate::writer::QueryBeanWriter;
use qbean_core::{
    Diagnostics, EntitySource, GeneratedAnnotation, GeneratorConfig, ModelBuilder,
};

/// Totals of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Entities attempted
    pub entities: usize,
    /// Artifacts committed
    pub artifacts: usize,
    /// Entity models that could not be built plus artifacts that failed
    pub failures: usize,
    /// Fields dropped for lack of a generation rule
    pub unsupported_fields: usize,
}

impl GenerationSummary {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }

    /// Closing note of a run.
    pub fn note(&self) -> String {
        format!("generated {} query beans", self.artifacts)
    }
}

/// Generates query beans for a set of entities, one at a time.
pub struct Generator<'a> {
    emitter: Box<dyn LanguageEmitter>,
    sink: &'a dyn OutputSink,
    diagnostics: &'a dyn Diagnostics,
    generated_annotation: GeneratedAnnotation,
    warn_skipped: bool,
}

impl<'a> Generator<'a> {
    /// Generator for the configured language.
    pub fn new(
        config: &GeneratorConfig,
        sink: &'a dyn OutputSink,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self::with_emitter(emitter_for(config.language), config, sink, diagnostics)
    }

    pub fn with_emitter(
        emitter: Box<dyn LanguageEmitter>,
        config: &GeneratorConfig,
        sink: &'a dyn OutputSink,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            emitter,
            sink,
            diagnostics,
            generated_annotation: config.generated_annotation,
            warn_skipped: config.warn_skipped,
        }
    }

    pub fn emitter(&self) -> &dyn LanguageEmitter {
        self.emitter.as_ref()
    }

    /// Generate every entity and embeddable the source knows.
    pub fn run_all(&self, source: &dyn EntitySource) -> GenerationSummary {
        self.run(source, &source.generated_names())
    }

    /// Generate the named entities.
    ///
    /// Failures are reported per entity and never stop the run.
    pub fn run(&self, source: &dyn EntitySource, names: &[String]) -> GenerationSummary {
        let builder =
            ModelBuilder::new(source).with_generated_annotation(self.generated_annotation);
        let writer = QueryBeanWriter::new(self.emitter.as_ref(), self.sink)
            .with_generated(self.generated_annotation.is_enabled());
        let mut summary = GenerationSummary::default();

        for name in names {
            let _span = tracing::debug_span!("entity", name = %name).entered();
            summary.entities += 1;

            let model = match builder.build(name) {
                Ok(model) => model,
                Err(source) => {
                    summary.failures += 1;
                    let err = GenerateError::Model {
                        entity: name.clone(),
                        source,
                    };
                    self.report(name, &err);
                    continue;
                }
            };

            for skipped in model.unsupported_fields() {
                summary.unsupported_fields += 1;
                if self.warn_skipped {
                    self.diagnostics.warn(
                        Some(name.as_str()),
                        &format!("field '{}' skipped: {}", skipped.name, skipped.reason),
                    );
                }
            }

            let outcome = writer.write(&model);
            summary.artifacts += outcome.written.len();
            for failure in &outcome.failures {
                summary.failures += 1;
                self.report(name, failure);
            }
        }

        if summary.entities > 0 {
            self.diagnostics.info(None, &summary.note());
        }
        summary
    }

    fn report(&self, entity: &str, err: &GenerateError) {
        self.diagnostics
            .error(Some(entity), &format!("Error generating query beans: {err}"));
    }
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
