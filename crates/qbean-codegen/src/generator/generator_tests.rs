#![allow(non_snake_case)]

use super::*;
use crate::sink::MemorySink;
use parking_lot::Mutex;
use qbean_core::{EntityDefinition, FieldDescriptor, Model, TargetLanguage};

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(&'static str, Option<String>, String)>>,
}

impl Recorder {
    fn of_level(&self, level: &str) -> Vec<(Option<String>, String)> {
        self.events
            .lock()
            .iter()
            .filter(|(l, _, _)| *l == level)
            .map(|(_, entity, message)| (entity.clone(), message.clone()))
            .collect()
    }

    fn record(&self, level: &'static str, entity: Option<&str>, message: &str) {
        self.events
            .lock()
            .push((level, entity.map(str::to_string), message.to_string()));
    }
}

impl Diagnostics for Recorder {
    fn info(&self, entity: Option<&str>, message: &str) {
        self.record("info", entity, message);
    }

    fn warn(&self, entity: Option<&str>, message: &str) {
        self.record("warn", entity, message);
    }

    fn error(&self, entity: Option<&str>, message: &str) {
        self.record("error", entity, message);
    }
}

fn field(name: &str, descriptor: &str) -> FieldDescriptor {
    FieldDescriptor::parse(name, descriptor).unwrap()
}

fn source() -> Model {
    Model::from_parts(
        vec![
            EntityDefinition::mapped_superclass("app.BaseModel").field(field("id", "java.lang.Long")),
            EntityDefinition::entity("app.Country")
                .extends("app.BaseModel")
                .field(field("name", "java.lang.String"))
                .field(field("flag", "com.acme.Image"))
                .field(field("cache", "java.lang.String").transient()),
            EntityDefinition::entity("app.City")
                .extends("app.BaseModel")
                .field(field("country", "app.Country")),
            EntityDefinition::embeddable("app.Address").field(field("street", "java.lang.String")),
            EntityDefinition::entity("app.Orphan").extends("app.Missing"),
        ],
        Vec::<String>::new(),
    )
    .unwrap()
}

fn java_config() -> GeneratorConfig {
    GeneratorConfig {
        language: TargetLanguage::Java,
        ..GeneratorConfig::default()
    }
}

#[test]
fn Generator___run_all___skips_mapped_superclasses() {
    let sink = MemorySink::new();
    let recorder = Recorder::default();
    let generator = Generator::new(&java_config(), &sink, &recorder);

    let summary = generator.run_all(&source());

    // Address, City, Country, Orphan
    assert_eq!(summary.entities, 4);
    // City and Country: 2 each, Address: association only
    assert_eq!(summary.artifacts, 5);
    assert!(!sink.paths().iter().any(|p| p.to_string_lossy().contains("BaseModel")));
}

#[test]
fn Generator___model_failure___is_reported_and_run_continues() {
    let sink = MemorySink::new();
    let recorder = Recorder::default();
    let generator = Generator::new(&java_config(), &sink, &recorder);

    let summary = generator.run(
        &source(),
        &["app.Orphan".to_string(), "app.Address".to_string()],
    );

    assert_eq!(summary.failures, 1);
    assert!(!summary.is_success());
    assert_eq!(summary.artifacts, 1);
    let errors = recorder.of_level("error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0.as_deref(), Some("app.Orphan"));
    assert!(
        errors[0]
            .1
            .starts_with("Error generating query beans: failed to build model for app.Orphan:")
    );
}

#[test]
fn Generator___unsupported_field___warns_once_and_ignores_transient() {
    let sink = MemorySink::new();
    let recorder = Recorder::default();
    let generator = Generator::new(&java_config(), &sink, &recorder);

    let summary = generator.run(&source(), &["app.Country".to_string()]);

    assert_eq!(summary.unsupported_fields, 1);
    let warnings = recorder.of_level("warn");
    assert_eq!(
        warnings,
        vec![(
            Some("app.Country".to_string()),
            "field 'flag' skipped: no query property type for com.acme.Image".to_string()
        )]
    );
}

#[test]
fn Generator___warn_skipped_disabled___stays_silent() {
    let sink = MemorySink::new();
    let recorder = Recorder::default();
    let config = GeneratorConfig {
        warn_skipped: false,
        ..java_config()
    };
    let generator = Generator::new(&config, &sink, &recorder);

    let summary = generator.run(&source(), &["app.Country".to_string()]);

    assert_eq!(summary.unsupported_fields, 1);
    assert!(recorder.of_level("warn").is_empty());
}

#[test]
fn Generator___inherited_fields___come_first() {
    let sink = MemorySink::new();
    let generator = Generator::new(&java_config(), &sink, &qbean_core::NoopDiagnostics);

    generator.run(&source(), &["app.Country".to_string()]);

    let text = sink.get("app/query/QCountry.java").unwrap();
    let id = text.find("public PLong<QCountry> id;").unwrap();
    let name = text.find("public PString<QCountry> name;").unwrap();
    assert!(id < name);
    assert!(!text.contains(" flag;"));
    assert!(!text.contains(" cache;"));
}

#[test]
fn Generator___run___ends_with_summary_note() {
    let sink = MemorySink::new();
    let recorder = Recorder::default();
    let generator = Generator::new(&java_config(), &sink, &recorder);

    let summary = generator.run(&source(), &["app.Country".to_string()]);

    assert_eq!(summary.note(), "generated 2 query beans");
    let infos = recorder.of_level("info");
    assert_eq!(infos.last(), Some(&(None, "generated 2 query beans".to_string())));
}

#[test]
fn Generator___no_entities___reports_nothing() {
    let sink = MemorySink::new();
    let recorder = Recorder::default();
    let generator = Generator::new(&java_config(), &sink, &recorder);

    let summary = generator.run(&source(), &[]);

    assert_eq!(summary, GenerationSummary::default());
    assert!(recorder.events.lock().is_empty());
}

#[test]
fn Generator___default_config___emits_kotlin() {
    let sink = MemorySink::new();
    let generator = Generator::new(
        &GeneratorConfig::default(),
        &sink,
        &qbean_core::NoopDiagnostics,
    );

    generator.run(&source(), &["app.Address".to_string()]);

    assert_eq!(generator.emitter().language(), TargetLanguage::Kotlin);
    assert!(sink.get("app/query/assoc/QAssocAddress.kt").is_some());
}

#[test]
fn Generator___no_generated_annotation___omits_import_and_annotation() {
    let sink = MemorySink::new();
    let config = GeneratorConfig {
        generated_annotation: GeneratedAnnotation::None,
        ..java_config()
    };
    let generator = Generator::new(&config, &sink, &qbean_core::NoopDiagnostics);

    generator.run(&source(), &["app.Country".to_string()]);

    let text = sink.get("app/query/QCountry.java").unwrap();
    assert!(!text.contains("Generated"));
}
