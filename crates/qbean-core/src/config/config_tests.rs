#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GeneratorConfig___default___has_expected_values() {
    let config = GeneratorConfig::default();

    assert_eq!(config.language, TargetLanguage::Kotlin);
    assert_eq!(
        config.output_dir,
        PathBuf::from("target/generated-sources/querybeans")
    );
    assert_eq!(config.generated_annotation, GeneratedAnnotation::Jdk9);
    assert!(config.warn_skipped);
    assert_eq!(config.log_level, "info");
}

#[test]
fn GeneratorConfig___deserialize___empty_object_returns_default() {
    let config: GeneratorConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___deserialize___partial_fields_use_defaults() {
    let json = r#"{ "language": "java", "warn_skipped": false }"#;

    let config: GeneratorConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.language, TargetLanguage::Java);
    assert!(!config.warn_skipped);
    assert_eq!(config.generated_annotation, GeneratedAnnotation::Jdk9);
}

#[test]
fn GeneratorConfig___deserialize___invalid_language_is_error() {
    let json = r#"{ "language": "scala" }"#;

    assert!(serde_json::from_str::<GeneratorConfig>(json).is_err());
}

#[test]
fn GeneratorConfig___log_level___unknown_falls_back_to_info() {
    let config = GeneratorConfig {
        log_level: "chatty".to_string(),
        ..GeneratorConfig::default()
    };

    assert_eq!(config.log_level(), LogLevel::Info);
}

#[test]
fn GeneratorConfig___log_level___parses_known_level() {
    let config = GeneratorConfig {
        log_level: "debug".to_string(),
        ..GeneratorConfig::default()
    };

    assert_eq!(config.log_level(), LogLevel::Debug);
}

#[test_case("java", Some(TargetLanguage::Java))]
#[test_case("Kotlin", Some(TargetLanguage::Kotlin))]
#[test_case("kt", Some(TargetLanguage::Kotlin))]
#[test_case("scala", None)]
fn TargetLanguage___parse___recognizes_names(value: &str, expected: Option<TargetLanguage>) {
    assert_eq!(TargetLanguage::parse(value), expected);
}

#[test]
fn GeneratedAnnotation___type_name___per_flavour() {
    assert_eq!(
        GeneratedAnnotation::Jdk9.type_name(),
        Some("javax.annotation.processing.Generated")
    );
    assert_eq!(
        GeneratedAnnotation::Jdk8.type_name(),
        Some("javax.annotation.Generated")
    );
    assert_eq!(GeneratedAnnotation::None.type_name(), None);
    assert!(!GeneratedAnnotation::None.is_enabled());
}
