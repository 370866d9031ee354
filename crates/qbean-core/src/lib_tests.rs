#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// LogLevel tests

#[test]
fn LogLevel___ordering___trace_less_than_debug() {
    assert!(LogLevel::Trace < LogLevel::Debug);
}

#[test]
fn LogLevel___ordering___warn_less_than_error() {
    assert!(LogLevel::Warn < LogLevel::Error);
}

#[test]
fn LogLevel___ordering___error_less_than_off() {
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test_case("trace", Some(LogLevel::Trace))]
#[test_case("INFO", Some(LogLevel::Info))]
#[test_case("warning", Some(LogLevel::Warn))]
#[test_case("loud", None)]
fn LogLevel___parse___recognizes_names(value: &str, expected: Option<LogLevel>) {
    assert_eq!(LogLevel::parse(value), expected);
}

#[test]
fn LogLevel___display___uppercase() {
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
}

// Prelude test

#[test]
fn prelude___builds_model_end_to_end() {
    use crate::prelude::*;

    let mut model = Model::new();
    model
        .add_definition(
            EntityDefinition::entity("app.Country")
                .field(FieldDescriptor::parse("name", "java.lang.String").unwrap()),
        )
        .unwrap();

    let built: EntityModel = ModelBuilder::new(&model).build("app.Country").unwrap();

    assert_eq!(built.properties.len(), 1);
    assert_eq!(
        GenerationContext::root(&built.entity).artifact_name(),
        "QCountry"
    );
}
