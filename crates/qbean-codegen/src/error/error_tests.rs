#![allow(non_snake_case)]

use super::*;

#[test]
fn EmitError___io___display_includes_cause() {
    let err = EmitError::from(std::io::Error::other("disk full"));

    assert_eq!(err.to_string(), "I/O error: disk full");
}

#[test]
fn EmitError___invalid_identifier___display_names_kind() {
    let err = EmitError::invalid_identifier("property", "1st");

    assert_eq!(err.to_string(), "invalid property identifier: '1st'");
}

#[test]
fn EmitError___reserved_word___display() {
    let err = EmitError::ReservedWord("class".into());

    assert_eq!(err.to_string(), "'class' is a reserved word");
}

#[test]
fn GenerateError___model___display_and_subject() {
    let err = GenerateError::Model {
        entity: "app.Orphan".into(),
        source: ModelError::UnknownEntity("app.Orphan".into()),
    };

    assert_eq!(err.subject(), "app.Orphan");
    assert_eq!(
        err.to_string(),
        "failed to build model for app.Orphan: unknown entity: app.Orphan"
    );
}

#[test]
fn GenerateError___emit___subject_is_artifact() {
    let err = GenerateError::Emit {
        artifact: "app.query.QCountry".into(),
        source: EmitError::ReservedWord("new".into()),
    };

    assert_eq!(err.subject(), "app.query.QCountry");
    assert!(err.to_string().contains("'new' is a reserved word"));
}

#[test]
fn GenerateError___source___is_exposed() {
    use std::error::Error;

    let err = GenerateError::Sink {
        artifact: "app.query.QCountry".into(),
        source: std::io::Error::other("denied"),
    };

    assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("denied"));
}

#[test]
fn GenerateError___open___is_open_failure() {
    let open = GenerateError::Open {
        artifact: "app.query.QCountry".into(),
        source: std::io::Error::other("denied"),
    };
    let commit = GenerateError::Sink {
        artifact: "app.query.QCountry".into(),
        source: std::io::Error::other("denied"),
    };

    assert!(open.is_open_failure());
    assert!(!commit.is_open_failure());
    assert_eq!(open.to_string(), "failed to open app.query.QCountry: denied");
}
