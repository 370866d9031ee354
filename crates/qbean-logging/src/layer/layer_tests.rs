#![allow(non_snake_case)]

use super::*;
use test_case::test_case;
use tracing_subscriber::prelude::*;

fn capture(body: impl FnOnce()) -> DiagnosticLog {
    let log = DiagnosticLog::new();
    let subscriber = tracing_subscriber::registry().with(DiagnosticLayer::new(log.clone()));
    tracing::subscriber::with_default(subscriber, body);
    log
}

// DiagnosticLayer tests

#[test_case(Level::TRACE, LogLevel::Trace)]
#[test_case(Level::DEBUG, LogLevel::Debug)]
#[test_case(Level::INFO, LogLevel::Info)]
#[test_case(Level::WARN, LogLevel::Warn)]
#[test_case(Level::ERROR, LogLevel::Error)]
fn DiagnosticLayer___convert_level___maps_each_level(level: Level, expected: LogLevel) {
    assert_eq!(DiagnosticLayer::convert_level(&level), expected);
}

#[test]
fn DiagnosticLayer___counts_only_warnings_and_errors() {
    let log = capture(|| {
        tracing::debug!("debug");
        tracing::info!("info");
        tracing::warn!("first warning");
        tracing::warn!("second warning");
        tracing::error!("failure");
    });

    assert_eq!(log.warnings(), 2);
    assert_eq!(log.errors(), 1);
    assert_eq!(log.records().len(), 3);
}

#[test]
fn DiagnosticLayer___records_message_and_entity() {
    let log = capture(|| {
        tracing::warn!(entity = "app.Country", "field 'flag' skipped");
    });

    assert_eq!(
        log.records(),
        vec![DiagnosticRecord {
            level: LogLevel::Warn,
            entity: Some("app.Country".to_string()),
            message: "field 'flag' skipped".to_string(),
        }]
    );
}

#[test]
fn DiagnosticLayer___event_without_entity___has_none() {
    let log = capture(|| {
        tracing::error!(attempt = 3, "sink unavailable");
    });

    let records = log.records();
    assert_eq!(records[0].entity, None);
    assert_eq!(records[0].message, "sink unavailable");
}

#[test]
fn DiagnosticLayer___log_accessor___shares_records() {
    let layer = DiagnosticLayer::new(DiagnosticLog::new());
    let log = layer.log().clone();
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || tracing::error!("boom"));

    assert_eq!(log.errors(), 1);
}

// DiagnosticLog tests

#[test]
fn DiagnosticLog___clones___share_records() {
    let log = DiagnosticLog::new();
    let clone = log.clone();

    clone.push(DiagnosticRecord {
        level: LogLevel::Error,
        entity: None,
        message: "x".to_string(),
    });

    assert_eq!(log.errors(), 1);
    assert_eq!(log.warnings(), 0);
}

// level_filter tests

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn level_filter___maps_log_level(level: LogLevel, expected: LevelFilter) {
    assert_eq!(level_filter(level), expected);
}

#[test]
fn init_logging___second_call___returns_shared_log() {
    let first = init_logging(LogLevel::Warn);
    let second = init_logging(LogLevel::Debug);

    second.push(DiagnosticRecord {
        level: LogLevel::Warn,
        entity: None,
        message: "shared".to_string(),
    });

    assert!(first.records().iter().any(|r| r.message == "shared"));
}
