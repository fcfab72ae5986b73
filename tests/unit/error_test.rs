//! Tests for error types

use triage_dispatch::core::SchedulerError;

#[test]
fn test_empty_error() {
    let err = SchedulerError::Empty;
    assert_eq!(format!("{}", err), "admission queue is empty");
    assert_eq!(err.kind(), "empty");
}

#[test]
fn test_not_found_error() {
    let err = SchedulerError::NotFound("resource `nobody`".to_string());
    assert_eq!(format!("{}", err), "not found: resource `nobody`");
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("no resources".to_string());
    assert_eq!(format!("{}", err), "invalid configuration: no resources");
}

#[test]
fn test_service_closed_error() {
    let err = SchedulerError::ServiceClosed;
    assert_eq!(format!("{}", err), "scheduler service closed");
    assert_eq!(err.kind(), "service_closed");
}

#[test]
fn test_exhausted_error() {
    let err = SchedulerError::Exhausted;
    assert_eq!(format!("{}", err), "arrival index space exhausted");
    assert_eq!(err.kind(), "exhausted");
}
