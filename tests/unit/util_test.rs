//! Tests for utility functions

use triage_dispatch::util::{init_tracing, DEFAULT_FILTER};

#[test]
fn test_default_filter_targets_crate() {
    assert_eq!(DEFAULT_FILTER, "triage_dispatch=info");
    assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
    // A second call finds the global subscriber and returns quietly.
    init_tracing();
    tracing::info!("tracing initialised twice");
}
