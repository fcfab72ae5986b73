//! Telemetry helpers for structured logging and tracing.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "triage_dispatch=info";

/// Initialize tracing. Callers can install their own subscriber; this
/// helper installs an env-based fmt subscriber if none is set.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
