//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced by scheduler components.
///
/// Every failing operation leaves the scheduler state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Dispatch attempted while nothing is pending.
    #[error("admission queue is empty")]
    Empty,
    /// Resource or record lookup missed.
    #[error("not found: {0}")]
    NotFound(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The arrival index counter cannot advance any further.
    #[error("arrival index space exhausted")]
    Exhausted,
    /// The scheduler service is no longer accepting requests.
    #[error("scheduler service closed")]
    ServiceClosed,
}

impl SchedulerError {
    /// Short machine-readable kind, used by the request surface.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NotFound(_) => "not_found",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Exhausted => "exhausted",
            Self::ServiceClosed => "service_closed",
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
