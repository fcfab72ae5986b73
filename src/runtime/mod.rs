//! Operation surface and runtime adapters.

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod service;

pub use api::{handle_request, SchedulerRequest, SchedulerResponse};
#[cfg(feature = "tokio-runtime")]
pub use service::{SchedulerHandle, SchedulerService};
