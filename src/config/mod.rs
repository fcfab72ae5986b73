//! Configuration models for the scheduler and its resource directory.

pub mod directory;
pub mod scheduler;

pub use directory::{DirectoryConfig, ResourceConfig};
pub use scheduler::{SchedulerConfig, CONFIG_PATH_ENV, MAX_FIRST_ARRIVAL_INDEX};
