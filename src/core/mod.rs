//! Core scheduling abstractions: records, sequencing, routing and the facade.

pub mod audit;
pub mod directory;
pub mod error;
pub mod record;
pub mod scheduler;
pub mod sequencer;
pub mod shared;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use directory::{ResourceDirectory, ResourceStatus};
pub use error::{AppResult, SchedulerError};
pub use record::{
    Admission, ArrivalIndex, Availability, EntityRecord, Registration, ResourceId, Severity,
};
pub use scheduler::{AdmissionQueue, RecordStore, Scheduler, SchedulerStats, TreatmentLedger};
pub use sequencer::Sequencer;
pub use shared::SharedScheduler;
