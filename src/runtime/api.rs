//! Request/response models for the scheduler's operation surface.

use serde::{Deserialize, Serialize};

use crate::core::{
    AdmissionQueue, Availability, EntityRecord, RecordStore, Registration, ResourceId,
    ResourceStatus, Scheduler, SchedulerError, SchedulerStats, TreatmentLedger,
};

/// One operation against the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SchedulerRequest {
    /// Admit a new entity.
    Register(Registration),
    /// Dispatch the highest-priority pending entity.
    DispatchNext,
    /// Mark a resource available, by identity key or display label.
    ReleaseResource {
        /// Identity key or label.
        resource: String,
    },
    /// Pending entities in dispatch order.
    ViewQueue,
    /// Availability of every known resource.
    ViewResources,
    /// Dispatched entities in dispatch order.
    ViewHistory,
    /// Latest record stored under a name.
    Lookup {
        /// Entity name.
        name: String,
    },
    /// Scheduler counters.
    Stats,
}

/// Outcome of a [`SchedulerRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerResponse {
    /// Entity admitted.
    Registered {
        /// Stored record.
        record: EntityRecord,
        /// Label of the assigned resource.
        resource_label: String,
        /// Availability of the assigned resource at registration time.
        resource_status: Availability,
    },
    /// Entity dispatched; its resource is now busy.
    Dispatched {
        /// Dispatched record.
        record: EntityRecord,
        /// Label of the assigned resource.
        resource_label: String,
    },
    /// Resource marked available.
    Released {
        /// Released identity.
        resource: ResourceId,
    },
    /// Queue snapshot.
    Queue {
        /// Pending entries in dispatch order.
        entries: Vec<EntityRecord>,
    },
    /// Resource availability snapshot.
    Resources {
        /// Known resources in configuration order.
        resources: Vec<ResourceStatus>,
    },
    /// Treatment ledger snapshot.
    History {
        /// Dispatched entries in dispatch order.
        entries: Vec<EntityRecord>,
    },
    /// Record lookup hit.
    Record {
        /// Latest record.
        record: EntityRecord,
    },
    /// Scheduler counters.
    Stats {
        /// Counter values.
        stats: SchedulerStats,
    },
    /// The operation failed without changing state.
    Error {
        /// Machine-readable kind (`empty`, `not_found`, ...).
        kind: String,
        /// Human-readable message.
        message: String,
    },
}

impl From<SchedulerError> for SchedulerResponse {
    fn from(err: SchedulerError) -> Self {
        Self::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Apply one request to a scheduler.
pub fn handle_request<Q, R, L>(
    scheduler: &mut Scheduler<Q, R, L>,
    request: SchedulerRequest,
) -> SchedulerResponse
where
    Q: AdmissionQueue,
    R: RecordStore,
    L: TreatmentLedger,
{
    match request {
        SchedulerRequest::Register(registration) => match scheduler.register(registration) {
            Ok(admission) => {
                let resource_label = scheduler
                    .directory()
                    .label(&admission.record.assigned_resource)
                    .to_string();
                SchedulerResponse::Registered {
                    record: admission.record,
                    resource_label,
                    resource_status: admission.resource_status,
                }
            }
            Err(e) => e.into(),
        },
        SchedulerRequest::DispatchNext => match scheduler.dispatch_next() {
            Ok(record) => {
                let resource_label = scheduler
                    .directory()
                    .label(&record.assigned_resource)
                    .to_string();
                SchedulerResponse::Dispatched {
                    record,
                    resource_label,
                }
            }
            Err(e) => e.into(),
        },
        SchedulerRequest::ReleaseResource { resource } => {
            match scheduler.release_by_identity(&resource) {
                Ok(id) => SchedulerResponse::Released { resource: id },
                Err(e) => e.into(),
            }
        }
        SchedulerRequest::ViewQueue => SchedulerResponse::Queue {
            entries: scheduler.queue_snapshot(),
        },
        SchedulerRequest::ViewResources => SchedulerResponse::Resources {
            resources: scheduler.resource_snapshot(),
        },
        SchedulerRequest::ViewHistory => SchedulerResponse::History {
            entries: scheduler.ledger_snapshot(),
        },
        SchedulerRequest::Lookup { name } => match scheduler.lookup(&name) {
            Ok(record) => SchedulerResponse::Record { record },
            Err(e) => e.into(),
        },
        SchedulerRequest::Stats => SchedulerResponse::Stats {
            stats: scheduler.stats(),
        },
    }
}
