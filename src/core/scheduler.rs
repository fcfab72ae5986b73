//! Scheduler facade and the component traits it orchestrates.
//!
//! Data flows one way per operation:
//!
//! - `register`: sequencer -> directory lookup -> admission queue + record store
//! - `dispatch_next`: admission queue pop -> directory mutation -> treatment ledger
//! - `release_resource`: directory mutation
//!
//! The facade is the only component that moves an entry from the admission
//! queue into the treatment ledger. It is plain owned state; wrap it in
//! [`super::SharedScheduler`] or the runtime service to share it.

use serde::{Deserialize, Serialize};

use super::audit::{build_audit_event, AuditAction, AuditEvent, AuditSink};
use super::directory::{ResourceDirectory, ResourceStatus};
use super::record::{Admission, ArrivalIndex, Availability, EntityRecord, Registration, ResourceId};
use super::sequencer::Sequencer;
use super::SchedulerError;
use crate::infra::{InMemoryAdmissionQueue, InMemoryLedger, InMemoryRecordStore};

/// Abstraction for admission queue backends.
pub trait AdmissionQueue {
    /// Insert a pending entry keyed by `(severity, arrival_index)`. Never rejects.
    fn insert(&mut self, record: EntityRecord);
    /// Remove the entry with the lowest severity, earliest arrival on ties.
    fn pop_highest_priority(&mut self) -> Result<EntityRecord, SchedulerError>;
    /// Entry the next pop would return.
    fn peek_highest_priority(&self) -> Option<&EntityRecord>;
    /// Full priority-ordered snapshot; the live queue is not touched.
    fn peek_all_in_priority_order(&self) -> Vec<EntityRecord>;
    /// Number of pending entries.
    fn len(&self) -> usize;
    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Abstraction for the name-keyed record store.
pub trait RecordStore {
    /// Insert or overwrite by name, returning the replaced record.
    fn put(&mut self, record: EntityRecord) -> Option<EntityRecord>;
    /// Latest record stored under `name`.
    fn get(&self, name: &str) -> Result<EntityRecord, SchedulerError>;
    /// Number of distinct names stored.
    fn len(&self) -> usize;
}

/// Abstraction for the append-only treatment ledger.
pub trait TreatmentLedger {
    /// Append a dispatched record.
    fn append(&mut self, record: EntityRecord);
    /// All records in dispatch order.
    fn enumerate_in_order(&self) -> Vec<EntityRecord>;
    /// Number of records.
    fn len(&self) -> usize;
}

/// Point-in-time counters for the scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Total registrations accepted.
    pub registered: u64,
    /// Total successful dispatches.
    pub dispatched: u64,
    /// Entries still waiting in the admission queue.
    pub pending: usize,
    /// Records in the treatment ledger.
    pub treated: usize,
    /// Known resources currently marked busy.
    pub busy_resources: usize,
}

/// Orchestrates sequencer, directory, queue, record store and ledger.
pub struct Scheduler<Q = InMemoryAdmissionQueue, R = InMemoryRecordStore, L = InMemoryLedger> {
    sequencer: Sequencer,
    directory: ResourceDirectory,
    queue: Q,
    records: R,
    ledger: L,
    audit: Option<Box<dyn AuditSink>>,
    audit_sequence: u64,
    registered: u64,
    dispatched: u64,
}

impl Scheduler {
    /// Scheduler with in-memory backends over the given directory.
    pub fn new(directory: ResourceDirectory) -> Self {
        Self::with_components(
            Sequencer::new(),
            directory,
            InMemoryAdmissionQueue::new(),
            InMemoryRecordStore::new(),
            InMemoryLedger::new(),
        )
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(ResourceDirectory::default())
    }
}

impl<Q, R, L> Scheduler<Q, R, L>
where
    Q: AdmissionQueue,
    R: RecordStore,
    L: TreatmentLedger,
{
    /// Create a scheduler from components.
    pub fn with_components(
        sequencer: Sequencer,
        directory: ResourceDirectory,
        queue: Q,
        records: R,
        ledger: L,
    ) -> Self {
        Self {
            sequencer,
            directory,
            queue,
            records,
            ledger,
            audit: None,
            audit_sequence: 0,
            registered: 0,
            dispatched: 0,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Admit a new entity.
    ///
    /// Only fails with [`SchedulerError::Exhausted`] once the arrival index
    /// space is used up, before anything is stored. Re-registering a name
    /// overwrites the stored record while the earlier queue entry stays
    /// pending. The returned `resource_status` is a snapshot and is not
    /// re-checked at dispatch.
    pub fn register(&mut self, registration: Registration) -> Result<Admission, SchedulerError> {
        let arrival_index = self.sequencer.next_index()?;
        let assigned_resource = self.directory.resolve(&registration.category);
        let resource_status = self.directory.is_available(&assigned_resource);

        let record = EntityRecord {
            name: registration.name,
            age: registration.age,
            severity: registration.severity,
            arrival_index,
            category: registration.category,
            assigned_resource,
        };

        self.queue.insert(record.clone());
        if let Some(previous) = self.records.put(record.clone()) {
            tracing::warn!(
                name = %record.name,
                previous_arrival = previous.arrival_index,
                "record overwritten; earlier queue entry remains pending"
            );
        }
        self.registered += 1;

        tracing::info!(
            name = %record.name,
            severity = record.severity,
            arrival = arrival_index,
            resource = %record.assigned_resource,
            status = %resource_status,
            "entity registered"
        );
        self.record_audit(
            AuditAction::Registered,
            record.name.clone(),
            Some(record.assigned_resource.clone()),
            Some(arrival_index),
        );

        Ok(Admission {
            record,
            resource_status,
        })
    }

    /// Move the highest-priority pending entity into the ledger and mark its
    /// resource busy, whatever its prior state.
    pub fn dispatch_next(&mut self) -> Result<EntityRecord, SchedulerError> {
        let record = self.queue.pop_highest_priority().inspect_err(|_| {
            tracing::warn!("dispatch requested with nothing pending");
        })?;

        // The fallback identity has no availability entry to mark.
        if self
            .directory
            .set_available(&record.assigned_resource, false)
            .is_err()
        {
            tracing::debug!(resource = %record.assigned_resource, "no availability entry to mark busy");
        }
        self.ledger.append(record.clone());
        self.dispatched += 1;

        tracing::info!(
            name = %record.name,
            severity = record.severity,
            arrival = record.arrival_index,
            resource = %record.assigned_resource,
            "entity dispatched"
        );
        self.record_audit(
            AuditAction::Dispatched,
            record.name.clone(),
            Some(record.assigned_resource.clone()),
            Some(record.arrival_index),
        );
        Ok(record)
    }

    /// Mark a known resource available. Idempotent.
    pub fn release_resource(&mut self, id: &ResourceId) -> Result<(), SchedulerError> {
        self.directory.set_available(id, true).inspect_err(|_| {
            tracing::warn!(resource = %id, "release of unknown resource");
        })?;
        tracing::info!(resource = %id, "resource released");
        self.record_audit(AuditAction::Released, id.to_string(), Some(id.clone()), None);
        Ok(())
    }

    /// Release by identity key or display label, returning the identity.
    pub fn release_by_identity(
        &mut self,
        identity_or_label: &str,
    ) -> Result<ResourceId, SchedulerError> {
        let id = self.directory.lookup(identity_or_label).ok_or_else(|| {
            tracing::warn!(resource = identity_or_label, "release of unknown resource");
            SchedulerError::NotFound(format!("resource `{identity_or_label}`"))
        })?;
        self.release_resource(&id)?;
        Ok(id)
    }

    /// Latest record registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<EntityRecord, SchedulerError> {
        self.records.get(name)
    }

    /// Entity the next dispatch would return.
    pub fn peek_next(&self) -> Option<&EntityRecord> {
        self.queue.peek_highest_priority()
    }

    /// Current availability of a resource.
    pub fn availability(&self, id: &ResourceId) -> Availability {
        self.directory.is_available(id)
    }

    /// Pending entities in dispatch order.
    pub fn queue_snapshot(&self) -> Vec<EntityRecord> {
        let snapshot = self.queue.peek_all_in_priority_order();
        tracing::debug!(pending = snapshot.len(), "queue snapshot");
        snapshot
    }

    /// Availability of every known resource.
    pub fn resource_snapshot(&self) -> Vec<ResourceStatus> {
        self.directory.list_all()
    }

    /// Dispatched entities in dispatch order.
    pub fn ledger_snapshot(&self) -> Vec<EntityRecord> {
        let snapshot = self.ledger.enumerate_in_order();
        tracing::debug!(treated = snapshot.len(), "ledger snapshot");
        snapshot
    }

    /// Audit events retained by the attached sink.
    pub fn audit_trail(&self) -> Vec<AuditEvent> {
        self.audit
            .as_ref()
            .map(|sink| sink.snapshot())
            .unwrap_or_default()
    }

    /// Read access to the resource directory.
    pub const fn directory(&self) -> &ResourceDirectory {
        &self.directory
    }

    /// Arrival index the next registration will receive.
    pub const fn next_arrival_index(&self) -> ArrivalIndex {
        self.sequencer.peek()
    }

    /// Point-in-time counters.
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            registered: self.registered,
            dispatched: self.dispatched,
            pending: self.queue.len(),
            treated: self.ledger.len(),
            busy_resources: self.directory.busy_count(),
        }
    }

    fn record_audit(
        &mut self,
        action: AuditAction,
        subject: String,
        resource: Option<ResourceId>,
        arrival_index: Option<ArrivalIndex>,
    ) {
        if let Some(sink) = self.audit.as_mut() {
            let event = build_audit_event(
                self.audit_sequence,
                action,
                subject,
                resource,
                arrival_index,
            );
            self.audit_sequence += 1;
            sink.record(event);
        }
    }
}
