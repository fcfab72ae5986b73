//! Thread-safe handle running every scheduler operation under one lock.

use std::sync::Arc;

use parking_lot::Mutex;

use super::directory::ResourceStatus;
use super::record::{Admission, Availability, EntityRecord, Registration, ResourceId};
use super::scheduler::{AdmissionQueue, RecordStore, Scheduler, SchedulerStats, TreatmentLedger};
use super::SchedulerError;
use crate::infra::{InMemoryAdmissionQueue, InMemoryLedger, InMemoryRecordStore};

/// Cloneable handle over a single `parking_lot::Mutex`.
///
/// Arrival-index assignment and queue insertion happen in the same critical
/// section, so concurrent registrations can neither share an index nor
/// overtake a dispatch already holding the lock.
pub struct SharedScheduler<Q = InMemoryAdmissionQueue, R = InMemoryRecordStore, L = InMemoryLedger> {
    inner: Arc<Mutex<Scheduler<Q, R, L>>>,
}

impl<Q, R, L> Clone for SharedScheduler<Q, R, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Q, R, L> SharedScheduler<Q, R, L>
where
    Q: AdmissionQueue,
    R: RecordStore,
    L: TreatmentLedger,
{
    /// Take ownership of a scheduler.
    pub fn new(scheduler: Scheduler<Q, R, L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// Run a closure with exclusive access, for compound operations.
    pub fn with<T>(&self, f: impl FnOnce(&mut Scheduler<Q, R, L>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// See [`Scheduler::register`].
    pub fn register(&self, registration: Registration) -> Result<Admission, SchedulerError> {
        self.inner.lock().register(registration)
    }

    /// See [`Scheduler::dispatch_next`].
    pub fn dispatch_next(&self) -> Result<EntityRecord, SchedulerError> {
        self.inner.lock().dispatch_next()
    }

    /// See [`Scheduler::release_resource`].
    pub fn release_resource(&self, id: &ResourceId) -> Result<(), SchedulerError> {
        self.inner.lock().release_resource(id)
    }

    /// See [`Scheduler::lookup`].
    pub fn lookup(&self, name: &str) -> Result<EntityRecord, SchedulerError> {
        self.inner.lock().lookup(name)
    }

    /// See [`Scheduler::availability`].
    pub fn availability(&self, id: &ResourceId) -> Availability {
        self.inner.lock().availability(id)
    }

    /// See [`Scheduler::queue_snapshot`].
    pub fn queue_snapshot(&self) -> Vec<EntityRecord> {
        self.inner.lock().queue_snapshot()
    }

    /// See [`Scheduler::resource_snapshot`].
    pub fn resource_snapshot(&self) -> Vec<ResourceStatus> {
        self.inner.lock().resource_snapshot()
    }

    /// See [`Scheduler::ledger_snapshot`].
    pub fn ledger_snapshot(&self) -> Vec<EntityRecord> {
        self.inner.lock().ledger_snapshot()
    }

    /// See [`Scheduler::stats`].
    pub fn stats(&self) -> SchedulerStats {
        self.inner.lock().stats()
    }
}
