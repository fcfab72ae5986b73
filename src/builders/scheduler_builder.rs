//! Builder to assemble a scheduler from configuration and backends.

use crate::config::SchedulerConfig;
use crate::core::{
    AdmissionQueue, AuditSink, InMemoryAuditSink, RecordStore, ResourceDirectory, Scheduler,
    SchedulerError, Sequencer, TreatmentLedger,
};
use crate::infra::{InMemoryAdmissionQueue, InMemoryLedger, InMemoryRecordStore};

/// Builds a [`Scheduler`], defaulting to in-memory backends.
pub struct SchedulerBuilder<Q = InMemoryAdmissionQueue, R = InMemoryRecordStore, L = InMemoryLedger> {
    config: SchedulerConfig,
    queue: Q,
    records: R,
    ledger: L,
    audit: Option<Box<dyn AuditSink>>,
}

impl SchedulerBuilder {
    /// Start from a configuration with in-memory backends.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            queue: InMemoryAdmissionQueue::new(),
            records: InMemoryRecordStore::new(),
            ledger: InMemoryLedger::new(),
            audit: None,
        }
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl<Q, R, L> SchedulerBuilder<Q, R, L>
where
    Q: AdmissionQueue,
    R: RecordStore,
    L: TreatmentLedger,
{
    /// Configuration the scheduler will be built from.
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Swap the admission queue backend.
    pub fn with_queue<Q2: AdmissionQueue>(self, queue: Q2) -> SchedulerBuilder<Q2, R, L> {
        SchedulerBuilder {
            config: self.config,
            queue,
            records: self.records,
            ledger: self.ledger,
            audit: self.audit,
        }
    }

    /// Swap the record store backend.
    pub fn with_records<R2: RecordStore>(self, records: R2) -> SchedulerBuilder<Q, R2, L> {
        SchedulerBuilder {
            config: self.config,
            queue: self.queue,
            records,
            ledger: self.ledger,
            audit: self.audit,
        }
    }

    /// Swap the treatment ledger backend.
    pub fn with_ledger<L2: TreatmentLedger>(self, ledger: L2) -> SchedulerBuilder<Q, R, L2> {
        SchedulerBuilder {
            config: self.config,
            queue: self.queue,
            records: self.records,
            ledger,
            audit: self.audit,
        }
    }

    /// Use a custom audit sink instead of the configured in-memory buffer.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Validate configuration and assemble the scheduler.
    pub fn build(self) -> Result<Scheduler<Q, R, L>, SchedulerError> {
        self.config
            .validate()
            .map_err(|e| SchedulerError::InvalidConfig(format!("config invalid: {e}")))?;

        let directory = ResourceDirectory::from_config(&self.config.directory)?;
        let scheduler = Scheduler::with_components(
            Sequencer::starting_at(self.config.first_arrival_index),
            directory,
            self.queue,
            self.records,
            self.ledger,
        );

        let audit = self.audit.or_else(|| {
            (self.config.audit_capacity > 0).then(|| {
                Box::new(InMemoryAuditSink::new(self.config.audit_capacity)) as Box<dyn AuditSink>
            })
        });

        tracing::debug!(
            resources = self.config.directory.resources.len(),
            first_arrival = self.config.first_arrival_index,
            audited = audit.is_some(),
            "scheduler built"
        );
        Ok(match audit {
            Some(sink) => scheduler.with_audit(sink),
            None => scheduler,
        })
    }
}

impl Scheduler {
    /// Build an in-memory scheduler from configuration.
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, SchedulerError> {
        SchedulerBuilder::new(config.clone()).build()
    }
}
