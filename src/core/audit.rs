//! Audit sink implementations.
//!
//! Successful state transitions are recorded with a logical sequence number;
//! there is no wall-clock timestamp.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::record::{ArrivalIndex, ResourceId};

/// State transition being audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Entity admitted to the queue.
    Registered,
    /// Entity moved from the queue to the ledger.
    Dispatched,
    /// Resource marked available again.
    Released,
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event identifier.
    pub event_id: String,
    /// Logical position in the scheduler's operation history.
    pub sequence: u64,
    /// Action taken.
    pub action: AuditAction,
    /// Entity name, or resource id for releases.
    pub subject: String,
    /// Resource involved, if any.
    pub resource: Option<ResourceId>,
    /// Arrival index of the entity involved, if any.
    pub arrival_index: Option<ArrivalIndex>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
    /// Events currently retained, oldest first.
    fn snapshot(&self) -> Vec<AuditEvent>;
}

/// In-memory audit sink with a bounded buffer; oldest events are evicted.
#[derive(Debug, Clone)]
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn snapshot(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

/// Helper to build an audit event with a fresh identifier.
pub fn build_audit_event(
    sequence: u64,
    action: AuditAction,
    subject: impl Into<String>,
    resource: Option<ResourceId>,
    arrival_index: Option<ArrivalIndex>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        sequence,
        action,
        subject: subject.into(),
        resource,
        arrival_index,
    }
}
