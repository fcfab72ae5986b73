//! In-memory admission queue ordered by severity then arrival.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::core::{AdmissionQueue, ArrivalIndex, EntityRecord, SchedulerError, Severity};

/// Ordering key kept apart from the record payload.
///
/// `slot` is unique per insert, so records sharing an arrival index each
/// keep their own payload and pop in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PriorityKey {
    severity: Severity,
    arrival: ArrivalIndex,
    slot: u64,
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower severity first, then earlier arrival, then insert order (reversed for max-heap)
        other
            .severity
            .cmp(&self.severity)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

/// In-memory queue: a binary heap of keys plus a payload table keyed by an
/// internal insert slot. O(log n) insert and pop.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdmissionQueue {
    order: BinaryHeap<PriorityKey>,
    pending: HashMap<u64, EntityRecord>,
    next_slot: u64,
}

impl InMemoryAdmissionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdmissionQueue for InMemoryAdmissionQueue {
    fn insert(&mut self, record: EntityRecord) {
        let key = PriorityKey {
            severity: record.severity,
            arrival: record.arrival_index,
            slot: self.next_slot,
        };
        self.next_slot = self.next_slot.wrapping_add(1);
        self.pending.insert(key.slot, record);
        self.order.push(key);
    }

    fn pop_highest_priority(&mut self) -> Result<EntityRecord, SchedulerError> {
        while let Some(key) = self.order.pop() {
            if let Some(record) = self.pending.remove(&key.slot) {
                return Ok(record);
            }
        }
        Err(SchedulerError::Empty)
    }

    fn peek_highest_priority(&self) -> Option<&EntityRecord> {
        self.order
            .peek()
            .and_then(|key| self.pending.get(&key.slot))
    }

    fn peek_all_in_priority_order(&self) -> Vec<EntityRecord> {
        let mut working = self.order.clone();
        let mut snapshot = Vec::with_capacity(working.len());
        while let Some(key) = working.pop() {
            if let Some(record) = self.pending.get(&key.slot) {
                snapshot.push(record.clone());
            }
        }
        snapshot
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}
