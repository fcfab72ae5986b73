//! In-memory treatment ledger backend.

use crate::core::{EntityRecord, TreatmentLedger};

/// Append-only vector of dispatched records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    entries: Vec<EntityRecord>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreatmentLedger for InMemoryLedger {
    fn append(&mut self, record: EntityRecord) {
        self.entries.push(record);
    }

    fn enumerate_in_order(&self) -> Vec<EntityRecord> {
        self.entries.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
