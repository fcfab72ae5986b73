//! In-memory record store backend.

use std::collections::HashMap;

use crate::core::{EntityRecord, RecordStore, SchedulerError};

/// Name-keyed record store; last write wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: HashMap<String, EntityRecord>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put(&mut self, record: EntityRecord) -> Option<EntityRecord> {
        self.records.insert(record.name.clone(), record)
    }

    fn get(&self, name: &str) -> Result<EntityRecord, SchedulerError> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| SchedulerError::NotFound(format!("record `{name}`")))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
