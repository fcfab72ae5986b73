//! Storage adapters for the admission queue, record store and treatment ledger.

pub mod ledger;
pub mod queue;
pub mod records;

pub use ledger::InMemoryLedger;
pub use queue::InMemoryAdmissionQueue;
pub use records::InMemoryRecordStore;
