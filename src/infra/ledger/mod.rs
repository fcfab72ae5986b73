//! Treatment ledger backends.

pub mod memory;

pub use memory::InMemoryLedger;
