//! Logical arrival counter.

use super::error::SchedulerError;
use super::record::ArrivalIndex;

/// Issues monotonically increasing arrival indices.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    next: ArrivalIndex,
}

impl Sequencer {
    /// Sequencer starting at zero.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Sequencer starting at a fixed offset.
    pub const fn starting_at(first: ArrivalIndex) -> Self {
        Self { next: first }
    }

    /// Return the next unused index and advance.
    ///
    /// `ArrivalIndex::MAX` is never issued; reaching it yields
    /// [`SchedulerError::Exhausted`] and leaves the counter unchanged.
    pub fn next_index(&mut self) -> Result<ArrivalIndex, SchedulerError> {
        let index = self.next;
        self.next = index.checked_add(1).ok_or(SchedulerError::Exhausted)?;
        Ok(index)
    }

    /// Index the next call to [`Self::next_index`] will return.
    pub const fn peek(&self) -> ArrivalIndex {
        self.next
    }
}
