//! Per-item results of a dispatched batch

use crate::core::notifications::Notification;
use crate::core::transform::StorageRecord;
use crate::utils::error::ProcessingError;

/// What happened to one notification
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub notification: Notification,
    pub result: Result<StorageRecord, ProcessingError>,
}

impl ItemOutcome {
    pub fn is_stored(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch, in arrival order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<ItemOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn stored(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_stored()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.stored()
    }

    /// Records written by this batch
    pub fn records(&self) -> impl Iterator<Item = &StorageRecord> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed notifications with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&Notification, &ProcessingError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.notification, e)))
    }
}
