//! Per-endpoint attempt tracking.
//!
//! # Responsibilities
//! - Count qualifying requests per video id since process start
//! - Serialize increments across concurrent requests for the same id
//!
//! # Design Decisions
//! - Keyed by integer id, not a formatted string
//! - Counts only grow; nothing is ever removed or reset while the process
//!   lives
//! - Forced-error and preflight requests never reach this table

use std::collections::HashMap;
use std::sync::Mutex;

/// Shared attempt counter table.
///
/// Owned by the application state and handed to handlers behind an `Arc`,
/// so tests can construct isolated trackers instead of sharing process-wide
/// globals.
#[derive(Debug, Default)]
pub struct AttemptTracker {
    counts: Mutex<HashMap<u16, u32>>,
}

impl AttemptTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one qualifying request for `id` and return the new count.
    ///
    /// The read-increment-write happens under the lock, so concurrent
    /// callers for the same id observe distinct consecutive values. A
    /// poisoned lock is recovered rather than propagated: an increment
    /// cannot leave the map inconsistent, and a response must always be
    /// produced.
    pub fn record(&self, id: u16) -> u32 {
        let mut counts = self
            .counts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let count = counts.entry(id).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count for `id` without mutating it. Absent ids read as 0.
    pub fn peek(&self, id: u16) -> u32 {
        self.counts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&id)
            .copied()
            .unwrap_or(0)
    }
}
