//! Process-scoped submission counter.
//!
//! The counter is seeded from configuration at startup and lives only in
//! process memory: it resets on restart, and concurrently executing instances
//! each count independently. Relaxed ordering is sufficient since nothing is
//! synchronized through the counter value.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct SubmissionCounter(AtomicU64);

impl SubmissionCounter {
    pub fn new(start: u64) -> Self {
        Self(AtomicU64::new(start))
    }

    /// Increment and return the new submission number.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of the most recently assigned submission.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
