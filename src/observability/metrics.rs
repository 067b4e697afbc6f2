//! Counters for contact operations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters for the contact service.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    contacts_created_total: Arc<AtomicU64>,
    contacts_rejected_total: Arc<AtomicU64>,
    letter_queries_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a create attempt.
    pub fn track_create(&self, accepted: bool) {
        if accepted {
            self.contacts_created_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.contacts_rejected_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a completed `by_letter` query.
    pub fn track_letter_query(&self, duration_ms: u128, result_count: usize) {
        self.letter_queries_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Letter query completed"
        );
    }

    /// Contacts written.
    pub fn contacts_created_total(&self) -> u64 {
        self.contacts_created_total.load(Ordering::Relaxed)
    }

    /// Create attempts refused by validation.
    pub fn contacts_rejected_total(&self) -> u64 {
        self.contacts_rejected_total.load(Ordering::Relaxed)
    }

    /// `by_letter` queries served.
    pub fn letter_queries_total(&self) -> u64 {
        self.letter_queries_total.load(Ordering::Relaxed)
    }

    /// Share of create attempts that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.contacts_rejected_total() as f64;
        let total = (self.contacts_created_total() + self.contacts_rejected_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// One-line-per-counter summary.
    pub fn summary(&self) -> String {
        format!(
            "Contacts Created: {}\n\
             Contacts Rejected: {} ({:.2}% rejection rate)\n\
             Letter Queries: {}",
            self.contacts_created_total(),
            self.contacts_rejected_total(),
            self.rejection_rate() * 100.0,
            self.letter_queries_total(),
        )
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();
        tracing::trace!(
            operation = self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );
        duration_ms
    }
}
