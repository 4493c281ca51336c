//! Logical-entity suppression for rules.
//!
//! Tracks which logical ids a rule instance has already evaluated, so that a
//! way delivered as many segments is checked once. Only ids are stored; the
//! set grows for the lifetime of the rule and is never pruned.

use dashmap::DashSet;

/// Concurrent, insert-only set of logical ids.
///
/// Shared by reference across worker threads. `insert` is atomic, so two
/// segments of the same entity racing each other see exactly one winner.
#[derive(Debug, Default)]
pub struct SeenSet {
    ids: DashSet<i64>,
}

impl SeenSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `logical_id`.
    ///
    /// Returns `true` if this call added it, `false` if it was already there.
    pub fn insert(&self, logical_id: i64) -> bool {
        self.ids.insert(logical_id)
    }

    /// Check whether `logical_id` has been recorded.
    pub fn contains(&self, logical_id: i64) -> bool {
        self.ids.contains(&logical_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
