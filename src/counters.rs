//! # Job Counters
//!
//! Read-only snapshot of the grouped numeric counters a job's tasks
//! accumulate. The engine attaches a snapshot to a [`crate::job::Job`] as
//! the job runs; this crate only reads from it (plus the `record` hook the
//! engine side and tests use to populate one).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Grouped (group name → counter name → value) counter snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counters {
    groups: BTreeMap<String, BTreeMap<String, u64>>,
}

impl Counters {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a single counter value.
    pub fn find_counter(&self, group: &str, counter: &str) -> Option<u64> {
        self.groups.get(group).and_then(|g| g.get(counter)).copied()
    }

    /// Record a counter value, replacing any previous value.
    pub fn record(&mut self, group: impl Into<String>, counter: impl Into<String>, value: u64) {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(counter.into(), value);
    }

    /// Sum of all counters in one group. Zero for an unknown group.
    pub fn total(&self, group: &str) -> u64 {
        self.groups
            .get(group)
            .map(|g| g.values().sum())
            .unwrap_or(0)
    }

    /// Whether the snapshot holds no counters at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
