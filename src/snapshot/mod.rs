//! Queue failure snapshots.
//!
//! # Data Flow
//! ```text
//! /queues/stats (current)      snapshot file (previous)
//!         │                            │
//!         │                     store.rs (load)
//!         ▼                            ▼
//!        delta.rs: failing_queues(current, previous)
//!         │
//!         ▼
//!     store.rs (save current as next baseline)
//! ```
//!
//! # Design Decisions
//! - Snapshots are ordered maps so listings are reproducible
//! - Only `total_failures` is modeled; unknown fields are dropped on decode
//! - An empty snapshot is valid and distinct from a load error

pub mod delta;
pub mod store;

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub use delta::failing_queues;
pub use store::SnapshotStore;

/// Counters for a single queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct QueueStats {
    /// Failures ever recorded for the queue.
    pub total_failures: i64,
}

impl QueueStats {
    pub fn new(total_failures: i64) -> Self {
        Self { total_failures }
    }
}

/// All queue counters observed at one point in time, keyed by queue name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    queues: BTreeMap<String, QueueStats>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&QueueStats> {
        self.queues.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Iterate queues in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueueStats)> {
        self.queues.iter().map(|(name, stats)| (name.as_str(), stats))
    }
}

impl<K: Into<String>> FromIterator<(K, QueueStats)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, QueueStats)>>(iter: I) -> Self {
        Self {
            queues: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
