//! Fireworq queue failure check.
//!
//! Compares the failure counters reported by a Fireworq server with the
//! counters saved by the previous run and reports the queues whose counters
//! went up.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod snapshot;
pub mod stats;

pub use check::{CheckRunner, Status, Verdict};
pub use config::CheckConfig;
pub use error::{CheckError, FetchError, LoadError, SaveError};
pub use snapshot::{failing_queues, QueueStats, Snapshot, SnapshotStore};
pub use stats::StatsFetcher;
