//! Failure delta between two snapshots.
//!
//! # Rules
//! ```text
//! queue in current and previous:  failing iff current > previous
//! queue only in current:          failing iff current > 0
//! queue only in previous:         ignored
//! ```
//!
//! A counter that went down (service restart) is not a failure.

use super::Snapshot;

/// Names of the queues in `current` that accumulated new failures since `previous`.
///
/// Pure function; the result is in queue-name order.
pub fn failing_queues(current: &Snapshot, previous: &Snapshot) -> Vec<String> {
    current
        .iter()
        .filter(|(name, stats)| {
            let baseline = previous.get(name).map_or(0, |last| last.total_failures);
            stats.total_failures > baseline
        })
        .map(|(name, _)| name.to_string())
        .collect()
}
