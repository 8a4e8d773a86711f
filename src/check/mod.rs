//! Check execution.
//!
//! # Data Flow
//! ```text
//! runner.rs:
//!     fetch current   ─ error → UNKNOWN
//!     load previous   ─ error → UNKNOWN
//!     failing_queues
//!     save current    ─ error → UNKNOWN
//!     → verdict.rs: OK (no failing queues) / CRITICAL (names joined by ' ')
//! ```
//!
//! # Design Decisions
//! - Steps run strictly in sequence and short-circuit on the first error
//! - A save failure downgrades the run to UNKNOWN even after a successful delta
//! - Nothing is persisted unless fetch and load both succeed

pub mod runner;
pub mod verdict;

pub use runner::CheckRunner;
pub use verdict::{Status, Verdict};
