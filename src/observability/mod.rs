//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!
//! stdout is reserved for the verdict line read by the monitoring agent.
//! ```

pub mod logging;
