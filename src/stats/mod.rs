//! Queue statistics retrieval.
//!
//! # Data Flow
//! ```text
//! CheckConfig (scheme, host, port)
//!     → origin URL
//!     → fetcher.rs: GET <origin>/queues/stats
//!     → Snapshot (current counters)
//! ```
//!
//! # Design Decisions
//! - One request per run; no retries and no client-side timeout
//! - Transport errors, non-2xx responses and undecodable bodies are all fetch failures
//! - Nothing here touches local storage

pub mod fetcher;

pub use fetcher::StatsFetcher;
