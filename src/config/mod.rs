//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → command-line overrides (cli.rs)
//!     → validation.rs (semantic checks)
//!     → CheckConfig (validated, immutable)
//!     → paths.rs resolves the snapshot location
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the check runs with no arguments
//! - Validation separates syntactic (serde/clap) from semantic checks
//! - Any configuration error is reported as an UNKNOWN verdict

pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::CheckConfig;
pub use validation::{validate_config, ValidationError};
