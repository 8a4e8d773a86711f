//! Snapshot file placement.
//!
//! Check plugins keep their state in a shared work directory, taken from
//! `MACKEREL_PLUGIN_WORKDIR` or the OS temp dir.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the plugin work directory.
pub const WORKDIR_ENV: &str = "MACKEREL_PLUGIN_WORKDIR";

/// Directory where plugins keep state between runs.
pub fn plugin_work_dir() -> PathBuf {
    work_dir_from(env::var_os(WORKDIR_ENV))
}

fn work_dir_from(value: Option<OsString>) -> PathBuf {
    value
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
}

/// File name of the snapshot for the service at `host:port`.
pub fn snapshot_file_name(host: &str, port: u16) -> String {
    format!("mackerel-check-fireworq-{}-{}", host, port)
}

/// Snapshot path used when no override is configured.
pub fn default_snapshot_path(host: &str, port: u16) -> PathBuf {
    plugin_work_dir().join(snapshot_file_name(host, port))
}
