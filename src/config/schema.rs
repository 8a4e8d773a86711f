//! Configuration schema definitions.
//!
//! Every field can come from the TOML config file or the command line.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::paths;

/// Settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Display name printed in front of the verdict.
    pub name: String,

    /// URL scheme of the queue service (`http` or `https`).
    pub scheme: String,

    /// Host of the queue service.
    pub host: String,

    /// Port of the queue service.
    pub port: u16,

    /// Snapshot file override. When unset the path is derived from host and port.
    pub tempfile: Option<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            name: "Fireworq".to_string(),
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8080,
            tempfile: None,
        }
    }
}

impl CheckConfig {
    /// Origin of the queue service, e.g. `http://localhost:8080`.
    pub fn origin(&self) -> Result<Url, url::ParseError> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        Url::parse(&format!("{}://{}:{}", self.scheme, host, self.port))
    }

    /// Where the snapshot for this service lives.
    pub fn snapshot_path(&self) -> PathBuf {
        match &self.tempfile {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => paths::default_snapshot_path(&self.host, self.port),
        }
    }
}
