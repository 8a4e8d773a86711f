//! Command-line interface.

use std::ffi::OsString;
use std::path::PathBuf;
use clap::Parser;

use crate::config::loader::{finalize, read_config, ConfigError};
use crate::config::CheckConfig;

#[derive(Debug, Default, Parser)]
#[command(name = "check-fireworq", version)]
#[command(about = "Report Fireworq queues that recorded new job failures since the last run", long_about = None)]
pub struct Cli {
    /// Name shown in front of the check result [default: Fireworq]
    #[arg(long)]
    pub name: Option<String>,

    /// Scheme of the Fireworq server [default: http]
    #[arg(long)]
    pub scheme: Option<String>,

    /// Host of the Fireworq server [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// Port of the Fireworq server [default: 8080]
    #[arg(long)]
    pub port: Option<u16>,

    /// File holding the counters of the previous run
    #[arg(long)]
    pub tempfile: Option<PathBuf>,

    /// TOML file with the same keys as the flags above; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Name to report under when the configuration itself cannot be built.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| CheckConfig::default().name)
    }

    /// Overlay the flags on `config`.
    pub fn apply(self, config: &mut CheckConfig) {
        if let Some(name) = self.name {
            config.name = name;
        }
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(tempfile) = self.tempfile {
            config.tempfile = Some(tempfile);
        }
    }

    /// Build the validated configuration: defaults, then config file, then flags.
    pub fn into_config(self) -> Result<CheckConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => CheckConfig::default(),
        };
        self.apply(&mut config);
        finalize(config)
    }
}

/// Best-effort `--name` lookup for when the full argument list fails to parse.
pub fn name_from_args<I, T>(args: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut name = None;
    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        let arg = arg.to_string_lossy().into_owned();
        if arg == "--name" {
            name = args.next().map(|value| value.to_string_lossy().into_owned());
        } else if let Some(value) = arg.strip_prefix("--name=") {
            name = Some(value.to_string());
        }
    }

    Cli {
        name,
        ..Cli::default()
    }
    .display_name()
}
