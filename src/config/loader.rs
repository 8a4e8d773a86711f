//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::CheckConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Invalid service URL: {0}")]
    Url(#[from] url::ParseError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML config file without validating it.
///
/// Missing keys take their defaults so command-line overrides can still be
/// applied before validation.
pub fn read_config(path: &Path) -> Result<CheckConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CheckConfig = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

/// Validate a fully assembled configuration.
pub fn finalize(config: CheckConfig) -> Result<CheckConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_and_finalize_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("check.toml");
        fs::write(
            &path,
            "name = \"Jobs\"\nscheme = \"https\"\nhost = \"queue.internal\"\nport = 8443\ntempfile = \"/var/tmp/jobs\"\n",
        )
        .unwrap();

        let config = finalize(read_config(&path).unwrap()).unwrap();
        assert_eq!(config.name, "Jobs");
        assert_eq!(config.origin().unwrap().as_str(), "https://queue.internal:8443/");
        assert_eq!(config.snapshot_path(), Path::new("/var/tmp/jobs"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("check.toml");
        fs::write(&path, "port = \"not a number\"\n").unwrap();
        assert!(matches!(read_config(&path).unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("check.toml");
        fs::write(&path, "scheme = \"ftp\"\nport = 0\n").unwrap();

        let err = finalize(read_config(&path).unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: unsupported scheme \"ftp\" (expected http or https), port must be greater than 0"
        );
    }
}
