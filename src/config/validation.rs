//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and clap handle syntactic)
//! - Validate value ranges (port > 0, known scheme)
//! - Make sure the service origin can be built
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CheckConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::CheckConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("unsupported scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("host must not be empty")]
    EmptyHost,

    #[error("host {0:?} is not a plain host name or address")]
    InvalidHost(String),

    #[error("port must be greater than 0")]
    ZeroPort,

    #[error("invalid service origin: {0}")]
    InvalidOrigin(String),
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &CheckConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    if !matches!(config.scheme.as_str(), "http" | "https") {
        errors.push(ValidationError::UnsupportedScheme(config.scheme.clone()));
    }

    if config.host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if config.host.contains('/') {
        errors.push(ValidationError::InvalidHost(config.host.clone()));
    }

    if config.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    // Only meaningful once the parts themselves are sane.
    if errors.is_empty() {
        match config.origin() {
            Ok(origin) if !origin_matches(&origin, config) => {
                errors.push(ValidationError::InvalidHost(config.host.clone()));
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::InvalidOrigin(e.to_string())),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The parsed origin must carry exactly the configured host and port; characters
/// such as `#`, `?` or `@` in the host would otherwise move them elsewhere.
fn origin_matches(origin: &Url, config: &CheckConfig) -> bool {
    let host = config.host.trim_start_matches('[').trim_end_matches(']');
    let parsed = origin
        .host_str()
        .map(|h| h.trim_start_matches('[').trim_end_matches(']'));

    origin.username().is_empty()
        && origin.password().is_none()
        && parsed.is_some_and(|parsed| parsed.eq_ignore_ascii_case(host))
        && origin.port_or_known_default() == Some(config.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CheckConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = CheckConfig {
            name: " ".into(),
            scheme: "ftp".into(),
            host: String::new(),
            port: 0,
            tempfile: None,
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyName,
                ValidationError::UnsupportedScheme("ftp".into()),
                ValidationError::EmptyHost,
                ValidationError::ZeroPort,
            ]
        );
    }

    #[test]
    fn test_host_with_path_rejected() {
        let config = CheckConfig {
            host: "example.com/admin".into(),
            ..CheckConfig::default()
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidHost("example.com/admin".into())]
        );
    }

    #[test]
    fn test_unparseable_origin_rejected() {
        let config = CheckConfig {
            host: "bad host".into(),
            ..CheckConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors.as_slice(), [ValidationError::InvalidOrigin(_)]));
    }

    #[test]
    fn test_host_that_swallows_port_rejected() {
        for host in ["queue#x", "queue?x", "user@queue"] {
            let config = CheckConfig {
                host: host.into(),
                port: 18080,
                ..CheckConfig::default()
            };
            assert_eq!(
                validate_config(&config).unwrap_err(),
                vec![ValidationError::InvalidHost(host.into())],
                "host {host:?}"
            );
        }
    }

    #[test]
    fn test_ipv6_and_mixed_case_hosts_accepted() {
        for host in ["::1", "[::1]", "Queue.Internal"] {
            let config = CheckConfig {
                host: host.into(),
                ..CheckConfig::default()
            };
            assert!(validate_config(&config).is_ok(), "host {host:?}");
        }
    }

    #[test]
    fn test_https_accepted() {
        let config = CheckConfig {
            scheme: "https".into(),
            port: 443,
            ..CheckConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
