//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable             | Default | Meaning                                   |
//! |----------------------|---------|-------------------------------------------|
//! | `QUICKMART_LOG`      | `warn`  | Log filter when `RUST_LOG` is not set     |
//! | `QUICKMART_CATALOG`  | unset   | JSON catalog file replacing the standard  |
//!
//! `RUST_LOG` always wins over `QUICKMART_LOG` (see [`crate::init_tracing`]).

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Log filter used when neither `RUST_LOG` nor `QUICKMART_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Optional catalog file; `None` means the standard catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            catalog_path: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("QUICKMART_LOG")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        if EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidValue("QUICKMART_LOG".to_string()));
        }

        let catalog_path = match lookup("QUICKMART_CATALOG") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("QUICKMART_CATALOG".to_string()));
            }
            Some(value) => Some(PathBuf::from(value.trim())),
            None => None,
        };

        Ok(CliConfig {
            log_filter,
            catalog_path,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("QUICKMART_LOG", "quickmart_cli=debug"),
            ("QUICKMART_CATALOG", " /tmp/catalog.json "),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "quickmart_cli=debug");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = CliConfig::from_lookup(lookup(&[("QUICKMART_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_lookup(lookup(&[("QUICKMART_LOG", "quickmart=loud")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for QUICKMART_LOG");

        let err = CliConfig::from_lookup(lookup(&[("QUICKMART_CATALOG", "")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for QUICKMART_CATALOG");
    }
}
