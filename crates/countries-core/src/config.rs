//! Configuration for the countries directory
//!
//! Read from `{config_dir}/countries/config.toml` when it exists. Every key
//! is optional; `COUNTRIES_ENDPOINT` overrides the endpoint.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Default dataset endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v2/all?fields=name,capital,population,flag,languages";

/// Cards per page
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "COUNTRIES_ENDPOINT";

/// Directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// URL returning a JSON array of countries
    pub endpoint: String,
    /// Initial display count and load-more increment
    pub page_size: usize,
    /// Whether to check flag URLs and fall back to the placeholder on failure
    pub probe_flags: bool,
    /// Optional request timeout; unset means wait indefinitely
    pub request_timeout_secs: Option<u64>,
    /// User-Agent header for outbound requests
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            probe_flags: true,
            request_timeout_secs: None,
            user_agent: concat!("countries/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load from a file; a missing file yields defaults
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Standard config location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("countries").join("config.toml"))
    }

    /// Load from the standard location, apply the environment override,
    /// and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::from_path(&path)?
            }
            None => Self::default(),
        };
        config.apply_env(std::env::var(ENDPOINT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply an endpoint override; empty values are ignored
    pub fn apply_env(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            self.endpoint = endpoint;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("endpoint".to_string()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::OutOfRange(
                "page_size must be positive".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::OutOfRange(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 8);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = DirectoryConfig::from_toml("probe_flags = false\n").unwrap();
        assert!(!config.probe_flags);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = DirectoryConfig::from_toml("page_size = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));
    }

    #[test]
    fn test_env_override() {
        let mut config = DirectoryConfig::default();
        config.apply_env(Some(String::new()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        config.apply_env(Some("http://localhost:1/all".to_string()));
        assert_eq!(config.endpoint, "http://localhost:1/all");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            DirectoryConfig::from_toml("page_size = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
