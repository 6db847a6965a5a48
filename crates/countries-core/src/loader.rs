//! Data loader for the country collection.
//!
//! One GET against the configured endpoint. Network errors, non-2xx
//! statuses and malformed payloads all surface as [`LoadError`].

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::DirectoryConfig;
use crate::error::{LoadError, Result};
use crate::flags;
use crate::model::Country;

/// HTTP client for the dataset and flag images
#[derive(Debug, Clone)]
pub struct CountryClient {
    client: Client,
    endpoint: String,
}

impl CountryClient {
    /// Build a client from config.
    ///
    /// No timeout is applied unless `request_timeout_secs` is set, so a
    /// hung request leaves the directory loading.
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full country collection
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        debug!(endpoint = %self.endpoint, "fetching countries");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let countries = parse_countries(&body)?;
        info!(count = countries.len(), "countries loaded");
        Ok(countries)
    }

    /// Probe one flag image; see [`flags::probe_flag`]
    pub async fn probe_flag(&self, url: &str) -> Result<()> {
        flags::probe_flag(&self.client, url).await
    }
}

/// Decode a JSON array of countries
pub fn parse_countries(body: &str) -> Result<Vec<Country>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_countries("[]").unwrap(), Vec::<Country>::new());
    }

    #[test]
    fn test_parse_rejects_object() {
        let err = parse_countries(r#"{"status": 404, "message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        let err = parse_countries(r#"[{"population": 3}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = DirectoryConfig {
            endpoint: "http://127.0.0.1:9/all".to_string(),
            ..Default::default()
        };
        let client = CountryClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/all");
    }
}
