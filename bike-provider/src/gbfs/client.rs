//! GBFS feed HTTP client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::domain::FeedSnapshot;

use super::StationFeed;
use super::error::FeedError;
use super::types::{StationInformationFeed, StationStatusFeed};

/// Default base URL for the MEVO GBFS feed.
const DEFAULT_BASE_URL: &str = "https://gbfs.urbansharing.com/rowermevo.pl";

/// Header the feed operator uses to identify polling clients.
const CLIENT_IDENTIFIER_HEADER: &str = "Client-Identifier";

/// Default value for the client-identifier header.
const DEFAULT_CLIENT_IDENTIFIER: &str = "co2-bike-calculator";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct GbfsConfig {
    /// Base URL of the feed (defaults to the MEVO production feed)
    pub base_url: String,
    /// Value sent in the `Client-Identifier` header
    pub client_identifier: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl GbfsConfig {
    /// Create a config with the production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_identifier: DEFAULT_CLIENT_IDENTIFIER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom client identifier.
    pub fn with_client_identifier(mut self, id: impl Into<String>) -> Self {
        self.client_identifier = id.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GbfsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the two GBFS documents this provider consumes.
///
/// One snapshot fetch pulls `station_information.json` and
/// `station_status.json` concurrently, so the pair always comes from the
/// same refresh.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
    base_url: String,
}

impl GbfsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GbfsConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        let identifier =
            HeaderValue::from_str(&config.client_identifier).map_err(|_| FeedError::Api {
                status: 0,
                message: "invalid client identifier".to_string(),
            })?;
        headers.insert(CLIENT_IDENTIFIER_HEADER, identifier);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch and deserialize one feed document.
    async fn fetch_document<T: DeserializeOwned>(&self, name: &str) -> Result<T, FeedError> {
        let url = format!("{}/{}", self.base_url, name);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Pull both feed documents as one matched pair.
    pub async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        let (info, status) = futures::try_join!(
            self.fetch_document::<StationInformationFeed>("station_information.json"),
            self.fetch_document::<StationStatusFeed>("station_status.json"),
        )?;

        Ok(FeedSnapshot {
            info: info.into_domain(),
            status: status.into_domain(),
        })
    }
}

impl StationFeed for GbfsClient {
    fn fetch_snapshot(
        &self,
    ) -> impl std::future::Future<Output = Result<FeedSnapshot, FeedError>> + Send {
        GbfsClient::fetch_snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GbfsConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_builders() {
        let config = GbfsConfig::new()
            .with_base_url("http://localhost:8000")
            .with_client_identifier("test-suite")
            .with_timeout(1);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.client_identifier, "test-suite");
        assert_eq!(config.timeout_secs, 1);
    }

    #[test]
    fn rejects_unprintable_client_identifier() {
        let config = GbfsConfig::new().with_client_identifier("bad\nvalue");
        assert!(GbfsClient::new(config).is_err());
    }
}
