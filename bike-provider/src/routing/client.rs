//! OSRM road-routing HTTP client.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::Coordinates;

use super::RouteBackend;
use super::error::RoutingError;

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL of the routing service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a config with the public-server defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Driving distance and duration along a computed road route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    pub distance_km: f64,
    pub duration_hours: f64,
}

// OSRM response shape: distance in metres, duration in seconds.

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<RouteDto>,
}

#[derive(Debug, Deserialize)]
struct RouteDto {
    distance: f64,
    duration: f64,
}

/// HTTP client for the OSRM `route` service.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Query the driving route from `from` to `to`.
    ///
    /// Success requires HTTP 2xx, `code == "Ok"`, and at least one route;
    /// anything else is an error for the caller (the cached router) to
    /// absorb into its fallback.
    pub async fn route(&self, from: Coordinates, to: Coordinates) -> Result<RouteLeg, RoutingError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url, from.longitude, from.latitude, to.longitude, to.latitude
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: RouteResponse = serde_json::from_str(&body).map_err(|e| RoutingError::Json {
            message: e.to_string(),
        })?;

        if parsed.code != "Ok" {
            return Err(RoutingError::NoRoute { code: parsed.code });
        }

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRoute {
                code: "Ok".to_string(),
            })?;

        Ok(RouteLeg {
            distance_km: route.distance / 1000.0,
            duration_hours: route.duration / 3600.0,
        })
    }
}

impl RouteBackend for OsrmClient {
    fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> impl std::future::Future<Output = Result<RouteLeg, RoutingError>> + Send {
        OsrmClient::route(self, from, to)
    }
}
