//! Routing client error types.

/// Errors that can occur when querying the road-routing service.
///
/// None of these cross the provider facade: the cached router converts
/// every failure into a great-circle fallback.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Routing service returned a non-success status
    #[error("routing error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Service answered but found no route (`code` != "Ok" or empty routes)
    #[error("no route found (code {code})")]
    NoRoute { code: String },
}
