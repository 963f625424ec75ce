//! Feed client error types.

/// Errors that can occur when pulling the GBFS feed.
///
/// Any of these is an "upstream unavailable" condition for the provider
/// facade, which converts it to an empty vehicle list rather than letting
/// it cross the public boundary.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the GBFS schema
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "feed error 503: Service Unavailable");

        let err = FeedError::Json {
            message: "missing field `station_id`".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("station_id"));
    }
}
