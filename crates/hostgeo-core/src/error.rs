use thiserror::Error;

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;

/// Errors that can occur while looking up a host
///
/// The first four variants are the ones a caller ever sees from the pipeline.
/// The remaining ones describe transport problems inside the HTTP client and
/// are folded into those four (or swallowed, for decoration lookups) before
/// they reach the caller.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Empty or unusable user input
    #[error("{0}")]
    InvalidInput(String),

    /// DNS lookup produced no usable A record
    #[error("Could not resolve IP address for this domain.")]
    Unresolved {
        /// Hostname that failed to resolve
        hostname: String,
    },

    /// GeoIP service could not be reached or answered with a failure status
    #[error("GeoIP service unavailable.")]
    ServiceUnavailable(String),

    /// GeoIP service answered but flagged the address as invalid or unknown
    #[error("Location lookup failed: {reason}")]
    UpstreamReported {
        /// Reason text copied from the service response
        reason: String,
    },

    /// Upstream API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimited,

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl LookupError {
    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::Timeout(_) | Self::Connection(_)
        )
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err = LookupError::Unresolved {
            hostname: "nope.invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "Could not resolve IP address for this domain."
        );

        let err = LookupError::UpstreamReported {
            reason: "Reserved IP Address".into(),
        };
        assert_eq!(err.to_string(), "Location lookup failed: Reserved IP Address");

        let err = LookupError::ServiceUnavailable("502".into());
        assert_eq!(err.to_string(), "GeoIP service unavailable.");
    }

    #[test]
    fn test_retryable() {
        assert!(LookupError::Timeout(30).is_retryable());
        assert!(LookupError::RateLimited.is_retryable());
        assert!(!LookupError::InvalidInput("x".into()).is_retryable());
        assert_eq!(LookupError::RateLimited.status_code(), Some(429));
    }
}
