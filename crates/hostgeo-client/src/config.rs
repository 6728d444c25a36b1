//! Client configuration types.

use std::time::Duration;

/// Public DNS-over-HTTPS resolver
pub const DEFAULT_DNS_URL: &str = "https://dns.google";

/// Public GeoIP service
pub const DEFAULT_GEO_URL: &str = "https://ipapi.co";

/// Public country metadata service
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";

/// CORS-bypass proxy; the percent-encoded target URL is appended to it
pub const DEFAULT_PROXY_URL: &str = "https://corsproxy.io/?";

/// Base URLs of the upstream services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// DNS-over-HTTPS base (`{dns}/resolve`)
    pub dns: String,

    /// GeoIP base (`{geo}/{ip}/json/`)
    pub geo: String,

    /// Country metadata base (`{countries}/alpha/{code}`)
    pub countries: String,

    /// Proxy prefix for page fetches
    pub proxy: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dns: DEFAULT_DNS_URL.to_string(),
            geo: DEFAULT_GEO_URL.to_string(),
            countries: DEFAULT_COUNTRIES_URL.to_string(),
            proxy: DEFAULT_PROXY_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every JSON service at the same base URL (useful for testing)
    #[must_use]
    pub fn all(base: &str) -> Self {
        Self {
            dns: base.to_string(),
            geo: base.to_string(),
            countries: base.to_string(),
            proxy: format!("{}/proxy?url=", base.trim_end_matches('/')),
        }
    }
}

/// Retry configuration for transient failures
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first request
    pub max_retries: u32,

    /// Initial backoff duration
    pub initial_backoff: Duration,

    /// Maximum backoff duration
    pub max_backoff: Duration,

    /// Whether to retry on HTTP 429
    pub retry_on_rate_limit: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Two retries, starting at 250ms
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(5),
            retry_on_rate_limit: true,
        }
    }

    /// A single attempt with no retries
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new().max_retries(0)
    }

    /// Set maximum retries
    #[must_use]
    pub const fn max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set initial backoff duration
    #[must_use]
    pub const fn initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set maximum backoff duration
    #[must_use]
    pub const fn max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Backoff before retry number `attempt` (0-based), doubling each time
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let retry = RetryConfig::new()
            .initial_backoff(Duration::from_millis(100))
            .max_backoff(Duration::from_millis(350));

        assert_eq!(retry.backoff_for(0), Duration::from_millis(100));
        assert_eq!(retry.backoff_for(1), Duration::from_millis(200));
        assert_eq!(retry.backoff_for(2), Duration::from_millis(350));
        assert_eq!(retry.backoff_for(40), Duration::from_millis(350));
    }

    #[test]
    fn test_endpoints_all() {
        let endpoints = Endpoints::all("http://127.0.0.1:9000/");
        assert_eq!(endpoints.dns, "http://127.0.0.1:9000/");
        assert_eq!(endpoints.proxy, "http://127.0.0.1:9000/proxy?url=");
    }
}
