//! Shared HTTP client for all upstream lookup services.

use crate::api::{CountriesApi, DnsApi, GeoApi, PagesApi};
use crate::config::{Endpoints, RetryConfig};
use hostgeo_core::{LookupError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the DNS, GeoIP, country metadata and proxy services
#[derive(Clone)]
pub struct LookupClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoints: Endpoints,
    retry_config: RetryConfig,
    timeout: Duration,
}

impl LookupClient {
    /// Create a client for the public services using default settings
    pub fn new() -> Result<Self> {
        LookupClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> LookupClientBuilder {
        LookupClientBuilder::new()
    }

    /// Access the DNS-over-HTTPS resolver
    #[must_use]
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Access the GeoIP service
    #[must_use]
    pub fn geo(&self) -> GeoApi<'_> {
        GeoApi::new(self)
    }

    /// Access the country metadata service
    #[must_use]
    pub fn countries(&self) -> CountriesApi<'_> {
        CountriesApi::new(self)
    }

    /// Access page fetching through the CORS proxy
    #[must_use]
    pub fn pages(&self) -> PagesApi<'_> {
        PagesApi::new(self)
    }

    /// Configured service endpoints
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// Perform a GET request and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = Self::build_url(base, path, params)?;
        let body = self.get_with_retry(url.as_str()).await?;
        serde_json::from_str(&body).map_err(LookupError::Json)
    }

    /// Perform a GET request on an already-assembled URL and return the body
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        self.get_with_retry(url).await
    }

    async fn get_with_retry(&self, url: &str) -> Result<String> {
        let retry = &self.inner.retry_config;
        let mut attempt = 0;

        loop {
            match self.get_once(url).await {
                Err(e) if attempt < retry.max_retries && Self::should_retry(retry, &e) => {
                    let backoff = retry.backoff_for(attempt);
                    warn!(url = %url, error = %e, ?backoff, "retrying request");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn should_retry(retry: &RetryConfig, err: &LookupError) -> bool {
        match err {
            LookupError::RateLimited => retry.retry_on_rate_limit,
            other => other.is_retryable(),
        }
    }

    async fn get_once(&self, url: &str) -> Result<String> {
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(Self::status_error(status.as_u16(), body))
        }
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout(self.inner.timeout.as_secs())
        } else if err.is_connect() {
            LookupError::Connection(err.to_string())
        } else {
            LookupError::Http(err.to_string())
        }
    }

    /// Convert a non-success status into an error
    fn status_error(status: u16, body: String) -> LookupError {
        // Try to parse error message from JSON
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                ["message", "reason", "error"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(String::from))
            })
            .unwrap_or(body);

        if status == 429 {
            warn!("rate limited by upstream service");
            LookupError::RateLimited
        } else {
            LookupError::Api {
                code: status,
                message,
            }
        }
    }

    /// Join a base URL and path and append query parameters
    pub(crate) fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", base.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw).map_err(|e| LookupError::InvalidUrl(format!("{raw}: {e}")))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }
}

/// Builder for configuring a [`LookupClient`]
pub struct LookupClientBuilder {
    endpoints: Endpoints,
    timeout: Duration,
    user_agent: String,
    retry_config: RetryConfig,
}

impl Default for LookupClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupClientBuilder {
    /// Create a builder pointing at the public services
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("hostgeo/{}", env!("CARGO_PKG_VERSION")),
            retry_config: RetryConfig::default(),
        }
    }

    /// Replace all endpoints at once
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the DNS-over-HTTPS base URL
    #[must_use]
    pub fn dns_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.dns = url.into();
        self
    }

    /// Set the GeoIP base URL
    #[must_use]
    pub fn geo_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.geo = url.into();
        self
    }

    /// Set the country metadata base URL
    #[must_use]
    pub fn countries_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.countries = url.into();
        self
    }

    /// Set the CORS proxy prefix
    #[must_use]
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.proxy = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<LookupClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| LookupError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(LookupClient {
            inner: Arc::new(ClientInner {
                http,
                endpoints: self.endpoints,
                retry_config: self.retry_config,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_url() {
        let url = LookupClient::build_url(
            "https://dns.example/",
            "/resolve",
            &[("name", "example.com"), ("type", "A")],
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://dns.example/resolve?name=example.com&type=A");

        assert!(matches!(
            LookupClient::build_url("not a url", "/x", &[]),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_status_error_extracts_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({
                    "status": 404,
                    "message": "Not Found"
                })),
            )
            .mount(&server)
            .await;

        let client = LookupClient::builder()
            .retry(RetryConfig::disabled())
            .build()
            .unwrap();
        let err = client
            .get_text(&format!("{}/boom", server.uri()))
            .await
            .unwrap_err();

        match err {
            LookupError::Api { code, message } => {
                assert_eq!(code, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_retries_rate_limited_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/busy"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/busy"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = LookupClient::builder()
            .retry(RetryConfig::new().initial_backoff(Duration::from_millis(1)))
            .build()
            .unwrap();
        let body = client
            .get_text(&format!("{}/busy", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }
}
