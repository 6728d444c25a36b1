//! DNS-over-HTTPS resolution.

use crate::LookupClient;
use hostgeo_core::{DnsOutcome, DohResponse, Hostname, Result};
use tracing::{debug, warn};

/// DNS-over-HTTPS endpoints
pub struct DnsApi<'a> {
    client: &'a LookupClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) fn new(client: &'a LookupClient) -> Self {
        Self { client }
    }

    /// Raw A record query for `hostname`
    pub async fn query(&self, hostname: &Hostname) -> Result<DohResponse> {
        self.client
            .get_json(
                &self.client.endpoints().dns,
                "/resolve",
                &[("name", hostname.as_str()), ("type", "A")],
            )
            .await
    }

    /// Resolve `hostname` to its first IPv4 address
    ///
    /// Never fails: an unknown domain is [`DnsOutcome::NoRecord`] and an
    /// unreachable resolver is [`DnsOutcome::TransportError`].
    pub async fn resolve_a(&self, hostname: &Hostname) -> DnsOutcome {
        match self.query(hostname).await {
            Ok(response) => match response.first_a_record() {
                Some(ip) => {
                    debug!(%hostname, %ip, "resolved A record");
                    DnsOutcome::Resolved(ip)
                }
                None => {
                    debug!(%hostname, status = response.status, "no A record");
                    DnsOutcome::NoRecord
                }
            },
            Err(e) => {
                warn!(%hostname, error = %e, "DNS resolver request failed");
                DnsOutcome::TransportError(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RetryConfig;
    use std::net::Ipv4Addr;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LookupClient {
        LookupClient::builder()
            .dns_url(server.uri())
            .retry(RetryConfig::disabled())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_a_picks_first_a_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resolve"))
            .and(query_param("name", "www.example.com"))
            .and(query_param("type", "A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Status": 0,
                "Answer": [
                    {"name": "www.example.com.", "type": 5, "TTL": 60, "data": "example.com."},
                    {"name": "example.com.", "type": 1, "TTL": 60, "data": "203.0.113.7"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let host = Hostname::parse("www.example.com").unwrap();
        let outcome = client_for(&server).dns().resolve_a(&host).await;
        assert_eq!(outcome, DnsOutcome::Resolved(Ipv4Addr::new(203, 0, 113, 7)));
    }

    #[tokio::test]
    async fn test_nxdomain_is_no_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resolve"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Status": 3
            })))
            .mount(&server)
            .await;

        let host = Hostname::parse("does-not-exist.invalid").unwrap();
        let outcome = client_for(&server).dns().resolve_a(&host).await;
        assert_eq!(outcome, DnsOutcome::NoRecord);
    }

    #[tokio::test]
    async fn test_server_error_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resolve"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let host = Hostname::parse("example.com").unwrap();
        let outcome = client_for(&server).dns().resolve_a(&host).await;
        assert!(matches!(outcome, DnsOutcome::TransportError(_)));
        assert_eq!(outcome.ip(), None);
    }
}
