//! Page fetching through a CORS-bypass proxy.

use crate::LookupClient;
use hostgeo_core::Result;
use tracing::debug;

/// Proxy page endpoints
pub struct PagesApi<'a> {
    client: &'a LookupClient,
}

impl<'a> PagesApi<'a> {
    pub(crate) fn new(client: &'a LookupClient) -> Self {
        Self { client }
    }

    /// Proxy URL that fetches `target`
    #[must_use]
    pub fn proxied_url(&self, target: &str) -> String {
        format!("{}{}", self.client.endpoints().proxy, urlencoding::encode(target))
    }

    /// Fetch the HTML of `target` through the proxy
    ///
    /// Proxies either return the page verbatim or wrap it in a JSON envelope
    /// with a `contents` field; both are accepted.
    pub async fn fetch_html(&self, target: &str) -> Result<String> {
        let url = self.proxied_url(target);
        let body = self.client.get_text(&url).await?;
        debug!(target, bytes = body.len(), "fetched page through proxy");
        Ok(unwrap_envelope(body))
    }
}

fn unwrap_envelope(body: String) -> String {
    if !body.trim_start().starts_with('{') {
        return body;
    }

    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("contents").and_then(|c| c.as_str()).map(String::from))
        .unwrap_or(body)
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RetryConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LookupClient {
        LookupClient::builder()
            .proxy_url(format!("{}/raw?url=", server.uri()))
            .retry(RetryConfig::disabled())
            .build()
            .unwrap()
    }

    #[test]
    fn test_unwrap_envelope() {
        let html = "<html><body></body></html>".to_string();
        assert_eq!(unwrap_envelope(html.clone()), html);

        let wrapped = serde_json::json!({ "contents": html, "status": {"http_code": 200} });
        assert_eq!(unwrap_envelope(wrapped.to_string()), html);

        let other_json = r#"{"error": "blocked"}"#.to_string();
        assert_eq!(unwrap_envelope(other_json.clone()), other_json);
    }

    #[tokio::test]
    async fn test_fetch_html_encodes_target() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/raw"))
            .and(query_param("url", "https://example.com/watch?v=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<video></video>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(
            client.pages().proxied_url("https://example.com/watch?v=1"),
            format!("{}/raw?url=https%3A%2F%2Fexample.com%2Fwatch%3Fv%3D1", server.uri())
        );

        let html = client
            .pages()
            .fetch_html("https://example.com/watch?v=1")
            .await
            .unwrap();
        assert_eq!(html, "<video></video>");
    }
}
