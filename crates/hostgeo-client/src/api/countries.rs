//! Country metadata and border resolution.

use crate::LookupClient;
use hostgeo_core::{
    BorderEntry, CountryBorderList, CountryInfo, CountryResponse, LookupError, Result,
};
use tracing::{debug, warn};

/// Country metadata endpoints
pub struct CountriesApi<'a> {
    client: &'a LookupClient,
}

impl<'a> CountriesApi<'a> {
    pub(crate) fn new(client: &'a LookupClient) -> Self {
        Self { client }
    }

    /// Metadata for a single country by alpha-2 or alpha-3 code
    pub async fn country(&self, code: &str) -> Result<CountryInfo> {
        let response: CountryResponse = self
            .client
            .get_json(
                &self.client.endpoints().countries,
                &format!("/alpha/{code}"),
                &[],
            )
            .await?;

        response.into_first().ok_or_else(|| LookupError::Api {
            code: 404,
            message: format!("no country with code {code}"),
        })
    }

    /// Metadata for several countries in one request
    ///
    /// Records come back in whatever order the service chooses.
    pub async fn by_codes(&self, codes: &[String]) -> Result<Vec<CountryInfo>> {
        let joined = codes.join(",");
        self.client
            .get_json(
                &self.client.endpoints().countries,
                "/alpha",
                &[("codes", joined.as_str())],
            )
            .await
    }

    /// Neighbors of the country identified by `code`
    ///
    /// Border data is decoration: if the country itself cannot be fetched the
    /// failure is logged and `None` is returned. A country without land
    /// borders yields the single [`BorderEntry::NoLandBorders`] entry. If only
    /// the neighbor batch fails, the country is kept with an empty list.
    pub async fn borders(&self, code: &str) -> Option<CountryBorderList> {
        let country = match self.country(code).await {
            Ok(country) => country,
            Err(e) => {
                warn!(code, error = %e, "error fetching country metadata");
                return None;
            }
        };

        let mut list = CountryBorderList {
            source_code: code.to_string(),
            country_name: country.name.common.clone(),
            neighbors: Vec::new(),
        };

        let codes = country.border_codes();
        if codes.is_empty() {
            debug!(code, "country has no land borders");
            list.neighbors.push(BorderEntry::NoLandBorders);
            return Some(list);
        }

        match self.by_codes(codes).await {
            Ok(neighbors) => {
                list.neighbors = neighbors
                    .into_iter()
                    .map(|n| BorderEntry::Country(n.name.common))
                    .collect();
            }
            Err(e) => warn!(code, error = %e, "error fetching neighbors"),
        }

        Some(list)
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
            .countries_url(server.uri())
            .retry(RetryConfig::disabled())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_borders_keep_batch_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alpha/CH"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": {"common": "Switzerland"}, "cca2": "CH", "borders": ["FRA", "DEU"]}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/alpha"))
            .and(query_param("codes", "FRA,DEU"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": {"common": "Germany"}},
                {"name": {"common": "France"}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let list = client_for(&server).countries().borders("CH").await.unwrap();
        assert_eq!(list.country_name, "Switzerland");
        assert_eq!(
            list.neighbors,
            vec![
                BorderEntry::Country("Germany".into()),
                BorderEntry::Country("France".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_island_yields_sentinel_without_batch_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alpha/IS"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": {"common": "Iceland"}, "borders": []}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let list = client_for(&server).countries().borders("IS").await.unwrap();
        assert!(list.has_no_land_borders());
    }

    #[tokio::test]
    async fn test_metadata_failure_is_silent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client_for(&server).countries().borders("XX").await.is_none());
    }

    #[tokio::test]
    async fn test_batch_failure_keeps_country() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alpha/AT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": {"common": "Austria"}, "borders": ["CZE"]}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/alpha"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let list = client_for(&server).countries().borders("AT").await.unwrap();
        assert_eq!(list.country_name, "Austria");
        assert!(list.neighbors.is_empty());
    }
}
