//! GeoIP lookups.

use crate::LookupClient;
use hostgeo_core::{GeoIpResponse, LocationRecord, LookupError, Result};
use std::net::Ipv4Addr;
use tracing::{debug, warn};

/// GeoIP endpoints
pub struct GeoApi<'a> {
    client: &'a LookupClient,
}

impl<'a> GeoApi<'a> {
    pub(crate) fn new(client: &'a LookupClient) -> Self {
        Self { client }
    }

    /// Raw GeoIP response for `ip`
    pub async fn raw(&self, ip: Ipv4Addr) -> Result<GeoIpResponse> {
        self.client
            .get_json(&self.client.endpoints().geo, &format!("/{ip}/json/"), &[])
            .await
    }

    /// Locate `ip`
    ///
    /// Any failure to get a decodable answer is
    /// [`LookupError::ServiceUnavailable`]; an answer that carries its own
    /// error flag is [`LookupError::UpstreamReported`].
    pub async fn locate(&self, ip: Ipv4Addr) -> Result<LocationRecord> {
        let response = self.raw(ip).await.map_err(|e| {
            warn!(%ip, error = %e, "GeoIP request failed");
            LookupError::ServiceUnavailable(e.to_string())
        })?;

        let record = response.into_record(ip)?;
        debug!(%ip, country = ?record.country_name, "located address");
        Ok(record)
    }
}
