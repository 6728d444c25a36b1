use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// GeoIP service JSON response (`/{ip}/json/`)
///
/// Different providers spell the same concept differently, so both spellings
/// are captured and reconciled in [`GeoIpResponse::into_record`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoIpResponse {
    /// Queried address as echoed by the service
    #[serde(default)]
    pub ip: Option<String>,

    /// Full country name
    #[serde(default)]
    pub country_name: Option<String>,

    /// Country name or code, depending on the provider
    #[serde(default)]
    pub country: Option<String>,

    /// Country code used as the key for border resolution
    #[serde(default, alias = "countryCode")]
    pub country_code: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// Region/state name
    #[serde(default)]
    pub region: Option<String>,

    /// Owning organization
    #[serde(default)]
    pub org: Option<String>,

    /// Internet service provider
    #[serde(default)]
    pub isp: Option<String>,

    /// Error flag set by the service for reserved or unknown addresses
    #[serde(default)]
    pub error: Option<serde_json::Value>,

    /// Human-readable reason accompanying `error`
    #[serde(default)]
    pub reason: Option<String>,
}

impl GeoIpResponse {
    /// Returns true if the service flagged the query as failed
    #[must_use]
    pub fn is_error(&self) -> bool {
        match &self.error {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(s)) => !s.is_empty() && s != "false",
            Some(_) => true,
        }
    }

    /// Map the wire response into a [`LocationRecord`] for `ip`.
    ///
    /// `country_name` wins over `country` and `org` wins over `isp` when both
    /// are present. An embedded error flag becomes
    /// [`LookupError::UpstreamReported`] carrying the service's own reason.
    pub fn into_record(self, ip: Ipv4Addr) -> Result<LocationRecord> {
        if self.is_error() {
            return Err(LookupError::UpstreamReported {
                reason: self.reason.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(LocationRecord {
            ip,
            country_name: self.country_name.or(self.country),
            country_code: self.country_code,
            city: self.city,
            region: self.region,
            isp: self.org.or(self.isp),
        })
    }
}

/// Approximate location of an IPv4 address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Address that was located
    pub ip: Ipv4Addr,

    /// Country name shown to the user
    pub country_name: Option<String>,

    /// Country code (alpha-2 or alpha-3, whatever the provider returns)
    pub country_code: Option<String>,

    /// City name
    pub city: Option<String>,

    /// Region/state name
    pub region: Option<String>,

    /// Organization or ISP operating the address
    pub isp: Option<String>,
}

impl LocationRecord {
    /// One-line "city, region, country" summary, skipping missing parts
    #[must_use]
    pub fn summary(&self) -> String {
        [&self.city, &self.region, &self.country_name]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);

    #[test]
    fn test_prefers_country_name_and_org() {
        let response: GeoIpResponse = serde_json::from_str(
            r#"{
                "ip": "8.8.8.8",
                "country": "US",
                "country_name": "United States",
                "country_code": "US",
                "city": "Mountain View",
                "region": "California",
                "org": "GOOGLE",
                "isp": "Google LLC"
            }"#,
        )
        .unwrap();

        let record = response.into_record(IP).unwrap();
        assert_eq!(record.country_name.as_deref(), Some("United States"));
        assert_eq!(record.isp.as_deref(), Some("GOOGLE"));
        assert_eq!(record.summary(), "Mountain View, California, United States");
    }

    #[test]
    fn test_falls_back_to_country_and_isp() {
        let response: GeoIpResponse = serde_json::from_str(
            r#"{"country": "Germany", "countryCode": "DE", "isp": "Hetzner"}"#,
        )
        .unwrap();

        let record = response.into_record(IP).unwrap();
        assert_eq!(record.country_name.as_deref(), Some("Germany"));
        assert_eq!(record.country_code.as_deref(), Some("DE"));
        assert_eq!(record.isp.as_deref(), Some("Hetzner"));
        assert_eq!(record.summary(), "Germany");
    }

    #[test]
    fn test_embedded_error_carries_reason() {
        let response: GeoIpResponse = serde_json::from_str(
            r#"{"ip": "10.0.0.1", "error": true, "reason": "Reserved IP Address"}"#,
        )
        .unwrap();

        match response.into_record(Ipv4Addr::new(10, 0, 0, 1)) {
            Err(LookupError::UpstreamReported { reason }) => {
                assert_eq!(reason, "Reserved IP Address");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_false_error_flag_is_ignored() {
        let response: GeoIpResponse =
            serde_json::from_str(r#"{"error": false, "country": "France"}"#).unwrap();
        assert!(!response.is_error());
        assert!(response.into_record(IP).is_ok());
    }
}
