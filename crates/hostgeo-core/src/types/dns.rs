use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// DNS record type number for an A record
pub const RECORD_TYPE_A: u16 = 1;

/// DNS-over-HTTPS JSON response (`/resolve?name=...&type=A`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DohResponse {
    /// DNS response code (0 = NOERROR)
    #[serde(rename = "Status")]
    pub status: u32,

    /// Answer section, absent when there is nothing to return
    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

impl DohResponse {
    /// First A record in the answer set, if the query succeeded.
    ///
    /// CNAME and other records in the chain are skipped. A non-zero status or a
    /// missing answer section yields `None`.
    #[must_use]
    pub fn first_a_record(&self) -> Option<Ipv4Addr> {
        if self.status != 0 {
            return None;
        }

        self.answer
            .as_deref()?
            .iter()
            .find(|record| record.record_type == RECORD_TYPE_A)
            .and_then(|record| record.data.trim().parse().ok())
    }
}

/// Individual answer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DohAnswer {
    /// Owner name of the record
    #[serde(default)]
    pub name: Option<String>,

    /// Record type number (1 = A, 5 = CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: u16,

    /// Time to live in seconds
    #[serde(rename = "TTL", default)]
    pub ttl: Option<u32>,

    /// Record data (an address for A records)
    #[serde(default)]
    pub data: String,
}

/// Outcome of an A record lookup
///
/// A domain that does not resolve is a normal result, not an error. Transport
/// failures are kept apart from negative answers here even though the pipeline
/// treats both the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsOutcome {
    /// An A record was found
    Resolved(Ipv4Addr),
    /// The resolver answered but returned no usable A record
    NoRecord,
    /// The resolver could not be reached or returned garbage
    TransportError(String),
}

impl DnsOutcome {
    /// The resolved address, collapsing both kinds of miss into `None`
    #[must_use]
    pub const fn ip(&self) -> Option<Ipv4Addr> {
        match self {
            Self::Resolved(ip) => Some(*ip),
            _ => None,
        }
    }

    /// Returns true if an address was found
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_a_record_skips_cname() {
        let json = r#"{
            "Status": 0,
            "Answer": [
                {"name": "www.example.com.", "type": 5, "TTL": 300, "data": "example.com."},
                {"name": "example.com.", "type": 1, "TTL": 300, "data": "93.184.216.34"},
                {"name": "example.com.", "type": 1, "TTL": 300, "data": "93.184.216.35"}
            ]
        }"#;
        let response: DohResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.first_a_record(),
            Some(Ipv4Addr::new(93, 184, 216, 34))
        );
    }

    #[test]
    fn test_nxdomain_and_missing_answer() {
        let nxdomain: DohResponse = serde_json::from_str(r#"{"Status": 3}"#).unwrap();
        assert_eq!(nxdomain.first_a_record(), None);

        let empty: DohResponse = serde_json::from_str(r#"{"Status": 0}"#).unwrap();
        assert_eq!(empty.first_a_record(), None);

        let only_cname: DohResponse = serde_json::from_str(
            r#"{"Status": 0, "Answer": [{"type": 5, "data": "alias.example."}]}"#,
        )
        .unwrap();
        assert_eq!(only_cname.first_a_record(), None);
    }

    #[test]
    fn test_outcome_collapses_misses() {
        assert_eq!(DnsOutcome::NoRecord.ip(), None);
        assert_eq!(DnsOutcome::TransportError("refused".into()).ip(), None);
        assert!(DnsOutcome::Resolved(Ipv4Addr::LOCALHOST).is_resolved());
    }
}
