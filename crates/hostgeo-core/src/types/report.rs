use super::{CountryBorderList, LocationRecord};
use crate::hostname::Hostname;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Location and neighbors for a single host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostReport {
    /// Host that was looked up
    pub hostname: Hostname,

    /// Address the host resolved to
    pub ip: Ipv4Addr,

    /// Geolocation of `ip`
    pub location: LocationRecord,

    /// Neighboring countries; `None` when the lookup was skipped or failed
    #[serde(default)]
    pub borders: Option<CountryBorderList>,
}

/// Everything produced by one search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    /// Search generation this result belongs to
    pub generation: u64,

    /// Report for the host the user asked about
    pub primary: HostReport,

    /// Report for the server hosting embedded video on the page, if found
    #[serde(default)]
    pub media: Option<HostReport>,

    /// When the search completed
    pub looked_up_at: DateTime<Utc>,
}
