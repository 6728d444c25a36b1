use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for a country with no land neighbors
pub const NO_LAND_BORDERS: &str = "No neighboring countries found.";

/// Country metadata record (`/alpha/{code}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryInfo {
    /// Country names
    pub name: CountryName,

    /// ISO 3166-1 alpha-2 code
    #[serde(default)]
    pub cca2: Option<String>,

    /// ISO 3166-1 alpha-3 code
    #[serde(default)]
    pub cca3: Option<String>,

    /// Alpha-3 codes of countries sharing a land border
    #[serde(default)]
    pub borders: Option<Vec<String>>,
}

impl CountryInfo {
    /// Border codes, empty when the field is missing
    #[must_use]
    pub fn border_codes(&self) -> &[String] {
        self.borders.as_deref().unwrap_or_default()
    }
}

/// Common and official country names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryName {
    /// Name in everyday use
    pub common: String,

    /// Formal name
    #[serde(default)]
    pub official: Option<String>,
}

/// The metadata endpoint answers with an array for code lookups, but some
/// mirrors return the bare object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountryResponse {
    /// List of matching countries
    Many(Vec<CountryInfo>),
    /// Single country
    One(Box<CountryInfo>),
}

impl CountryResponse {
    /// First country in the response
    #[must_use]
    pub fn into_first(self) -> Option<CountryInfo> {
        match self {
            Self::Many(list) => list.into_iter().next(),
            Self::One(info) => Some(*info),
        }
    }
}

/// One line of a border list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderEntry {
    /// A neighboring country, by common name
    Country(String),
    /// The country was looked up and has no land neighbors
    NoLandBorders,
}

impl fmt::Display for BorderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country(name) => f.write_str(name),
            Self::NoLandBorders => f.write_str(NO_LAND_BORDERS),
        }
    }
}

/// Neighbors of a country, in the order the metadata service returned them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryBorderList {
    /// Code the lookup was keyed on
    pub source_code: String,

    /// Common name of the source country
    pub country_name: String,

    /// Neighbor entries; `[NoLandBorders]` for island nations
    pub neighbors: Vec<BorderEntry>,
}

impl CountryBorderList {
    /// Returns true if the country was confirmed to have no land borders
    #[must_use]
    pub fn has_no_land_borders(&self) -> bool {
        self.neighbors == [BorderEntry::NoLandBorders]
    }

    /// Names of the neighboring countries, skipping the sentinel
    pub fn neighbor_names(&self) -> impl Iterator<Item = &str> {
        self.neighbors.iter().filter_map(|entry| match entry {
            BorderEntry::Country(name) => Some(name.as_str()),
            BorderEntry::NoLandBorders => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_and_object_responses() {
        let many: CountryResponse = serde_json::from_str(
            r#"[{"name": {"common": "France", "official": "French Republic"},
                 "cca2": "FR", "cca3": "FRA", "borders": ["AND", "BEL"]}]"#,
        )
        .unwrap();
        let france = many.into_first().unwrap();
        assert_eq!(france.name.common, "France");
        assert_eq!(france.border_codes(), ["AND", "BEL"]);

        let one: CountryResponse =
            serde_json::from_str(r#"{"name": {"common": "Iceland"}}"#).unwrap();
        let iceland = one.into_first().unwrap();
        assert!(iceland.border_codes().is_empty());
    }

    #[test]
    fn test_sentinel_display() {
        let list = CountryBorderList {
            source_code: "JP".into(),
            country_name: "Japan".into(),
            neighbors: vec![BorderEntry::NoLandBorders],
        };
        assert!(list.has_no_land_borders());
        assert_eq!(list.neighbor_names().count(), 0);
        assert_eq!(list.neighbors[0].to_string(), NO_LAND_BORDERS);
    }
}
