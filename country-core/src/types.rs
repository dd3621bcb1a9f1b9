//! Country DTOs as seen by clients of the country service.
//!
//! # Design
//! These mirror the server's schema but are defined independently; the
//! end-to-end test catches drift. `/countries` answers with service-shaped
//! records while the region and search endpoints pass raw upstream entries
//! through, so `RawCountry` reads just the four fields a list needs from the
//! latter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";

/// A country as shown in list views. `country_code` is the list key and the
/// detail route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub flag: String,
    pub region: String,
    #[serde(default)]
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    #[serde(default)]
    pub google_maps: String,
    #[serde(default)]
    pub open_street_maps: String,
}

/// A country as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetails {
    pub name: String,
    #[serde(default)]
    pub flag: String,
    pub region: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub currency: BTreeMap<String, Currency>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub maps: Maps,
}

#[derive(Debug, Default, Deserialize)]
struct RawName {
    common: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFlags {
    svg: Option<String>,
}

/// The subset of an upstream-shaped entry needed to build a `CountryRecord`.
#[derive(Debug, Default, Deserialize)]
pub struct RawCountry {
    name: Option<RawName>,
    flags: Option<RawFlags>,
    region: Option<String>,
    cca3: Option<String>,
}

impl From<RawCountry> for CountryRecord {
    fn from(raw: RawCountry) -> Self {
        Self {
            name: raw
                .name
                .and_then(|name| name.common)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            flag: raw.flags.and_then(|flags| flags.svg).unwrap_or_default(),
            region: raw.region.unwrap_or_else(|| UNKNOWN.to_string()),
            country_code: raw.cca3.unwrap_or_default(),
        }
    }
}

/// Filters for `GET /countries/search`. `None` fields are left out of the
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl SearchParams {
    /// Query pairs in the order the server applies them.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", &self.name),
            ("capital", &self.capital),
            ("region", &self.region),
            ("timezone", &self.timezone),
        ]
        .into_iter()
        .filter_map(|(key, value)| Some((key, value.as_deref()?)))
    }
}
