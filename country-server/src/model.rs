//! Upstream payload schema and the normalized records served to clients.
//!
//! # Design
//! `UpstreamCountry` names every field the service reads as an `Option`, so
//! defaulting happens in one typed place instead of ad hoc at each use. All
//! remaining upstream fields are kept in a flattened map: region and search
//! responses re-serialize an entry back into its raw upstream shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamMaps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_street_maps: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One country entry as returned by the upstream provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamCountry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<UpstreamName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<UpstreamFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cca3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<UpstreamMaps>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl UpstreamCountry {
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref()?.common.as_deref()
    }

    pub fn flag_svg(&self) -> Option<&str> {
        self.flags.as_ref()?.svg.as_deref()
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital.as_ref()?.first().map(String::as_str)
    }
}

/// A country as shown in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    pub flag: String,
    pub region: String,
    pub country_code: String,
}

impl From<&UpstreamCountry> for CountryRecord {
    fn from(country: &UpstreamCountry) -> Self {
        Self {
            name: country.common_name().unwrap_or(UNKNOWN).to_string(),
            flag: country.flag_svg().unwrap_or_default().to_string(),
            region: country.region.as_deref().unwrap_or(UNKNOWN).to_string(),
            country_code: country.cca3.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    pub google_maps: String,
    pub open_street_maps: String,
}

/// A country as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetails {
    pub name: String,
    pub flag: String,
    pub region: String,
    pub population: u64,
    pub languages: BTreeMap<String, String>,
    pub currency: BTreeMap<String, Currency>,
    pub timezones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    pub maps: Maps,
}

impl From<UpstreamCountry> for CountryDetails {
    fn from(country: UpstreamCountry) -> Self {
        let name = country.common_name().unwrap_or(UNKNOWN).to_string();
        let flag = country.flag_svg().unwrap_or_default().to_string();
        let maps = country
            .maps
            .map(|maps| Maps {
                google_maps: maps.google_maps.unwrap_or_default(),
                open_street_maps: maps.open_street_maps.unwrap_or_default(),
            })
            .unwrap_or_default();

        Self {
            name,
            flag,
            region: country.region.unwrap_or_else(|| UNKNOWN.to_string()),
            population: country.population.unwrap_or(0),
            languages: country.languages.unwrap_or_default(),
            currency: country.currencies.unwrap_or_default(),
            timezones: country.timezones.unwrap_or_default(),
            capital: country.capital,
            maps,
        }
    }
}
