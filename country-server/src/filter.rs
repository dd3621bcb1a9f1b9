//! Region and search filters applied to the full upstream dataset.

use serde::Deserialize;

use crate::model::UpstreamCountry;

/// Query parameters accepted by `GET /countries/search`.
///
/// Filters are ANDed in field order. An absent or empty parameter does not
/// filter anything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
}

impl SearchQuery {
    pub fn matches(&self, country: &UpstreamCountry) -> bool {
        if let Some(name) = active(&self.name) {
            if !contains_ignore_case(country.common_name(), name) {
                return false;
            }
        }
        if let Some(capital) = active(&self.capital) {
            if !contains_ignore_case(country.first_capital(), capital) {
                return false;
            }
        }
        if let Some(region) = active(&self.region) {
            if !in_region(country, region) {
                return false;
            }
        }
        if let Some(timezone) = active(&self.timezone) {
            let listed = country
                .timezones
                .as_ref()
                .is_some_and(|zones| zones.iter().any(|zone| zone == timezone));
            if !listed {
                return false;
            }
        }
        true
    }
}

/// Exact, case-sensitive region comparison. Entries without a region never match.
pub fn in_region(country: &UpstreamCountry, region: &str) -> bool {
    country.region.as_deref() == Some(region)
}

pub fn by_region(countries: Vec<UpstreamCountry>, region: &str) -> Vec<UpstreamCountry> {
    countries
        .into_iter()
        .filter(|country| in_region(country, region))
        .collect()
}

pub fn search(countries: Vec<UpstreamCountry>, query: &SearchQuery) -> Vec<UpstreamCountry> {
    countries
        .into_iter()
        .filter(|country| query.matches(country))
        .collect()
}

fn active(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| !value.is_empty())
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|haystack| haystack.to_lowercase().contains(&needle.to_lowercase()))
}
