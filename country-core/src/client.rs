//! Stateless HTTP request builder and response parser for the country service.
//!
//! # Design
//! `CountryClient` holds only the service base URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CountryDetails, CountryRecord, RawCountry, SearchParams};

/// Synchronous, stateless client for the country service.
#[derive(Debug, Clone)]
pub struct CountryClient {
    base_url: Url,
}

impl CountryClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    pub fn build_list_countries(&self) -> HttpRequest {
        get(self.endpoint(&["countries"]))
    }

    pub fn build_get_country(&self, code: &str) -> HttpRequest {
        get(self.endpoint(&["countries", code]))
    }

    pub fn build_countries_by_region(&self, region: &str) -> HttpRequest {
        get(self.endpoint(&["countries", "region", region]))
    }

    pub fn build_search_countries(&self, params: &SearchParams) -> HttpRequest {
        let mut url = self.endpoint(&["countries", "search"]);
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params.pairs() {
                query.append_pair(key, value);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        get(url)
    }

    pub fn parse_list_countries(&self, response: HttpResponse) -> Result<Vec<CountryRecord>, ApiError> {
        decode(response)
    }

    pub fn parse_get_country(&self, response: HttpResponse) -> Result<CountryDetails, ApiError> {
        decode(response)
    }

    /// Region results are upstream-shaped; they are normalized into records here.
    pub fn parse_countries_by_region(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CountryRecord>, ApiError> {
        normalize(decode(response)?)
    }

    /// Search results are upstream-shaped; they are normalized into records here.
    pub fn parse_search_countries(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CountryRecord>, ApiError> {
        normalize(decode(response)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn get(url: Url) -> HttpRequest {
    HttpRequest {
        url: url.into(),
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

fn normalize(raw: Vec<RawCountry>) -> Result<Vec<CountryRecord>, ApiError> {
    Ok(raw.into_iter().map(CountryRecord::from).collect())
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CountryClient {
        CountryClient::new("http://localhost:3001").unwrap()
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_countries_produces_correct_request() {
        let req = client().build_list_countries();
        assert_eq!(req.url, "http://localhost:3001/countries");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_get_country_appends_code() {
        let req = client().build_get_country("FRA");
        assert_eq!(req.url, "http://localhost:3001/countries/FRA");
    }

    #[test]
    fn build_countries_by_region_encodes_segment() {
        let req = client().build_countries_by_region("North America");
        assert_eq!(req.url, "http://localhost:3001/countries/region/North%20America");
    }

    #[test]
    fn build_search_with_no_params_has_no_query() {
        let req = client().build_search_countries(&SearchParams::default());
        assert_eq!(req.url, "http://localhost:3001/countries/search");
    }

    #[test]
    fn build_search_encodes_timezone() {
        let params = SearchParams {
            timezone: Some("UTC+05:30".to_string()),
            ..Default::default()
        };
        let req = client().build_search_countries(&params);
        assert_eq!(
            req.url,
            "http://localhost:3001/countries/search?timezone=UTC%2B05%3A30"
        );
    }

    #[test]
    fn build_search_keeps_filter_order() {
        let params = SearchParams {
            name: Some("par".to_string()),
            capital: Some("par".to_string()),
            ..Default::default()
        };
        let req = client().build_search_countries(&params);
        assert_eq!(
            req.url,
            "http://localhost:3001/countries/search?name=par&capital=par"
        );
    }

    #[test]
    fn trailing_slash_and_base_path_are_respected() {
        let client = CountryClient::new("http://localhost:3001/api/").unwrap();
        let req = client.build_list_countries();
        assert_eq!(req.url, "http://localhost:3001/api/countries");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            CountryClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            CountryClient::new("mailto:someone@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn parse_list_countries_success() {
        let countries = client()
            .parse_list_countries(ok(
                r#"[{"name":"Chile","flag":"https://flagcdn.com/cl.svg","region":"Americas","countryCode":"CHL"}]"#,
            ))
            .unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country_code, "CHL");
    }

    #[test]
    fn parse_search_normalizes_raw_entries() {
        let countries = client()
            .parse_search_countries(ok(
                r#"[{"name":{"common":"Chile"},"flags":{"svg":"https://flagcdn.com/cl.svg"},"region":"Americas","cca3":"CHL"},{"region":"Europe"}]"#,
            ))
            .unwrap();
        assert_eq!(countries[0].name, "Chile");
        assert_eq!(countries[0].country_code, "CHL");
        assert_eq!(countries[1].name, "Unknown");
        assert_eq!(countries[1].flag, "");
    }

    #[test]
    fn parse_region_normalizes_raw_entries() {
        let countries = client()
            .parse_countries_by_region(ok(r#"[{"name":{"common":"Fiji"},"region":"Oceania","cca3":"FJI"}]"#))
            .unwrap();
        assert_eq!(countries[0].region, "Oceania");
    }

    #[test]
    fn parse_get_country_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"error":"Country not found"}"#.to_string(),
        };
        let err = client().parse_get_country(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_get_country_passes_other_statuses() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: "Bad Request".to_string(),
        };
        let err = client().parse_get_country(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 400, .. }));
    }

    #[test]
    fn parse_list_countries_bad_json() {
        let err = client().parse_list_countries(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
