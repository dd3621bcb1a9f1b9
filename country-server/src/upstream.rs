//! HTTP client for the upstream country-data provider.

use reqwest::{header, Url};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, instrument};

use crate::error::ServiceError;
use crate::model::UpstreamCountry;

/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: Url,
    fields: String,
}

/// The alpha endpoint answers with an array, but a bare object is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<UpstreamCountry>),
    One(Box<UpstreamCountry>),
}

impl Upstream {
    pub fn new(base_url: Url, fields: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("country-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url,
            fields: fields.to_string(),
        })
    }

    /// Fetch the full dataset in upstream order.
    #[instrument(skip(self), fields(upstream = %self.base_url))]
    pub async fn all(&self) -> Result<Vec<UpstreamCountry>, ServiceError> {
        let mut request = self.client.get(self.endpoint(&["all"]));
        if !self.fields.is_empty() {
            request = request.query(&[("fields", self.fields.as_str())]);
        }
        let countries: Vec<UpstreamCountry> = send(request).await?;
        debug!(count = countries.len(), "fetched upstream dataset");
        Ok(countries)
    }

    /// Look up a single country by alpha code. `Ok(None)` means upstream had no match.
    #[instrument(skip(self), fields(upstream = %self.base_url))]
    pub async fn by_code(&self, code: &str) -> Result<Option<UpstreamCountry>, ServiceError> {
        let request = self.client.get(self.endpoint(&["alpha", code]));
        let found = match send(request).await? {
            OneOrMany::Many(countries) => countries.into_iter().next(),
            OneOrMany::One(country) => Some(*country),
        };
        debug!(found = found.is_some(), "fetched upstream alpha lookup");
        Ok(found)
    }

    /// Append percent-encoded segments to the base path.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ServiceError> {
    let response = request
        .send()
        .await
        .map_err(ServiceError::UpstreamUnavailable)?;

    let status = response.status();
    if !status.is_success() {
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response
            .text()
            .await
            .map_err(ServiceError::UpstreamUnavailable)?;
        return Err(ServiceError::Upstream {
            status,
            content_type,
            body,
        });
    }

    response.json().await.map_err(|e| {
        if e.is_decode() {
            ServiceError::Decode(e)
        } else {
            ServiceError::UpstreamUnavailable(e)
        }
    })
}
