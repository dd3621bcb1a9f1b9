//! Query service proxying the restcountries API.
//!
//! # Overview
//! Four read-only endpoints fetch from the upstream provider, filter the
//! result in memory and reshape it:
//!
//! | Route | Response |
//! |---|---|
//! | `GET /countries` | every country as a [`CountryRecord`] |
//! | `GET /countries/{code}` | one [`CountryDetails`], or 404 |
//! | `GET /countries/region/{region}` | raw upstream entries in that region |
//! | `GET /countries/search` | raw upstream entries matching a [`SearchQuery`] |
//!
//! # Design
//! Handlers share nothing but a cloned [`Upstream`] client. The dataset is
//! small (about 250 entries), so filtering runs after a full fetch instead of
//! delegating search to the provider, and nothing is cached.
//!
//! The list and region routes answer any upstream failure with a generic
//! 500. The code lookup and search pass an upstream error status and body
//! through unchanged.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod upstream;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use config::Config;
pub use error::ServiceError;
pub use filter::SearchQuery;
pub use model::{CountryDetails, CountryRecord, UpstreamCountry};
pub use upstream::Upstream;

pub fn app(upstream: Upstream) -> Router {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/search", get(search_countries))
        .route("/countries/region/{region}", get(countries_by_region))
        .route("/countries/{code}", get(get_country))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(upstream)
}

pub async fn run(listener: TcpListener, upstream: Upstream) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "country service listening");
    }
    axum::serve(listener, app(upstream)).await
}

async fn list_countries(
    State(upstream): State<Upstream>,
) -> Result<Json<Vec<CountryRecord>>, ServiceError> {
    let countries = upstream.all().await.map_err(ServiceError::into_internal)?;
    Ok(Json(countries.iter().map(CountryRecord::from).collect()))
}

async fn get_country(
    State(upstream): State<Upstream>,
    Path(code): Path<String>,
) -> Result<Json<CountryDetails>, ServiceError> {
    let country = upstream.by_code(&code).await?.ok_or(ServiceError::NotFound)?;
    Ok(Json(CountryDetails::from(country)))
}

async fn countries_by_region(
    State(upstream): State<Upstream>,
    Path(region): Path<String>,
) -> Result<Json<Vec<UpstreamCountry>>, ServiceError> {
    let countries = upstream.all().await.map_err(ServiceError::into_internal)?;
    Ok(Json(filter::by_region(countries, &region)))
}

async fn search_countries(
    State(upstream): State<Upstream>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<UpstreamCountry>>, ServiceError> {
    let countries = upstream.all().await?;
    Ok(Json(filter::search(countries, &query)))
}
