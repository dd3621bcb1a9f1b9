//! Client core for the country service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and holds the presentation
//! logic a front end needs on top: list and detail view state, search input
//! debouncing, search term disambiguation and the UTC-offset clock.
//!
//! # Design
//! - `CountryClient` is stateless; it holds only the base URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Views and the debouncer take results and instants as inputs, so every
//!   state transition is deterministic under test.
//! - DTOs are defined independently from the server crate; the end-to-end
//!   test catches schema drift.

pub mod client;
pub mod clock;
pub mod debounce;
pub mod error;
pub mod http;
pub mod query;
pub mod types;
pub mod view;

pub use client::CountryClient;
pub use clock::{time_at_offset, INVALID_TIMEZONE};
pub use debounce::{Debouncer, DEBOUNCE_DELAY};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use query::search_params_for;
pub use types::{CountryDetails, CountryRecord, Currency, Maps, SearchParams};
pub use view::{DetailView, ListView, Ticket, ViewState, DETAIL_ERROR, LIST_ERROR};
