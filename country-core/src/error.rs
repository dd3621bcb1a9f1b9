//! Error types for the country service client.
//!
//! `NotFound` gets a dedicated variant because the detail view distinguishes
//! "no such country" from other failures. Other non-2xx responses land in
//! `HttpError` with the raw status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service returned 404.
    #[error("resource not found")]
    NotFound,

    /// The service returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// The configured service URL cannot have paths appended to it.
    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),

    /// The host could not complete the round-trip.
    #[error("transport failed: {0}")]
    Transport(String),
}
