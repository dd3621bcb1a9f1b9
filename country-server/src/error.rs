use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The upstream provider could not be reached.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),

    /// The upstream provider answered with a non-2xx status.
    #[error("upstream returned {status}")]
    Upstream {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: String,
    },

    /// The upstream provider refused a request whose status is not passed
    /// through to the caller.
    #[error("upstream rejected request with {0}")]
    UpstreamRejected(StatusCode),

    /// The upstream body was not the expected JSON.
    #[error("undecodable upstream payload: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("country not found")]
    NotFound,
}

impl ServiceError {
    /// Hide an upstream status behind the generic 500.
    pub fn into_internal(self) -> Self {
        match self {
            ServiceError::Upstream { status, .. } => ServiceError::UpstreamRejected(status),
            other => other,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Upstream {
                status,
                content_type,
                body,
            } => {
                warn!(%status, "passing upstream error through");
                let mut response = (status, body).into_response();
                if let Some(content_type) = content_type {
                    response.headers_mut().insert(header::CONTENT_TYPE, content_type);
                }
                response
            }
            ServiceError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Country not found" })),
            )
                .into_response(),
            ServiceError::UpstreamUnavailable(_)
            | ServiceError::UpstreamRejected(_)
            | ServiceError::Decode(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ServiceError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_status_and_content_type_pass_through() {
        let response = ServiceError::Upstream {
            status: StatusCode::BAD_REQUEST,
            content_type: Some(HeaderValue::from_static("application/json")),
            body: r#"{"status":400,"message":"Bad Request"}"#.to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
    }

    #[test]
    fn internal_upstream_status_becomes_500() {
        let response = ServiceError::Upstream {
            status: StatusCode::SERVICE_UNAVAILABLE,
            content_type: None,
            body: "maintenance".to_string(),
        }
        .into_internal()
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_internal_keeps_not_found() {
        assert!(matches!(
            ServiceError::NotFound.into_internal(),
            ServiceError::NotFound
        ));
    }
}
