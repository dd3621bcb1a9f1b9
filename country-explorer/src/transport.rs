//! Executes core `HttpRequest`s over the network with ureq.

use country_core::{ApiError, HttpRequest, HttpResponse};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        // Non-2xx responses come back as data; the core interprets status codes.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Blocking round-trip.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %req.url, "executing request");

        let mut request = self.agent.get(&req.url);
        for (key, value) in &req.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        let mut response = request.call().map_err(|e| {
            warn!(url = %req.url, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| Some((key.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Round-trip on the blocking pool so the async caller keeps running.
    pub async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let transport = self.clone();
        tokio::task::spawn_blocking(move || transport.execute(&req))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let request = HttpRequest {
            url: "http://127.0.0.1:1/countries".to_string(),
            headers: Vec::new(),
        };
        let result = Transport::default().execute(&request);
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
