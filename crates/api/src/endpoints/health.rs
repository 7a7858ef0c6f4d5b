//! API health check endpoint.

use axum::{Json, Router, routing::get};
use pinboard_common::utc_now_iso;
use serde::Serialize;

use crate::state::AppState;

/// Create the API health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(api_health_check))
}

/// API health response.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    /// Fixed `"healthy"` status.
    pub status: &'static str,
    /// Fixed human-readable confirmation.
    pub message: &'static str,
    /// Current UTC timestamp.
    pub timestamp: String,
}

/// API health check. Always succeeds while the process is up.
async fn api_health_check() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy",
        message: "Backend is running successfully",
        timestamp: utc_now_iso(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_health_response_serialization() {
        let response = ApiHealthResponse {
            status: "healthy",
            message: "Backend is running successfully",
            timestamp: utc_now_iso(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"message\":\"Backend is running successfully\""));
    }
}
