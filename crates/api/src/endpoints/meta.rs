//! Root-level endpoints: service metadata and the liveness check.
//!
//! These are routed at `/` and `/health` (outside the `/api` nest) so that
//! load balancers and container orchestration can probe them directly.

use axum::Json;
use pinboard_common::utc_now_iso;
use serde::Serialize;

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "Pinboard API";

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed `"healthy"` status.
    pub status: &'static str,
    /// Current UTC timestamp.
    pub timestamp: String,
    /// Service version.
    pub version: &'static str,
}

/// Root metadata response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name.
    pub name: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Relative path to the interactive documentation.
    pub docs: &'static str,
    /// Relative path to the liveness check.
    pub health: &'static str,
}

/// Liveness check. Always succeeds while the process is up.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: utc_now_iso(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Root endpoint with service metadata.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
        health: "/health",
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            timestamp: utc_now_iso(),
            version: env!("CARGO_PKG_VERSION"),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
    }

    #[test]
    fn test_root_response_serialization() {
        let response = RootResponse {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            docs: "/docs",
            health: "/health",
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"name\":\"Pinboard API\""));
        assert!(json.contains("\"docs\":\"/docs\""));
    }
}
