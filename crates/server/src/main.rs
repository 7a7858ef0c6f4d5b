//! Pinboard server entry point.

use std::net::{IpAddr, SocketAddr};

use axum::{Router, http::HeaderValue, routing::get};
use pinboard_api::{endpoints::meta, router as api_router, state::AppState};
use tokio::signal;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse the comma-separated allowed-origins value.
///
/// Returns `None` for the wildcard `*`, otherwise the list of origins that
/// parsed as valid header values.
fn parse_allowed_origins(value: &str) -> Option<Vec<HeaderValue>> {
    if value.trim() == "*" {
        return None;
    }

    Some(
        value
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect(),
    )
}

/// Build the CORS layer from the configured origin list.
fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match parse_allowed_origins(allowed_origins) {
        None => layer.allow_origin(Any),
        Some(origins) => layer.allow_origin(AllowOrigin::list(origins)),
    }
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinboard=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting pinboard server...");

    // Load configuration
    let config = pinboard_common::Config::load()?;

    // Create app state over a fresh in-memory store
    let state = AppState::new();

    // Build router
    let app = Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health_check))
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors.allowed_origins))
        .with_state(state);

    // Start server with graceful shutdown
    let host: IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
