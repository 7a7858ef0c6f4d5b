//! HTTP API layer for pinboard.
//!
//! This crate provides the REST API:
//!
//! - **Endpoints**: health checks and message CRUD
//! - **Extractors**: JSON body extraction with contract-shaped rejections
//! - **State**: the application state injected into handlers
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod state;

pub use endpoints::{meta, router};
pub use state::AppState;
