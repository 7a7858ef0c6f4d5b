//! API endpoints.

mod health;
mod messages;
pub mod meta;

use axum::Router;

use crate::state::AppState;

/// Create the `/api` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(messages::router())
}
