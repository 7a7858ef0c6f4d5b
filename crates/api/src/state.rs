//! Application state shared by all request handlers.

use pinboard_core::MessageService;

/// Application state.
///
/// Injected into handlers via axum's `State` extractor rather than held as
/// process-global data, so tests can build isolated instances.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Message create/list/get/delete operations.
    pub message_service: MessageService,
}

impl AppState {
    /// Create application state backed by a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message_service: MessageService::new(pinboard_core::MessageStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
