//! Message endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use pinboard_common::{AppError, AppResult, utc_now_iso};
use pinboard_core::Message;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{extractors::AppJson, state::AppState};

/// Create the message router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/message", get(default_message).post(create_message))
        .route("/messages", get(list_messages))
        .route("/message/{id}", get(get_message).delete(delete_message))
}

/// Message record response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Server-generated unique identifier.
    pub id: String,
    /// Message text.
    pub content: String,
    /// Creation timestamp, ISO-8601 UTC.
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

/// Default greeting response.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    /// Fixed greeting string.
    pub message: &'static str,
    /// Current UTC timestamp.
    pub timestamp: String,
}

/// List messages response.
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    /// All stored records, in insertion order.
    pub messages: Vec<MessageResponse>,
    /// Number of stored records.
    pub count: usize,
}

/// Create message request.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    /// Message text. Required; no length or character constraints.
    pub content: String,
}

/// Delete confirmation response.
#[derive(Debug, Serialize)]
pub struct DeleteMessageResponse {
    /// Fixed confirmation string.
    pub message: &'static str,
    /// The record that was removed.
    pub deleted: MessageResponse,
}

fn not_found() -> AppError {
    AppError::NotFound("Message not found".to_string())
}

/// Get the default greeting message. Does not touch the collection.
async fn default_message() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "You've successfully integrated the backend!",
        timestamp: utc_now_iso(),
    })
}

/// List all stored messages in insertion order.
async fn list_messages(State(state): State<AppState>) -> Json<MessageListResponse> {
    let messages: Vec<MessageResponse> = state
        .message_service
        .list()
        .await
        .into_iter()
        .map(MessageResponse::from)
        .collect();
    let count = messages.len();

    Json(MessageListResponse { messages, count })
}

/// Create a new message.
async fn create_message(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMessageRequest>,
) -> Json<MessageResponse> {
    let message = state.message_service.create(req.content).await;

    info!(message_id = %message.id, "Created message");

    Json(MessageResponse::from(message))
}

/// Get a specific message by id.
async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .message_service
        .get_by_id(&id)
        .await
        .ok_or_else(not_found)?;

    Ok(Json(MessageResponse::from(message)))
}

/// Delete a message by id.
async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteMessageResponse>> {
    let deleted = state
        .message_service
        .delete_by_id(&id)
        .await
        .ok_or_else(not_found)?;

    info!(message_id = %id, "Deleted message");

    Ok(Json(DeleteMessageResponse {
        message: "Message deleted",
        deleted: MessageResponse::from(deleted),
    }))
}
