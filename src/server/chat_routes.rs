//! Chat HTTP Routes
//!
//! `/chats` endpoints. Handlers only decode input, call the store, and
//! translate the outcome.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::response::{ApiError, PrettyJson};
use crate::commands;
use crate::storage::{Chat, ChatStore};

/// Create chat routes backed by `store`
pub fn chat_routes(store: ChatStore) -> Router {
    Router::new()
        .route("/chats", get(list_chats).post(upload_chat))
        .route("/chats/:chat_id", get(get_chat).delete(delete_chat))
        .with_state(store)
}

/// Parse a path segment as a chat id, with the same rules as the CLI
fn parse_chat_id(raw: &str) -> Result<Uuid, ApiError> {
    commands::parse_chat_id(raw).map_err(|e| {
        tracing::warn!("{}", e);
        ApiError::BadRequest("Invalid chat ID format".to_string())
    })
}

/// GET /chats - all chats, newest first
async fn list_chats(State(store): State<ChatStore>) -> Result<PrettyJson<Vec<Chat>>, ApiError> {
    tracing::info!("Fetching all chats");
    let chats = store.list_all().await?;
    Ok(PrettyJson(chats))
}

/// POST /chats - store a chat and echo it back
async fn upload_chat(
    State(store): State<ChatStore>,
    payload: Result<Json<Chat>, JsonRejection>,
) -> Result<PrettyJson<Chat>, ApiError> {
    let Json(chat) = payload.map_err(|rejection| {
        tracing::warn!("Rejected chat upload: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    tracing::info!("Uploading chat: {} (ID: {})", chat.title, chat.id);
    store.put(&chat).await?;
    Ok(PrettyJson(chat))
}

/// GET /chats/:chat_id - one chat
async fn get_chat(
    State(store): State<ChatStore>,
    Path(chat_id): Path<String>,
) -> Result<PrettyJson<Chat>, ApiError> {
    let id = parse_chat_id(&chat_id)?;

    let chat = store.get_by_id(id).await.map_err(|e| {
        if e.is_not_found() {
            tracing::warn!("Chat not found: {}", id);
        }
        ApiError::from(e)
    })?;

    tracing::info!("Fetching chat: {} (ID: {})", chat.title, chat.id);
    Ok(PrettyJson(chat))
}

/// DELETE /chats/:chat_id - idempotent delete
async fn delete_chat(
    State(store): State<ChatStore>,
    Path(chat_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_chat_id(&chat_id)?;

    let removed = store.delete_by_id(id).await?;
    tracing::info!("Deleted chat: {} (removed: {})", id, removed);
    Ok(StatusCode::NO_CONTENT)
}
