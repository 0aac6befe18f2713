//! Command handlers for the chatshelf binary
//!
//! Each subcommand resolves to one function here; `main.rs` only parses
//! arguments, loads configuration, and dispatches.

use uuid::Uuid;

use crate::error::ChatShelfError;

pub mod chats;
pub mod serve;

/// Parse a caller-supplied chat id before touching the store
///
/// # Errors
///
/// Returns `ChatShelfError::InvalidChatId` if `raw` is not a UUID
pub fn parse_chat_id(raw: &str) -> Result<Uuid, ChatShelfError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ChatShelfError::InvalidChatId(raw.to_string()))
}
