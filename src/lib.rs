//! Chatshelf - file-backed chat transcript store
//!
//! Chats (a title, a timestamp and nested question/answer records) are kept
//! one JSON file per chat in a storage directory, and served over a small
//! HTTP API.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `storage`: the chat store, file naming, on-disk codec, atomic writes
//! - `server`: axum routes translating HTTP requests into store calls
//! - `commands`: handlers behind the CLI subcommands
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use chatshelf::storage::{Chat, ChatStore, FileNaming};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = ChatStore::open("/tmp/chats", FileNaming::Id);
//!     let chat = Chat::new("Trip planning");
//!     store.put(&chat).await?;
//!     assert_eq!(store.get_by_id(chat.id).await?.title, "Trip planning");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{ChatShelfError, Result};
pub use storage::{Chat, ChatStore, FileNaming, Question, StoreError, StoreResult};
