//! Error types for Chatshelf
//!
//! This module defines the application-level error type, using `thiserror`
//! for ergonomic error handling. Storage operations have their own
//! [`StoreError`](crate::storage::StoreError), which travels to the binary
//! through `anyhow` unchanged.

use thiserror::Error;

/// Main error type for Chatshelf operations
///
/// Covers configuration, caller input, and server startup.
#[derive(Error, Debug)]
pub enum ChatShelfError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A chat id supplied by the caller is not a UUID
    #[error("Invalid chat ID format: {0}")]
    InvalidChatId(String),

    /// HTTP server startup or runtime errors
    #[error("Server error: {0}")]
    Server(String),

    /// The config file is not valid YAML for [`Config`](crate::config::Config)
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Chatshelf operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
