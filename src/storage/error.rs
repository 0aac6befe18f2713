use std::io;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by chat store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("Chat not found: {0}")]
    NotFound(Uuid),

    /// A record could not be encoded or decoded
    #[error("Serialization error in {}: {source}", path.display())]
    Serialization {
        /// File being written or read
        path: PathBuf,
        /// Underlying codec error
        #[source]
        source: serde_json::Error,
    },

    /// The directory or a file could not be read, written, or replaced
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// Directory or file the operation touched
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only means the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for chat store operations
pub type StoreResult<T> = Result<T, StoreError>;
