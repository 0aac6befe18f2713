//! File-backed chat storage
//!
//! Each chat lives in its own JSON file inside one storage directory.
//! [`ChatStore`] is the entry point: it runs every operation through a single
//! FIFO gate so scans and writes on the directory never interleave.

use directories::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub mod atomic;
pub mod codec;
pub mod error;
pub mod files;
pub mod naming;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use files::ChatFiles;
pub use naming::{sanitize_filename, FileNaming};
pub use types::{Chat, Question};

/// Subfolder of the platform data directory holding chat files
pub const DEFAULT_SUBFOLDER: &str = "chats";

/// Default storage directory: `<platform data dir>/chats`
///
/// Returns `None` when the platform has no home directory to anchor on.
pub fn default_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "chatshelf", "chatshelf")
        .map(|dirs| dirs.data_dir().join(DEFAULT_SUBFOLDER))
}

/// Serialized access to a directory of chat files
///
/// Clones share the directory and the gate. Operations queue on the gate in
/// arrival order and each one holds it until its file I/O has finished, even
/// if the awaiting caller goes away.
#[derive(Debug, Clone)]
pub struct ChatStore {
    files: Arc<ChatFiles>,
    gate: Arc<Mutex<()>>,
}

impl ChatStore {
    /// Open a store on `root`, creating the directory if needed
    ///
    /// Failing to create the directory is logged, not returned: the store is
    /// still usable and each operation reports the problem itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatshelf::storage::{ChatStore, FileNaming};
    ///
    /// let dir = std::env::temp_dir().join("chatshelf-doc-open");
    /// let store = ChatStore::open(&dir, FileNaming::Id);
    /// assert_eq!(store.directory(), dir.as_path());
    /// ```
    pub fn open(root: impl Into<PathBuf>, naming: FileNaming) -> Self {
        let files = ChatFiles::new(root, naming);
        if let Err(e) = files.ensure_dir() {
            tracing::warn!(
                "Could not create storage directory {}: {}",
                files.root().display(),
                e
            );
        }

        Self {
            files: Arc::new(files),
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// The storage directory
    pub fn directory(&self) -> &Path {
        self.files.root()
    }

    /// The active naming scheme
    pub fn naming(&self) -> FileNaming {
        self.files.naming()
    }

    /// All readable chats, newest first
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be enumerated.
    /// Individual files that fail to decode are skipped.
    pub async fn list_all(&self) -> StoreResult<Vec<Chat>> {
        self.run(|files| files.list_all()).await
    }

    /// The chat with this id
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no file holds it.
    pub async fn get_by_id(&self, id: Uuid) -> StoreResult<Chat> {
        self.run(move |files| files.get_by_id(id)).await
    }

    /// Create or replace a chat
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialization` or `StoreError::Io` if the record
    /// could not be written; the previous file, if any, is left intact.
    pub async fn put(&self, chat: &Chat) -> StoreResult<()> {
        let chat = chat.clone();
        let path = self.run(move |files| files.put(&chat)).await?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Delete a chat by id; returns whether a file was removed
    ///
    /// Deleting an unknown id is a no-op.
    pub async fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        self.run(move |files| files.delete_by_id(id)).await
    }

    /// Run `op` on the blocking pool while holding the gate
    async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ChatFiles) -> StoreResult<T> + Send + 'static,
    {
        let guard = Arc::clone(&self.gate).lock_owned().await;
        let files = Arc::clone(&self.files);

        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            op(&files)
        })
        .await
        .map_err(|e| StoreError::io(self.directory(), io::Error::new(io::ErrorKind::Other, e)))?
    }
}
