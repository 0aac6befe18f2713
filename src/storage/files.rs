//! Unsynchronized record files in one directory
//!
//! Every lookup is a linear scan: the id lives inside the file, so each
//! candidate has to be read and decoded. Callers serialize access through
//! [`super::ChatStore`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::atomic::atomic_write;
use super::codec::{from_json, to_pretty_json};
use super::error::{StoreError, StoreResult};
use super::naming::{is_record_file_name, FileNaming};
use super::Chat;

/// Record files under one storage directory
#[derive(Debug, Clone)]
pub struct ChatFiles {
    root: PathBuf,
    naming: FileNaming,
}

impl ChatFiles {
    /// Wrap a storage directory; nothing is touched on disk
    pub fn new(root: impl Into<PathBuf>, naming: FileNaming) -> Self {
        Self {
            root: root.into(),
            naming,
        }
    }

    /// The storage directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active naming scheme
    pub fn naming(&self) -> FileNaming {
        self.naming
    }

    /// Create the storage directory (and parents) if missing
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    /// Path a chat is written to under the active scheme
    pub fn path_for(&self, chat: &Chat) -> PathBuf {
        self.root.join(self.naming.file_name(chat))
    }

    /// All decodable records, newest first
    ///
    /// Unreadable or undecodable files are skipped. Fails only if the
    /// directory itself cannot be enumerated.
    pub fn list_all(&self) -> StoreResult<Vec<Chat>> {
        let paths = self
            .record_paths()
            .map_err(|e| StoreError::io(&self.root, e))?;

        let mut chats: Vec<Chat> = decode_each(paths).map(|(_, chat)| chat).collect();
        // Stable, so equal timestamps keep file-name order
        chats.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(chats)
    }

    /// The first record (in file-name order) whose id matches
    pub fn get_by_id(&self, id: Uuid) -> StoreResult<Chat> {
        decode_each(self.record_paths_or_empty())
            .find(|(_, chat)| chat.id == id)
            .map(|(_, chat)| chat)
            .ok_or(StoreError::NotFound(id))
    }

    /// Encode and atomically write a chat, returning the file it landed in
    ///
    /// Any existing file of the same name is replaced.
    pub fn put(&self, chat: &Chat) -> StoreResult<PathBuf> {
        let path = self.path_for(chat);

        let bytes = to_pretty_json(chat).map_err(|source| StoreError::Serialization {
            path: path.clone(),
            source,
        })?;

        atomic_write(&path, &bytes).map_err(|e| StoreError::io(&path, e))?;
        Ok(path)
    }

    /// Remove every file holding a record with this id
    ///
    /// Returns whether anything was removed; a missing id is not an error.
    pub fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        let matches: Vec<PathBuf> = decode_each(self.record_paths_or_empty())
            .filter(|(_, chat)| chat.id == id)
            .map(|(path, _)| path)
            .collect();

        for path in &matches {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::io(path, e)),
            }
        }

        Ok(!matches.is_empty())
    }

    /// Record file paths, sorted by file name
    fn record_paths(&self) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if is_record_file_name(&path) && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Like `record_paths`, but an unreadable directory holds no records
    fn record_paths_or_empty(&self) -> Vec<PathBuf> {
        self.record_paths().unwrap_or_else(|e| {
            tracing::debug!("Cannot scan {}: {}", self.root.display(), e);
            Vec::new()
        })
    }
}

/// Lazily read and decode each path, skipping failures
fn decode_each(paths: Vec<PathBuf>) -> impl Iterator<Item = (PathBuf, Chat)> {
    paths.into_iter().filter_map(|path| match read_record(&path) {
        Ok(chat) => Some((path, chat)),
        Err(e) => {
            tracing::debug!("Skipping unreadable record: {}", e);
            None
        }
    })
}

fn read_record(path: &Path) -> StoreResult<Chat> {
    let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
    from_json(&bytes).map_err(|source| StoreError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}
