//! Mapping from chats to file names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::Chat;

/// Extension shared by every record file
pub const RECORD_EXTENSION: &str = "json";

/// Characters that may not appear in a derived file name
const FORBIDDEN_CHARS: [char; 10] = [':', '/', '\\', '?', '%', '*', '|', '"', '<', '>'];

/// Replace every forbidden character with `_`
///
/// # Examples
///
/// ```
/// use chatshelf::storage::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My:Chat/Test?"), "My_Chat_Test_");
/// ```
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// How a chat's file name is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileNaming {
    /// `<id>.json`; one file per id no matter how the title changes
    #[default]
    Id,
    /// `<sanitized title>.json`; compatible with directories written by
    /// title-keyed servers, but chats with equal titles overwrite each other.
    ///
    /// Those servers only read whole-second dates. Chats stamped by
    /// [`Chat::new`] qualify; a timestamp given a fractional part is written
    /// with it and will not load there.
    Title,
}

impl FileNaming {
    /// File name (not path) for a chat under this scheme
    pub fn file_name(&self, chat: &Chat) -> String {
        let stem = match self {
            FileNaming::Id => chat.id.to_string(),
            FileNaming::Title => {
                let sanitized = sanitize_filename(&chat.title);
                // A leading dot would hide the file from every scan
                if sanitized.is_empty() || sanitized.starts_with('.') {
                    format!("_{}", sanitized)
                } else {
                    sanitized
                }
            }
        };
        format!("{}.{}", stem, RECORD_EXTENSION)
    }
}

impl fmt::Display for FileNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileNaming::Id => write!(f, "id"),
            FileNaming::Title => write!(f, "title"),
        }
    }
}

impl FromStr for FileNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(FileNaming::Id),
            "title" => Ok(FileNaming::Title),
            other => Err(format!(
                "Invalid file naming scheme: {}. Must be one of: id, title",
                other
            )),
        }
    }
}

/// Whether a directory entry name looks like a record file
///
/// Hidden names (leading `.`) are never records; this also keeps in-flight
/// temp files out of scans.
pub fn is_record_file_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.')
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == RECORD_EXTENSION)
}
