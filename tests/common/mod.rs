use chatshelf::storage::{Chat, ChatStore, FileNaming};
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn create_temp_store(naming: FileNaming) -> (ChatStore, TempDir) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let store = ChatStore::open(tmp.path().join("chats"), naming);
    (store, tmp)
}

/// A chat stamped at midnight on the given day of January 2026
#[allow(dead_code)]
pub fn chat_on_day(title: &str, day: u32) -> Chat {
    let mut chat = Chat::new(title);
    chat.timestamp = Utc
        .with_ymd_and_hms(2026, 1, day, 0, 0, 0)
        .single()
        .expect("valid date");
    chat
}

/// Sorted names of every entry in `dir`, hidden ones included
#[allow(dead_code)]
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("failed to read dir")
        .map(|e| {
            e.expect("failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write file");
    path
}
