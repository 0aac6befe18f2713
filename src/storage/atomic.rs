//! Atomic file replacement
//!
//! Content goes to a hidden temp file next to the target, is synced, then
//! renamed over the target. Readers see either the old file or the new one,
//! never a partial write. Renames are atomic within one filesystem, which
//! holds here because the temp file shares the target's directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Atomically replace `path` with `contents`
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    atomic_write_with(path, |file| file.write_all(contents))
}

/// Atomically replace `path` with whatever `write` puts into the temp file
///
/// If `write`, the sync, or the rename fails, the temp file is removed and
/// the target is left as it was.
pub fn atomic_write_with<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp_path = temp_path_for(path)?;

    let result = write_then_rename(&tmp_path, path, write);
    if result.is_err() {
        // Best effort; the temp name is hidden from scans either way
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_then_rename<F>(tmp_path: &Path, path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp_path)?;

    write(&mut file)?;
    file.flush()?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)
}

/// `<dir>/.<uuid>.tmp` next to the target `<dir>/<name>`
///
/// Fixed length, so any target name the filesystem accepts also has a
/// valid temp name.
fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    if path.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", path.display()),
        ));
    }
    Ok(path.with_file_name(format!(".{}.tmp", Uuid::new_v4())))
}
