//! Filesystem utilities for atomic writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, ShelfError};

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Removes the temp file when dropped unless it has been renamed into place.
struct TempGuard {
    path: PathBuf,
    armed: bool,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Write `data` to `path` through a sibling temp file and an atomic rename.
///
/// Missing parent directories are created. The temp file never outlives
/// this call: it is either renamed over `path` or removed.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ShelfError::Storage(format!("Invalid library path: {}", path.display())))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| {
        ShelfError::Storage(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ShelfError::Storage(format!("System time error: {}", e)))?
        .as_nanos();
    let mut guard = TempGuard {
        path: parent.join(format!("{}.{}.tmp", filename, nanos)),
        armed: true,
    };

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&guard.path)
            .map_err(|e| ShelfError::Storage(format!("Temp file create failed: {}", e)))?;
        file.write_all(data)
            .map_err(|e| ShelfError::Storage(format!("Temp file write failed: {}", e)))?;
        file.sync_all()
            .map_err(|e| ShelfError::Storage(format!("Temp file sync failed: {}", e)))?;
    }

    rename_with_fallback(&guard.path, path)
        .map_err(|e| ShelfError::Storage(format!("Atomic rename failed: {}", e)))?;
    guard.armed = false;

    Ok(())
}
