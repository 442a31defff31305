//! Project directory guard.
//!
//! Makes sure the deployment target exists and is empty before anything is
//! written into it. A non-empty local target is only cleared with `--force`.

use crate::config::Mode;
use crate::error::GuardError;
use std::fs;
use std::path::{Path, PathBuf};

/// Ensure `dir` exists and has no entries.
///
/// - Remote mode clears `dir` unconditionally; the checkout put it there.
/// - Local mode creates a missing `dir`, refuses an existing one unless
///   `force` is set, and clears it when it is.
///
/// A refused directory is left untouched.
pub fn ensure_empty(mode: Mode, dir: &Path, force: bool) -> Result<(), GuardError> {
    match mode {
        Mode::Remote => clear_dir(dir),
        Mode::Local => {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| GuardError::Io {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
                tracing::debug!(dir = %dir.display(), "created project directory");
                Ok(())
            } else if force {
                clear_dir(dir)
            } else {
                Err(GuardError::DirectoryNotEmpty(dir.to_path_buf()))
            }
        }
    }
}

/// Fail with `GuardError::NotEmpty` if `dir` has any entries right now.
pub fn assert_empty_or_fail(dir: &Path) -> Result<(), GuardError> {
    if read_entries(dir)?.is_empty() {
        Ok(())
    } else {
        Err(GuardError::NotEmpty(dir.to_path_buf()))
    }
}

/// Remove everything inside `dir`, keeping `dir` itself.
pub fn clear_dir(dir: &Path) -> Result<(), GuardError> {
    let entries = read_entries(dir)?;
    let count = entries.len();

    for path in entries {
        let metadata = fs::symlink_metadata(&path).map_err(|e| GuardError::Io {
            path: path.clone(),
            source: e,
        })?;

        let result = if metadata.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|e| GuardError::Io { path, source: e })?;
    }

    tracing::debug!(dir = %dir.display(), removed = count, "cleared directory");
    Ok(())
}

fn read_entries(dir: &Path) -> Result<Vec<PathBuf>, GuardError> {
    let io_err = |e: std::io::Error| GuardError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        entries.push(entry.map_err(io_err)?.path());
    }
    Ok(entries)
}
