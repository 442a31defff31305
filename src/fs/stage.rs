//! Template staging.
//!
//! Copies a template tree into the temporary work area before it is packaged.

use crate::error::StageError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy `source` into `dest`.
///
/// Entries are visited depth-first with each directory before its children,
/// so every file's parent already exists when it is copied. The source root
/// itself is not visited; `dest` is created if missing. Symlinks are not
/// descended into. The first failure aborts the copy.
pub fn copy_template(source: &Path, dest: &Path) -> Result<(), StageError> {
    fs::create_dir_all(dest).map_err(|e| StageError::CreateDir {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let mut copied = 0usize;
    for entry in WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| StageError::Walk {
            path: e.path().unwrap_or(source).to_path_buf(),
            source: e,
        })?;

        // Entries always live under the walk root.
        let Ok(rel_path) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(rel_path);

        // A link to a directory is mirrored as an empty directory.
        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            fs::create_dir_all(&target).map_err(|e| StageError::CreateDir {
                path: target.clone(),
                source: e,
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| StageError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source: e,
            })?;
            copied += 1;
        }

        tracing::trace!(entry = %rel_path.display(), "staged");
    }

    tracing::debug!(
        source = %source.display(),
        dest = %dest.display(),
        files = copied,
        "template staged"
    );

    Ok(())
}
