//! Temporary work area for staging templates.

use crate::error::{PpsError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

/// Prefix of every work directory created under the system temp root.
pub const WORKDIR_PREFIX: &str = "_temp_";

/// A uniquely named directory under the system temp root.
///
/// The directory is removed when the value is dropped, so it is released on
/// every exit path of the command that owns it. [`TempWorkDir::release`]
/// removes it eagerly and reports failures.
#[derive(Debug)]
pub struct TempWorkDir {
    dir: TempDir,
}

impl TempWorkDir {
    pub fn new() -> Result<Self> {
        let base = env::temp_dir();
        let dir = Builder::new()
            .prefix(WORKDIR_PREFIX)
            .tempdir_in(&base)
            .map_err(|e| PpsError::TempDir {
                path: base.clone(),
                source: e,
            })?;

        tracing::debug!(path = %dir.path().display(), "created temp work directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory now.
    pub fn release(self) -> Result<()> {
        let path: PathBuf = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| PpsError::TempDir {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "released temp work directory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn creates_prefixed_directory_under_temp_root() {
        let work = TempWorkDir::new().unwrap();

        assert!(work.path().is_dir());
        assert!(work.path().starts_with(env::temp_dir()));
        let name = work.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(WORKDIR_PREFIX));
    }

    #[test]
    fn directories_are_unique() {
        let a = TempWorkDir::new().unwrap();
        let b = TempWorkDir::new().unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn drop_removes_directory_and_contents() {
        let work = TempWorkDir::new().unwrap();
        let path = work.path().to_path_buf();
        fs::create_dir_all(path.join("src")).unwrap();
        fs::write(path.join("src/lib.php"), "<?php\n").unwrap();

        drop(work);

        assert!(!path.exists());
    }

    #[test]
    fn release_removes_directory() {
        let work = TempWorkDir::new().unwrap();
        let path = work.path().to_path_buf();

        work.release().unwrap();

        assert!(!path.exists());
    }
}
