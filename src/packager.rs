//! Packaging of the staging area.
//!
//! The deployer moves staged files into the project directory by compressing
//! them into a package and extracting that package at the destination. The
//! [`Packager`] trait is the seam; [`TarGzPackager`] is the implementation
//! used by the CLI and writes a gzip-compressed tar archive.

use crate::error::DeployError;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tar::{Archive, Builder as TarBuilder};
use tempfile::TempDir;
use walkdir::WalkDir;

/// File name of the package inside the packager's scratch directory.
pub const PACKAGE_FILE: &str = "package.tar.gz";

/// Reference to a package produced by [`Packager::compress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHandle {
    path: PathBuf,
}

impl ArchiveHandle {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Compresses a directory into a package and extracts it elsewhere.
pub trait Packager {
    /// Package the contents of `source`.
    fn compress(&mut self, source: &Path) -> Result<ArchiveHandle, DeployError>;

    /// Unpack `archive` into `dest`.
    fn extract(&mut self, archive: &ArchiveHandle, dest: &Path) -> Result<(), DeployError>;

    /// Discard any intermediate state. Calling it more than once is fine.
    fn clean(&mut self) -> Result<(), DeployError>;
}

/// Gzip-compressed tar packager with its own scratch directory.
#[derive(Debug, Default)]
pub struct TarGzPackager {
    scratch: Option<TempDir>,
}

impl TarGzPackager {
    pub fn new() -> Self {
        Self { scratch: None }
    }

    /// Path of the package file, creating the scratch directory on first use.
    fn package_path(&mut self) -> std::io::Result<PathBuf> {
        let dir = match self.scratch.take() {
            Some(dir) => dir,
            None => tempfile::Builder::new().prefix("_pps_pkg_").tempdir()?,
        };
        let path = dir.path().join(PACKAGE_FILE);
        self.scratch = Some(dir);
        Ok(path)
    }

    fn write_archive(source: &Path, output: &Path) -> std::io::Result<usize> {
        let file = File::create(output)?;
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let mut tar = TarBuilder::new(encoder);

        let mut count = 0;
        for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            let Ok(rel_path) = entry.path().strip_prefix(source) else {
                continue;
            };

            if entry.file_type().is_dir() {
                tar.append_dir(rel_path, entry.path())?;
            } else {
                tar.append_path_with_name(entry.path(), rel_path)?;
            }
            count += 1;
        }

        let mut writer = tar.into_inner()?.finish()?;
        writer.flush()?;
        Ok(count)
    }
}

impl Packager for TarGzPackager {
    fn compress(&mut self, source: &Path) -> Result<ArchiveHandle, DeployError> {
        let compress_err = |e: std::io::Error| DeployError::Compress {
            path: source.to_path_buf(),
            source: e,
        };

        let output = self.package_path().map_err(compress_err)?;
        let entries = Self::write_archive(source, &output).map_err(compress_err)?;

        tracing::debug!(
            source = %source.display(),
            package = %output.display(),
            entries,
            "compressed staging area"
        );

        Ok(ArchiveHandle::new(output))
    }

    fn extract(&mut self, archive: &ArchiveHandle, dest: &Path) -> Result<(), DeployError> {
        if self.scratch.is_none() {
            return Err(DeployError::NoPackage);
        }

        let extract_err = |e: std::io::Error| DeployError::Extract {
            path: dest.to_path_buf(),
            source: e,
        };

        let file = File::open(archive.path()).map_err(extract_err)?;
        let mut tar = Archive::new(GzDecoder::new(BufReader::new(file)));
        tar.unpack(dest).map_err(extract_err)?;

        tracing::debug!(
            package = %archive.path().display(),
            dest = %dest.display(),
            "extracted package"
        );
        Ok(())
    }

    fn clean(&mut self) -> Result<(), DeployError> {
        if let Some(dir) = self.scratch.take() {
            let path = dir.path().to_path_buf();
            dir.close().map_err(|e| DeployError::Clean {
                path: path.clone(),
                source: e,
            })?;
            tracing::debug!(path = %path.display(), "removed package scratch directory");
        }
        Ok(())
    }
}
