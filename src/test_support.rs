use crate::error::DeployError;
use crate::packager::{ArchiveHandle, Packager, TarGzPackager};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Files of the fixture `php` template, relative to the template root.
pub(crate) const FIXTURE_FILES: &[(&str, &str)] = &[
    ("composer.json", "{\n    \"name\": \"pps.vendor/pps.repo_name\"\n}\n"),
    ("README.md", "# pps.doc_title\n"),
    ("src/.gitkeep", ""),
    ("tests/Unit/ExampleTest.php", "<?php\n"),
];

/// An install root with `templates/php` populated from [`FIXTURE_FILES`]
/// plus an empty `templates/php/var` directory.
pub(crate) fn create_install_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("templates").join("php");
    write_tree(&template, FIXTURE_FILES);
    fs::create_dir_all(template.join("var")).unwrap();
    temp_dir
}

pub(crate) fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
    }
}

/// Every entry below `root`: directories map to `None`, files to their bytes.
pub(crate) fn snapshot_tree(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = if entry.file_type().is_dir() {
                None
            } else {
                Some(fs::read(entry.path()).unwrap())
            };
            (rel, content)
        })
        .collect()
}

/// Packager that records each call and fails at a chosen step.
///
/// Non-failing steps delegate to a real [`TarGzPackager`], so a script with
/// no failure deploys for real.
#[derive(Default)]
pub(crate) struct ScriptedPackager {
    pub(crate) calls: Vec<&'static str>,
    pub(crate) fail_on: Option<&'static str>,
    inner: TarGzPackager,
}

impl ScriptedPackager {
    pub(crate) fn failing_on(step: &'static str) -> Self {
        Self {
            fail_on: Some(step),
            ..Default::default()
        }
    }

    fn step(&mut self, name: &'static str) -> Result<(), DeployError> {
        self.calls.push(name);
        if self.fail_on == Some(name) {
            return Err(DeployError::Compress {
                path: PathBuf::from(name),
                source: io::Error::other("scripted failure"),
            });
        }
        Ok(())
    }
}

impl Packager for ScriptedPackager {
    fn compress(&mut self, source: &Path) -> Result<ArchiveHandle, DeployError> {
        self.step("compress")?;
        self.inner.compress(source)
    }

    fn extract(&mut self, archive: &ArchiveHandle, dest: &Path) -> Result<(), DeployError> {
        self.step("extract")?;
        self.inner.extract(archive, dest)
    }

    fn clean(&mut self) -> Result<(), DeployError> {
        self.step("clean")?;
        self.inner.clean()
    }
}
