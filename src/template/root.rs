//! Install root resolution.
//!
//! Bundled templates live in `<install-root>/templates/`. Where the install
//! root is depends on how pps was started, so the lookup is a strategy chosen
//! once at startup.

use crate::error::ConfigError;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the directory holding templates under an install root.
pub const TEMPLATES_DIR: &str = "templates";

/// Locates the directory that contains the bundled `templates/` tree.
pub trait ResourceRoot: fmt::Debug {
    fn root(&self) -> PathBuf;

    fn templates_dir(&self) -> PathBuf {
        self.root().join(TEMPLATES_DIR)
    }
}

/// Templates shipped next to the installed executable.
#[derive(Debug, Clone)]
pub struct ExecutableRoot {
    dir: PathBuf,
}

impl ExecutableRoot {
    pub fn detect() -> Result<Self, ConfigError> {
        let exe = env::current_exe().map_err(ConfigError::Executable)?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self { dir })
    }
}

impl ResourceRoot for ExecutableRoot {
    fn root(&self) -> PathBuf {
        self.dir.clone()
    }
}

/// Templates in the crate's own source tree, for runs from a checkout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceTreeRoot;

impl ResourceRoot for SourceTreeRoot {
    fn root(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }
}

/// An explicitly configured install root.
#[derive(Debug, Clone)]
pub struct FixedRoot {
    dir: PathBuf,
}

impl FixedRoot {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl ResourceRoot for FixedRoot {
    fn root(&self) -> PathBuf {
        self.dir.clone()
    }
}

/// Pick the install root strategy.
///
/// `PPS_HOME` wins when set; otherwise templates next to the executable are
/// used if present, falling back to the source tree.
pub fn select_resource_root(home: Option<OsString>) -> Box<dyn ResourceRoot> {
    if let Some(home) = home
        && !home.is_empty()
    {
        return Box::new(FixedRoot::new(home));
    }

    match ExecutableRoot::detect() {
        Ok(exe_root) if exe_root.templates_dir().is_dir() => Box::new(exe_root),
        Ok(_) => Box::new(SourceTreeRoot),
        Err(e) => {
            tracing::warn!("{e}; falling back to source tree templates");
            Box::new(SourceTreeRoot)
        }
    }
}
