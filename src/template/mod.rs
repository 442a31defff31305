//! Template lookup.
//!
//! A template is a named directory tree of starter files. In local mode it is
//! taken from the install root; in remote mode from the project directory,
//! where an earlier checkout is expected to have placed it.

pub mod root;

use crate::config::Mode;
use crate::error::TemplateError;
use root::{ResourceRoot, TEMPLATES_DIR};
use std::path::{Path, PathBuf};

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "php";

/// A template name resolved to its source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub name: String,
    pub path: PathBuf,
}

/// Resolves template names to existing directories for one mode.
#[derive(Debug)]
pub struct TemplateLocator<'a> {
    mode: Mode,
    root: &'a dyn ResourceRoot,
}

impl<'a> TemplateLocator<'a> {
    pub fn new(mode: Mode, root: &'a dyn ResourceRoot) -> Self {
        Self { mode, root }
    }

    /// Resolve `template` to its source directory.
    ///
    /// Returns `TemplateError::InvalidTemplate` with the candidate path when
    /// it is not an existing directory.
    pub fn resolve(&self, template: &str, project_dir: &Path) -> Result<TemplateRef, TemplateError> {
        let base = match self.mode {
            Mode::Local => self.root.templates_dir(),
            Mode::Remote => project_dir.join(TEMPLATES_DIR),
        };
        let path = base.join(template);

        if !path.is_dir() {
            return Err(TemplateError::InvalidTemplate(path));
        }

        tracing::debug!(template, path = %path.display(), "resolved template");

        Ok(TemplateRef {
            name: template.to_string(),
            path,
        })
    }
}
