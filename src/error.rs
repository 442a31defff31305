//! Error types for the pps CLI.
//!
//! Each component has its own error enum; they are collected into [`PpsError`]
//! which is the only error type the entry point renders.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Project name validation failures, in rule order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("Project name cannot exceed {max} characters")]
    TooLong { max: usize },

    #[error("Project name contains illegal character \"{0}\"")]
    IllegalCharacter(char),

    #[error("Must start with a letter and cannot end with underscore/hyphen")]
    BadShape,
}

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `MODE` holds something other than `local` or `remote`.
    #[error("Unknown running mode: {0}")]
    InvalidMode(String),

    #[error("Unable to get current working directory")]
    WorkingDir(#[source] io::Error),

    #[error("Unable to locate the running executable")]
    Executable(#[source] io::Error),
}

/// Template resolution failures.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Invalid template provided: {}", .0.display())]
    InvalidTemplate(PathBuf),
}

/// Failures while copying a template into the staging area.
#[derive(Error, Debug)]
pub enum StageError {
    #[error("failed to read template entry '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to create directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy '{}' to '{}'", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures from the project directory guard.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The local target exists and `--force` was not given.
    #[error("Directory {} already exists. Use --force to overwrite.", .0.display())]
    DirectoryNotEmpty(PathBuf),

    /// The pre-deploy re-check found entries in the target.
    #[error("{} is not empty. Please retry.", .0.display())]
    NotEmpty(PathBuf),

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures while packaging the staging area into the project directory.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error("failed to compress '{}'", path.display())]
    Compress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to extract package into '{}'", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to clean package state at '{}'", path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `extract` was called before anything was compressed.
    #[error("no package has been compressed yet")]
    NoPackage,
}

/// Main error type for pps operations.
#[derive(Error, Debug)]
pub enum PpsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    /// Progress or error output could not be written.
    #[error("failed to write output")]
    Output(#[from] io::Error),

    /// Temporary work area could not be created or released.
    #[error("Failed to manage temp directory at {}", path.display())]
    TempDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PpsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PpsError::Config(_)
            | PpsError::Name(_)
            | PpsError::Template(_)
            | PpsError::Stage(_)
            | PpsError::Guard(_)
            | PpsError::Deploy(_)
            | PpsError::Output(_)
            | PpsError::TempDir { .. } => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for pps operations.
pub type Result<T> = std::result::Result<T, PpsError>;
