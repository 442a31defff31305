//! Filesystem operations for pps.
//!
//! Staging a template into the temporary work area, guarding the project
//! directory, and owning the work area itself.

pub mod guard;
pub mod stage;
pub mod workdir;

pub use guard::{assert_empty_or_fail, ensure_empty};
pub use stage::copy_template;
pub use workdir::TempWorkDir;
