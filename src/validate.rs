//! Project name validation.
//!
//! Names are taken literally: no trimming or case folding happens before the
//! rules run, so `" app"` is rejected for its leading space.

use crate::error::NameError;
use regex::Regex;
use std::sync::LazyLock;

/// Longest accepted project name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Starts with a letter; when longer than one character, ends with a letter or digit.
static NAME_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z](.*[a-zA-Z0-9])?$").expect("Invalid project name regex")
});

/// Validate a project name.
///
/// Rules are checked in order and the first failure is returned:
/// 1. non-empty
/// 2. at most [`MAX_NAME_LEN`] characters
/// 3. only `[a-zA-Z0-9_-]` (reports the first offending character)
/// 4. starts with a letter and does not end with `_` or `-`
pub fn validate_project_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong { max: MAX_NAME_LEN });
    }

    if let Some(illegal) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(NameError::IllegalCharacter(illegal));
    }

    if !NAME_SHAPE_REGEX.is_match(name) {
        return Err(NameError::BadShape);
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
