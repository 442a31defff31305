//! Deployment of the staging area into the project directory.

use crate::error::DeployError;
use crate::fs::assert_empty_or_fail;
use crate::packager::Packager;
use std::path::Path;

/// Move the staged files in `temp_dir` into `project_dir`.
///
/// Steps run in order and the first failure is returned as is:
/// 1. re-check that `project_dir` is empty
/// 2. compress `temp_dir`
/// 3. extract the package into `project_dir`
/// 4. clean the packager's intermediate state
///
/// Files already extracted are not rolled back on a later failure.
pub fn deploy(
    packager: &mut dyn Packager,
    temp_dir: &Path,
    project_dir: &Path,
) -> Result<(), DeployError> {
    assert_empty_or_fail(project_dir)?;

    let archive = packager.compress(temp_dir)?;
    packager.extract(&archive, project_dir)?;
    packager.clean()?;

    tracing::info!(project_dir = %project_dir.display(), "deployed staged files");
    Ok(())
}
