//! Implementation of the `pps init` command.
//!
//! # What `pps init` does
//!
//! 1. Validates the project name
//! 2. Resolves the project directory (`./<name>` locally, `.` in remote mode)
//! 3. Resolves the template and prints its tree
//! 4. Stages the template into the temporary work directory
//! 5. Ensures the project directory exists and is empty (`--force` clears it)
//! 6. Deploys the staged files (package, unpack, clean)
//! 7. Releases the temporary work directory
//!
//! The work directory is created when the command is constructed and is
//! removed on every exit path, including failures in any step above.


use crate::cli::InitArgs;
use crate::config::Config;
use crate::deploy::deploy;
use crate::error::Result;
use crate::fs::{TempWorkDir, copy_template, ensure_empty};
use crate::packager::{Packager, TarGzPackager};
use crate::template::{DEFAULT_TEMPLATE, TemplateLocator};
use crate::tree::{DirectoryTree, TreeRenderer};
use crate::validate::validate_project_name;
use std::io::Write;

/// The `init` command with its collaborators and temporary work directory.
pub struct InitCommand<'a> {
    config: &'a Config,
    packager: Box<dyn Packager>,
    tree: Box<dyn TreeRenderer>,
    workdir: TempWorkDir,
}

impl<'a> InitCommand<'a> {
    /// Create the command and its temporary work directory.
    pub fn new(
        config: &'a Config,
        packager: Box<dyn Packager>,
        tree: Box<dyn TreeRenderer>,
    ) -> Result<Self> {
        Ok(Self {
            config,
            packager,
            tree,
            workdir: TempWorkDir::new()?,
        })
    }

    #[cfg(test)]
    pub(crate) fn work_dir(&self) -> &std::path::Path {
        self.workdir.path()
    }

    /// Run the scaffolding steps, writing progress to `out`.
    ///
    /// Consumes the command so the work directory is dropped, and therefore
    /// removed, whichever way this returns.
    pub fn execute(self, args: &InitArgs, out: &mut dyn Write) -> Result<()> {
        let InitCommand {
            config,
            mut packager,
            tree,
            workdir,
        } = self;

        let name = args.name.as_str();
        validate_project_name(name)?;

        let project_dir = config.project_dir(name);
        let template = match args.template.as_str() {
            "" => DEFAULT_TEMPLATE,
            other => other,
        };
        let force = args.force;

        tracing::info!(
            name,
            template,
            mode = %config.mode,
            project_dir = %project_dir.display(),
            force,
            "initializing project"
        );

        let locator = TemplateLocator::new(config.mode, config.resource_root.as_ref());
        let template_ref = locator.resolve(template, &project_dir)?;

        writeln!(out)?;
        writeln!(out, "🚀 To initialize project from template [{}]:", template_ref.name)?;
        writeln!(out)?;
        match tree.render(&template_ref.path) {
            Ok(rendered) => writeln!(out, "{}", rendered)?,
            Err(e) => tracing::warn!(
                path = %template_ref.path.display(),
                "failed to render template tree: {}",
                e
            ),
        }

        copy_template(&template_ref.path, workdir.path())?;
        writeln!(out, "✅ Template files staged into the temporary work area.")?;
        writeln!(out)?;

        ensure_empty(config.mode, &project_dir, force)?;
        writeln!(out, "✅ Project directory checked and confirmed empty.")?;
        writeln!(out)?;

        deploy(packager.as_mut(), workdir.path(), &project_dir)?;
        writeln!(out, "✅ Package extracted and files deployed.")?;
        writeln!(out)?;

        workdir.release()?;
        writeln!(out, "✅ Temporary resources released.")?;
        writeln!(out)?;

        writeln!(out, "✅ All done! Your [{}] project is ready.", name)?;
        writeln!(out)?;

        Ok(())
    }
}

/// Execute `pps init` with the default packager and tree renderer.
pub fn cmd_init(config: &Config, args: &InitArgs, out: &mut dyn Write) -> Result<()> {
    let command = InitCommand::new(
        config,
        Box::new(TarGzPackager::new()),
        Box::new(DirectoryTree),
    )?;
    command.execute(args, out)
}
