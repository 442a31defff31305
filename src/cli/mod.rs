//! CLI argument parsing for pps.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::template::DEFAULT_TEMPLATE;
use clap::{ArgAction, Parser, Subcommand};

/// pps: scaffold new projects from starter templates.
///
/// Templates are plain directory trees. `pps init` copies one into a fresh
/// project directory:
/// - `MODE=local` (default): bundled template, deployed into `./<name>/`
/// - `MODE=remote`: template already checked out under `./templates/`,
///   deployed into the current directory
#[derive(Parser, Debug)]
#[command(name = "pps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pps.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new project from a template.
    ///
    /// Stages the template in a temporary directory, then packages and
    /// unpacks it into the empty project directory.
    Init(InitArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project name (letters, digits, `_` and `-`; starts with a letter).
    pub name: String,

    /// Template used.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Force overwriting of an existing project directory.
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::try_parse_from(["pps", "init", "myproj"]).unwrap();
        let Command::Init(args) = cli.command;
        assert_eq!(args.name, "myproj");
        assert_eq!(args.template, "php");
        assert!(!args.force);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_init_short_flags() {
        let cli = Cli::try_parse_from(["pps", "init", "myproj", "-t", "rust", "-f"]).unwrap();
        let Command::Init(args) = cli.command;
        assert_eq!(args.template, "rust");
        assert!(args.force);
    }

    #[test]
    fn parse_init_long_flags() {
        let cli =
            Cli::try_parse_from(["pps", "init", "myproj", "--template", "lib", "--force"]).unwrap();
        let Command::Init(args) = cli.command;
        assert_eq!(args.template, "lib");
        assert!(args.force);
    }

    #[test]
    fn parse_init_accepts_empty_name() {
        // Empty names are rejected by validation, not by the parser.
        let cli = Cli::try_parse_from(["pps", "init", ""]).unwrap();
        let Command::Init(args) = cli.command;
        assert_eq!(args.name, "");
    }

    #[test]
    fn init_requires_name() {
        assert!(Cli::try_parse_from(["pps", "init"]).is_err());
    }

    #[test]
    fn parse_verbosity() {
        let cli = Cli::try_parse_from(["pps", "-vv", "init", "x"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["pps", "init", "x", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pps", "-q", "-v", "init", "x"]).is_err());
    }
}
