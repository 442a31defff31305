//! Runtime configuration for pps.
//!
//! Everything the `init` command needs from the process environment is read
//! once at startup into [`Config`] and passed down explicitly. There is no
//! configuration file.

use crate::error::ConfigError;
use crate::template::root::{self, ResourceRoot};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the running mode.
pub const MODE_ENV: &str = "MODE";

/// Environment variable overriding the install root that holds `templates/`.
pub const HOME_ENV: &str = "PPS_HOME";

/// Where templates come from and where the project is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Templates ship with pps; the project goes into `<cwd>/<name>`.
    #[default]
    Local,
    /// A checkout already placed `templates/` in the working directory,
    /// which becomes the project directory itself.
    Remote,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Remote => "remote",
        }
    }

    /// Parse the raw `MODE` value. Unset or empty means [`Mode::Local`].
    pub fn from_env_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            None | Some("") => Ok(Mode::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Mode::Local),
            "remote" => Ok(Mode::Remote),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a single pps invocation.
#[derive(Debug)]
pub struct Config {
    pub mode: Mode,

    /// Directory the command was invoked from.
    pub working_dir: PathBuf,

    /// Strategy locating the bundled `templates/` directory (local mode).
    pub resource_root: Box<dyn ResourceRoot>,
}

impl Config {
    pub fn new(mode: Mode, working_dir: PathBuf, resource_root: Box<dyn ResourceRoot>) -> Self {
        Self {
            mode,
            working_dir,
            resource_root,
        }
    }

    /// Build the configuration from `MODE`, `PPS_HOME` and the current directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match env::var(MODE_ENV) {
            Ok(value) => Mode::from_env_value(Some(value.as_str()))?,
            Err(env::VarError::NotPresent) => Mode::default(),
            Err(env::VarError::NotUnicode(raw)) => {
                return Err(ConfigError::InvalidMode(raw.to_string_lossy().into_owned()));
            }
        };

        let working_dir = env::current_dir().map_err(ConfigError::WorkingDir)?;
        let resource_root = root::select_resource_root(env::var_os(HOME_ENV));

        tracing::debug!(
            mode = %mode,
            working_dir = %working_dir.display(),
            root = ?resource_root,
            "resolved configuration"
        );

        Ok(Self::new(mode, working_dir, resource_root))
    }

    /// The deployment target for `name`.
    ///
    /// Local mode creates a subdirectory; remote mode deploys in place.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        match self.mode {
            Mode::Local => self.working_dir.join(name),
            Mode::Remote => self.working_dir.clone(),
        }
    }
}
