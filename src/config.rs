//! Tool locations and installer settings.
//!
//! Defaults come from [`crate::constants`]. A `config.toml` in the user
//! config directory (or the file named by `--config` / `CYGPKG_CONFIG`)
//! overrides any subset of them:
//!
//! ```toml
//! installer = "/cygdrive/c/cygwin64/setup-x86_64.exe"
//! package_dir = "/cygdrive/d/mirror"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::{CliError, Result};

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Installer executable.
    pub installer: PathBuf,
    /// Inventory utility.
    pub inventory: PathBuf,
    /// Architecture passed to the installer.
    pub arch: String,
    /// Local package mirror the installer reads from.
    pub package_dir: PathBuf,
    /// Package index file used by `search` and `describe`.
    pub index_file: PathBuf,
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    installer: Option<PathBuf>,
    inventory: Option<PathBuf>,
    arch: Option<String>,
    package_dir: Option<PathBuf>,
    index_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().resolve()
    }
}

impl ConfigFile {
    fn resolve(self) -> Config {
        let arch = self
            .arch
            .unwrap_or_else(|| constants::DEFAULT_ARCH.to_string());
        let package_dir = self
            .package_dir
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_PACKAGE_DIR));
        let index_file = self
            .index_file
            .unwrap_or_else(|| package_dir.join(&arch).join(constants::INDEX_FILE_NAME));

        Config {
            installer: self
                .installer
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_INSTALLER)),
            inventory: self
                .inventory
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_INVENTORY)),
            arch,
            package_dir,
            index_file,
        }
    }
}

impl Config {
    /// Parses config file contents; `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        Ok(file.resolve())
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file cannot be read or any file fails
    /// to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path).map_err(|e| CliError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            return Self::from_toml(&content, path);
        }

        match default_path() {
            Some(path) if path.is_file() => {
                let content = fs::read_to_string(&path)?;
                Self::from_toml(&content, &path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/cygpkg/config.toml`, if the platform has a config dir.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}
