//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout cygpkg, including
//! default tool locations, the flags passed to each external tool, index file
//! markers, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Short technical summary of the application (from Cargo.toml).
pub const APP_SUMMARY: &str = env!("CARGO_PKG_DESCRIPTION");

// === Environment ===

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "CYGPKG_CONFIG";
/// Comma-separated log levels to enable in addition to `-d`/`-v`.
pub const ENV_LOG: &str = "CYGPKG_LOG";

// === Path Configuration ===

/// Name of the config subdirectory under the user config dir.
pub const CONFIG_DIR_NAME: &str = "cygpkg";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the package index file inside `<package_dir>/<arch>/`.
pub const INDEX_FILE_NAME: &str = "setup.ini";

// === Tool Defaults ===

/// Installer executable, resolved through `PATH` unless configured.
pub const DEFAULT_INSTALLER: &str = "setup-x86_64.exe";
/// Inventory utility, resolved through `PATH` unless configured.
pub const DEFAULT_INVENTORY: &str = "cygcheck";
/// Package architecture handed to the installer.
pub const DEFAULT_ARCH: &str = "x86_64";
/// Local mirror the installer installs from.
pub const DEFAULT_PACKAGE_DIR: &str = "/var/cache/cygpkg";

// === Installer Flags ===

pub const SETUP_ARCH: &str = "--arch";
pub const SETUP_LOCAL_INSTALL: &str = "--local-install";
pub const SETUP_PACKAGE_DIR: &str = "--local-package-dir";
pub const SETUP_QUIET: &str = "--quiet-mode";
pub const SETUP_VERBOSE: &str = "--verbose";
pub const SETUP_PACKAGES: &str = "--packages";
pub const SETUP_REMOVE_PACKAGES: &str = "--remove-packages";

/// Joins package names for the installer; turned back into spaces in its output.
pub const PLACEHOLDER_DELIMITER: char = ',';
/// Installer progress lines that are dropped from the output.
pub const SETUP_EXTRACT_NOISE: &str = "Extracting from file";

// === Inventory Flags ===

pub const CYGCHECK_CHECK: &str = "--check-setup";
pub const CYGCHECK_DUMP_ONLY: &str = "--dump-only";
pub const CYGCHECK_LIST: &str = "--list-package";
pub const CYGCHECK_FIND: &str = "--find-package";
pub const CYGCHECK_QUERY: &str = "--package-query";

// === Package Index Format ===

/// Opens a package record: `@ <name>`.
pub const RECORD_MARKER: char = '@';
/// Closes the part of a record that `describe` prints.
pub const VERSION_PREFIX: &str = "version:";
/// Description fields whose prefixes `describe` strips.
pub const DESC_PREFIXES: [&str; 2] = ["sdesc: ", "ldesc: "];

/// Indentation applied to tool output and descriptions.
pub const OUTPUT_INDENT: usize = 2;

// === Messages ===

pub const MSG_INSTALLING: &str = "Installing packages: ";
pub const MSG_REMOVING: &str = "Removing packages: ";
pub const MSG_CHECKING: &str = "Checking installed packages";
pub const MSG_DUMPING: &str = "Dumping installed packages";
pub const MSG_LISTING: &str = "Listing package contents";
pub const MSG_FINDING: &str = "Finding package owning file";
pub const MSG_QUERYING: &str = "Querying package database";
pub const MSG_SEARCHING: &str = "Searching package index ";
pub const MSG_DESCRIBING: &str = "Describing ";
pub const MSG_RUNNING: &str = "Running: ";
pub const MSG_PACKAGE_NOT_FOUND: &str = "package not found: ";
pub const MSG_UNKNOWN_LEVEL: &str = "unknown log level: ";
pub const MSG_TOOL_EXITED: &str = " exited with status ";

// === Exit Codes ===

/// Usage, configuration and I/O failures.
pub const EXIT_FAILURE: i32 = 1;
/// The external tool could not be started.
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;
