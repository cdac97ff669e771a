//! Error types returned to the top-level handler in `main`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants;

/// Every failure that ends a cygpkg invocation early.
///
/// Usage errors are raised before any external tool runs. Failures of the
/// tools themselves are not errors here: their exit status is passed through.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("no command given (try '{} help')", constants::APP_NAME)]
    NoCommand,

    #[error("{command}: no {what} given")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("unrecognized sub-command: {0}")]
    UnknownSubcommand(String),

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("cannot read package index {}: {source}", path.display())]
    IndexRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot run {tool}: {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ToolSpawn { .. } => constants::EXIT_TOOL_NOT_FOUND,
            _ => constants::EXIT_FAILURE,
        }
    }

    /// True when stdout was closed by the reader, e.g. `cygpkg search | head`.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_names_command() {
        let err = CliError::MissingArgument {
            command: "install",
            what: "packages",
        };
        assert_eq!(err.to_string(), "install: no packages given");
    }

    #[test]
    fn test_broken_pipe_detection() {
        let closed = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(closed.is_broken_pipe());
        let denied = CliError::from(io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert!(!denied.is_broken_pipe());
        assert!(!CliError::NoCommand.is_broken_pipe());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NoCommand.exit_code(), 1);
        let spawn = CliError::ToolSpawn {
            tool: "cygcheck".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(spawn.exit_code(), 127);
        assert!(spawn.to_string().contains("cygcheck"));
    }
}
