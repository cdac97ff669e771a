//! The parsed command line.

use std::fmt;

/// Package commands cygpkg understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Install packages with the installer.
    Install,
    /// Remove packages with the installer.
    Remove,
    /// Verify installed packages.
    Check,
    /// List installed packages and versions without verifying.
    Dump,
    /// List files owned by packages.
    List,
    /// Find the package owning a file.
    Find,
    /// Query the remote package database.
    Query,
    /// Search the package index.
    Search,
    /// Print package descriptions from the package index.
    Describe,
}

impl Command {
    /// Every command, in usage order.
    pub const ALL: [Self; 9] = [
        Self::Search,
        Self::Describe,
        Self::Install,
        Self::Remove,
        Self::Check,
        Self::Dump,
        Self::List,
        Self::Find,
        Self::Query,
    ];

    /// Command-line token for this command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Remove => "remove",
            Self::Check => "check",
            Self::Dump => "dump",
            Self::List => "list",
            Self::Find => "find",
            Self::Query => "query",
            Self::Search => "search",
            Self::Describe => "describe",
        }
    }

    /// Looks up a command token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == token)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode switches, all off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `-d`: show DEBUG lines.
    pub debug: bool,
    /// `-v`: show INFO lines and pass `--verbose` to the installer.
    pub verbose: bool,
    /// `-i`: let the installer show its GUI.
    pub interactive: bool,
}

/// Everything the dispatcher needs, built once by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// The last command token seen, if any.
    pub command: Option<Command>,
    pub flags: Flags,
    /// Non-command, non-flag tokens in order.
    pub arguments: Vec<String>,
}
