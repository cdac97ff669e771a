//! Severity-gated status output.
//!
//! DEBUG lines appear only with `-d`, INFO lines only with `-v`. WARN and
//! ERROR are always written. All lines go to stderr so that tool output on
//! stdout stays clean for pipes.

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::str::FromStr;

use crossterm::style::{Color, Stylize};

use crate::constants;

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Debug => Color::DarkGrey,
            Self::Info => Color::Cyan,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(s.trim().to_string()),
        }
    }
}

/// Writes status lines according to the debug/verbose mode flags.
#[derive(Debug, Clone)]
pub struct Logger {
    debug: bool,
    verbose: bool,
    color: bool,
    /// Collects lines instead of writing them to stderr.
    record: Option<RefCell<Vec<String>>>,
}

impl Logger {
    /// Creates a logger; colors are used only when stderr is a terminal.
    #[must_use]
    pub fn new(debug: bool, verbose: bool) -> Self {
        Self {
            debug,
            verbose,
            color: crossterm::tty::IsTty::is_tty(&io::stderr()),
            record: None,
        }
    }

    /// Logger without color, for deterministic output.
    #[must_use]
    pub const fn plain(debug: bool, verbose: bool) -> Self {
        Self {
            debug,
            verbose,
            color: false,
            record: None,
        }
    }

    /// Uncolored logger that keeps its lines for [`Logger::recorded`].
    #[must_use]
    pub fn recording(debug: bool, verbose: bool) -> Self {
        Self {
            record: Some(RefCell::new(Vec::new())),
            ..Self::plain(debug, verbose)
        }
    }

    /// Lines written so far by a [`Logger::recording`] logger.
    #[must_use]
    pub fn recorded(&self) -> Vec<String> {
        self.record
            .as_ref()
            .map_or_else(Vec::new, |lines| lines.borrow().clone())
    }

    /// Turns on the levels named in a comma-separated list such as
    /// `"debug,info"`. Unknown names are reported at WARN.
    pub fn enable_from(&mut self, levels: &str) {
        for name in levels.split(',').filter(|s| !s.trim().is_empty()) {
            match name.parse::<Level>() {
                Ok(Level::Debug) => self.debug = true,
                Ok(Level::Info) => self.verbose = true,
                Ok(Level::Warn | Level::Error) => {}
                Err(unknown) => self.warn(&format!("{}{unknown}", constants::MSG_UNKNOWN_LEVEL)),
            }
        }
    }

    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.verbose,
            Level::Warn | Level::Error => true,
        }
    }

    /// Renders a line for `level`, or `None` when the level is switched off.
    #[must_use]
    pub fn format(&self, level: Level, msg: &str) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }
        if self.color {
            Some(format!("{}: {msg}", level.tag().with(level.color())))
        } else {
            Some(format!("{level}: {msg}"))
        }
    }

    pub fn log(&self, level: Level, msg: &str) {
        let Some(line) = self.format(level, msg) else {
            return;
        };
        match &self.record {
            Some(lines) => lines.borrow_mut().push(line),
            None => eprintln!("{line}"),
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    /// Writes an ERROR line. Terminating is left to the caller, which owns
    /// the exit status.
    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }
}
