//! cygpkg: a package manager front-end for Cygwin.
//!
//! Installs and removes packages through the `setup` installer, inspects the
//! installed set through `cygcheck`, and answers `search`/`describe` offline
//! from the local `setup.ini` package index.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logger;
pub mod state;

use std::env;
use std::io::Write;

use cli::args::Args;
use cli::parser::{self, Parsed};
use config::Config;
use error::Result;
use logger::Logger;

/// Runs one invocation and returns the process exit status.
///
/// A reader closing stdout early (`cygpkg search | head`) ends the run
/// quietly with status 0.
///
/// # Errors
///
/// Returns the first usage, configuration or I/O error; nothing runs after
/// it.
pub fn run(args: &Args, out: &mut impl Write) -> Result<i32> {
    match execute(args, out) {
        Err(err) if err.is_broken_pipe() => Ok(0),
        result => result,
    }
}

fn execute(args: &Args, out: &mut impl Write) -> Result<i32> {
    let invocation = match parser::parse(&args.tokens) {
        Parsed::Usage => {
            write!(out, "{}", cli::usage::usage())?;
            return Ok(0);
        }
        Parsed::Run(invocation) => invocation,
    };

    let mut logger = Logger::new(invocation.flags.debug, invocation.flags.verbose);
    if let Ok(levels) = env::var(constants::ENV_LOG) {
        logger.enable_from(&levels);
    }

    let config = Config::load(args.config.as_deref())?;
    logger.debug(&format!("config: {config:?}"));

    let code = cli::commands::dispatch(&invocation, &config, &logger, out)?;
    if code != 0 {
        logger.debug(&format!(
            "{}{}{code}",
            invocation.command.map_or("", state::Command::name),
            constants::MSG_TOOL_EXITED
        ));
    }
    Ok(code)
}
