//! Command dispatch.

use std::io::Write;

use crate::cli::parser;
use crate::config::Config;
use crate::core::{index, installer, inventory};
use crate::error::{CliError, Result};
use crate::logger::Logger;
use crate::state::{Command, Invocation};

/// Runs the handler bound to the invocation's command and returns the exit
/// status to use.
///
/// # Errors
///
/// Returns [`CliError::NoCommand`] when no command token was given, and any
/// error raised by the handler.
pub fn dispatch(
    invocation: &Invocation,
    config: &Config,
    logger: &Logger,
    out: &mut impl Write,
) -> Result<i32> {
    logger.debug(&format!("flags: {}", parser::describe_flags(invocation.flags)));
    logger.debug(&format!("arguments: {:?}", invocation.arguments));

    let command = invocation.command.ok_or(CliError::NoCommand)?;
    logger.debug(&format!("command: {command}"));

    let arguments = invocation.arguments.as_slice();
    match command {
        Command::Install | Command::Remove => {
            installer::run(command, arguments, invocation.flags, config, logger, out)
        }
        Command::Check | Command::Dump | Command::List | Command::Find | Command::Query => {
            inventory::run(command, arguments, config, logger, out)
        }
        Command::Search => index::search(&config.index_file, arguments, logger, out),
        Command::Describe => index::describe(&config.index_file, arguments, logger, out),
    }
}
