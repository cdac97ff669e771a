//! Package installation and removal through the installer executable.

use std::io::Write;

use crate::config::Config;
use crate::constants;
use crate::core::filter::{Filter, FilterChain};
use crate::core::runner::ToolCommand;
use crate::error::{CliError, Result};
use crate::logger::Logger;
use crate::state::{Command, Flags};

/// Builds the installer command line for `install` or `remove`.
///
/// Package names are joined with the placeholder delimiter because the
/// installer takes a single comma-separated list.
///
/// # Errors
///
/// Returns [`CliError::MissingArgument`] when `packages` is empty and
/// [`CliError::UnknownSubcommand`] for any other command.
pub fn build(
    command: Command,
    packages: &[String],
    flags: Flags,
    config: &Config,
) -> Result<ToolCommand> {
    let selector = match command {
        Command::Install => constants::SETUP_PACKAGES,
        Command::Remove => constants::SETUP_REMOVE_PACKAGES,
        other => return Err(CliError::UnknownSubcommand(other.to_string())),
    };

    if packages.is_empty() {
        return Err(CliError::MissingArgument {
            command: command.name(),
            what: "packages",
        });
    }

    let delimiter = constants::PLACEHOLDER_DELIMITER.to_string();
    Ok(ToolCommand::new(&config.installer)
        .arg(constants::SETUP_ARCH)
        .arg(config.arch.as_str())
        .arg(constants::SETUP_LOCAL_INSTALL)
        .arg(constants::SETUP_PACKAGE_DIR)
        .arg(config.package_dir.display().to_string())
        .arg_if(!flags.interactive, constants::SETUP_QUIET)
        .arg_if(flags.verbose, constants::SETUP_VERBOSE)
        .arg(selector)
        .arg(packages.join(delimiter.as_str())))
}

/// Drops extraction progress and restores spaces between package names.
#[must_use]
pub fn output_filter() -> FilterChain {
    FilterChain::new()
        .then(Filter::DropMatching(constants::SETUP_EXTRACT_NOISE.to_string()))
        .then(Filter::ReplaceChar(constants::PLACEHOLDER_DELIMITER, ' '))
}

/// Runs `install` or `remove` and returns the installer's exit status.
///
/// # Errors
///
/// Propagates argument errors from [`build`] and spawn/I/O errors from the
/// runner.
pub fn run(
    command: Command,
    packages: &[String],
    flags: Flags,
    config: &Config,
    logger: &Logger,
    out: &mut impl Write,
) -> Result<i32> {
    let tool = build(command, packages, flags, config)?;

    let action = if command == Command::Install {
        constants::MSG_INSTALLING
    } else {
        constants::MSG_REMOVING
    };
    logger.info(&format!("{action}{}", packages.join(" ")));
    logger.debug(&format!("{}{}", constants::MSG_RUNNING, tool.display()));

    tool.run(output_filter(), out)
}
