//! Installed-package inspection through the inventory utility.

use std::io::Write;

use crate::config::Config;
use crate::constants;
use crate::core::filter::{Filter, FilterChain};
use crate::core::runner::ToolCommand;
use crate::error::{CliError, Result};
use crate::logger::Logger;
use crate::state::Command;

/// How one inventory command maps onto the utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub command: Command,
    /// Flags passed before the user's arguments.
    pub tool_flags: &'static [&'static str],
    /// INFO status line.
    pub message: &'static str,
    /// What the user must supply, if anything.
    pub required: Option<&'static str>,
    /// Leading header lines dropped from the output.
    pub header_lines: usize,
}

impl Query {
    /// Looks up the mapping for an inventory command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownSubcommand`] for commands the inventory
    /// utility does not serve.
    pub fn for_command(command: Command) -> Result<Self> {
        let query = match command {
            Command::Check => Self::new(
                command,
                &[constants::CYGCHECK_CHECK],
                constants::MSG_CHECKING,
                None,
                2,
            ),
            Command::Dump => Self::new(
                command,
                &[constants::CYGCHECK_CHECK, constants::CYGCHECK_DUMP_ONLY],
                constants::MSG_DUMPING,
                None,
                2,
            ),
            Command::List => Self::new(
                command,
                &[constants::CYGCHECK_LIST],
                constants::MSG_LISTING,
                None,
                0,
            ),
            Command::Find => Self::new(
                command,
                &[constants::CYGCHECK_FIND],
                constants::MSG_FINDING,
                Some("file"),
                0,
            ),
            Command::Query => Self::new(
                command,
                &[constants::CYGCHECK_QUERY],
                constants::MSG_QUERYING,
                Some("regular expression"),
                1,
            ),
            other => return Err(CliError::UnknownSubcommand(other.to_string())),
        };
        Ok(query)
    }

    const fn new(
        command: Command,
        tool_flags: &'static [&'static str],
        message: &'static str,
        required: Option<&'static str>,
        header_lines: usize,
    ) -> Self {
        Self {
            command,
            tool_flags,
            message,
            required,
            header_lines,
        }
    }

    /// Builds the utility command line.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingArgument`] when the command needs an
    /// argument and none was given.
    pub fn build(&self, arguments: &[String], config: &Config) -> Result<ToolCommand> {
        if let Some(what) = self.required {
            if arguments.is_empty() {
                return Err(CliError::MissingArgument {
                    command: self.command.name(),
                    what,
                });
            }
        }

        Ok(ToolCommand::new(&config.inventory)
            .args(self.tool_flags.iter().copied())
            .args(arguments.iter().cloned()))
    }

    /// Indents the output and drops the header.
    #[must_use]
    pub fn output_filter(&self) -> FilterChain {
        FilterChain::new()
            .then(Filter::Indent(constants::OUTPUT_INDENT))
            .then(Filter::SkipLines(self.header_lines))
    }
}

/// Runs an inventory command and returns the utility's exit status.
///
/// # Errors
///
/// Propagates mapping and argument errors from [`Query`] and spawn/I/O
/// errors from the runner.
pub fn run(
    command: Command,
    arguments: &[String],
    config: &Config,
    logger: &Logger,
    out: &mut impl Write,
) -> Result<i32> {
    let query = Query::for_command(command)?;
    let tool = query.build(arguments, config)?;

    logger.info(query.message);
    logger.debug(&format!("{}{}", constants::MSG_RUNNING, tool.display()));

    tool.run(query.output_filter(), out)
}
