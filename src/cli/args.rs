//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// cygpkg - package manager front-end for Cygwin
///
/// Option and command tokens are interpreted by [`crate::cli::parser`], so
/// that unknown flags fall through to the command's arguments instead of
/// being rejected. A leading `--` only separates these from `--config`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", env = "CYGPKG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Options, command and arguments
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
