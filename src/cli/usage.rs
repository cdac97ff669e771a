//! Usage text.

use crate::constants;

/// Full usage text printed for `help`, `usage`, `-h`, `--help` or no arguments.
#[must_use]
pub fn usage() -> String {
    format!(
        "\
{name} {version} - {summary}

Usage: {name} [--config FILE] [options] <command> [arguments...]

Options:
  -d, --debug        show debug output
  -v, --verbose      show status messages and run the installer verbosely
  -i, --interactive  let the installer show its window
  -h, --help         show this help

Commands:
  search [PATTERN]     search the package index (regular expression)
  describe PACKAGE...  show package descriptions from the package index
  install PACKAGE...   install packages from the local mirror
  remove PACKAGE...    remove installed packages
  check [PACKAGE...]   verify installed packages
  dump [PACKAGE...]    list installed packages and versions
  list [PACKAGE...]    list files owned by packages
  find FILE            find the package owning FILE
  query REGEXP         query the package database for REGEXP
  usage, help          show this help

A leading -- ends {name}'s own options and is not passed on; any later
unrecognized option is handed to the command as an argument.

Environment:
  {env_config}  config file (default: {config_path})
  {env_log}     extra log levels to enable, e.g. debug,info
",
        name = constants::APP_NAME,
        version = constants::APP_VERSION,
        summary = constants::APP_SUMMARY,
        env_config = constants::ENV_CONFIG,
        env_log = constants::ENV_LOG,
        config_path = crate::config::default_path()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
    )
}
