//! Left-to-right token parser.
//!
//! Command tokens select the command, mode flags toggle [`Flags`], and every
//! other token, unknown flags included, becomes an argument. A later command
//! token replaces an earlier one.

use crate::state::{Command, Flags, Invocation};

/// Tokens that print usage and stop parsing.
const HELP_TOKENS: [&str; 4] = ["-h", "--help", "help", "usage"];

/// Parser outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Print usage and exit successfully.
    Usage,
    /// Dispatch the invocation.
    Run(Invocation),
}

/// Parses the tokens following the program name.
pub fn parse<I, S>(tokens: I) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut invocation = Invocation::default();
    let mut seen_any = false;

    for token in tokens {
        let token = token.as_ref();
        seen_any = true;

        if HELP_TOKENS.contains(&token) {
            return Parsed::Usage;
        }

        match token {
            "-d" | "--debug" => invocation.flags.debug = true,
            "-v" | "--verbose" => invocation.flags.verbose = true,
            "-i" | "--interactive" => invocation.flags.interactive = true,
            _ => match Command::from_token(token) {
                Some(command) => invocation.command = Some(command),
                None => invocation.arguments.push(token.to_string()),
            },
        }
    }

    if seen_any {
        Parsed::Run(invocation)
    } else {
        Parsed::Usage
    }
}

/// Short summary of the parsed flags for debug output.
#[must_use]
pub fn describe_flags(flags: Flags) -> String {
    format!(
        "debug={} verbose={} interactive={}",
        flags.debug, flags.verbose, flags.interactive
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[&str]) -> Invocation {
        match parse(tokens) {
            Parsed::Run(invocation) => invocation,
            Parsed::Usage => panic!("expected an invocation for {tokens:?}"),
        }
    }

    #[test]
    fn test_no_tokens_is_usage() {
        assert_eq!(parse(Vec::<String>::new()), Parsed::Usage);
    }

    #[test]
    fn test_help_tokens_anywhere() {
        assert_eq!(parse(["-h"]), Parsed::Usage);
        assert_eq!(parse(["--help"]), Parsed::Usage);
        assert_eq!(parse(["install", "bash", "help"]), Parsed::Usage);
        assert_eq!(parse(["-v", "usage", "install"]), Parsed::Usage);
    }

    #[test]
    fn test_command_and_arguments() {
        let inv = run(&["install", "bash", "vim"]);
        assert_eq!(inv.command, Some(Command::Install));
        assert_eq!(inv.arguments, vec!["bash", "vim"]);
        assert_eq!(inv.flags, Flags::default());
    }

    #[test]
    fn test_flags_in_any_position() {
        let inv = run(&["-d", "check", "--verbose", "bash", "-i"]);
        assert_eq!(inv.command, Some(Command::Check));
        assert!(inv.flags.debug);
        assert!(inv.flags.verbose);
        assert!(inv.flags.interactive);
        assert_eq!(inv.arguments, vec!["bash"]);
    }

    #[test]
    fn test_later_command_wins() {
        let inv = run(&["install", "remove", "pkg"]);
        assert_eq!(inv.command, Some(Command::Remove));
        assert_eq!(inv.arguments, vec!["pkg"]);
    }

    #[test]
    fn test_unknown_flags_become_arguments() {
        let inv = run(&["query", "--regex", "^lib"]);
        assert_eq!(inv.command, Some(Command::Query));
        assert_eq!(inv.arguments, vec!["--regex", "^lib"]);
    }

    #[test]
    fn test_no_command() {
        let inv = run(&["-v", "bash"]);
        assert_eq!(inv.command, None);
        assert_eq!(inv.arguments, vec!["bash"]);
    }

    #[test]
    fn test_describe_flags() {
        let flags = Flags {
            debug: true,
            verbose: false,
            interactive: true,
        };
        assert_eq!(
            describe_flags(flags),
            "debug=true verbose=false interactive=true"
        );
    }
}
