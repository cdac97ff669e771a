//! Offline `search` and `describe` over the package index file.
//!
//! The index is a `setup.ini` style text file. Each package record opens
//! with `@ <name>` and carries `sdesc:`, `ldesc:` and `version:` lines:
//!
//! ```text
//! @ bash
//! sdesc: "The GNU Bourne Again SHell"
//! ldesc: "Bash is an sh-compatible shell"
//! category: Base Shells
//! version: 5.2.21-1
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use regex::Regex;

use crate::constants;
use crate::core::filter::{Filter, FilterChain};
use crate::error::{CliError, Result};
use crate::logger::Logger;
use crate::state::Command;

/// Reads the whole index file.
///
/// # Errors
///
/// Returns [`CliError::IndexRead`] naming the path when it cannot be read.
pub fn read_index(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::IndexRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Record header lines whose package name matches `pattern`, with the
/// marker replaced by a space. An empty pattern matches every record.
///
/// # Errors
///
/// Returns [`CliError::InvalidPattern`] if `pattern` is not a valid regular
/// expression.
pub fn search_lines(index: &str, pattern: &str) -> Result<Vec<String>> {
    let matcher = Regex::new(pattern)?;
    let mut chain = FilterChain::new()
        .then(Filter::KeepPrefix(constants::RECORD_MARKER.to_string()))
        .then(Filter::ReplaceChar(constants::RECORD_MARKER, ' '));

    Ok(chain
        .apply_all(index.lines())
        .into_iter()
        .filter(|line| matcher.is_match(line.trim()))
        .collect())
}

/// The record of `name` from its header through its first `version:` line,
/// with the marker and description prefixes stripped and every line
/// indented. `None` when the index has no such package.
#[must_use]
pub fn describe_block(index: &str, name: &str) -> Option<Vec<String>> {
    let header = format!("{} {name}", constants::RECORD_MARKER);
    let mut lines = index.lines().skip_while(|line| line.trim_end() != header);
    let first = lines.next()?;

    let mut block = vec![first];
    for line in lines {
        block.push(line);
        if line.starts_with(constants::VERSION_PREFIX) {
            break;
        }
    }

    let mut chain = FilterChain::new().then(Filter::StripPrefix(format!(
        "{} ",
        constants::RECORD_MARKER
    )));
    for prefix in constants::DESC_PREFIXES {
        chain = chain.then(Filter::StripPrefix(prefix.to_string()));
    }
    chain = chain.then(Filter::Indent(constants::OUTPUT_INDENT));

    Some(chain.apply_all(block))
}

/// `search [PATTERN]`: multiple pattern words are joined with a space.
///
/// # Errors
///
/// Returns an error when the index cannot be read, the pattern is invalid,
/// or writing `out` fails.
pub fn search(
    index_file: &Path,
    arguments: &[String],
    logger: &Logger,
    out: &mut impl Write,
) -> Result<i32> {
    let pattern = arguments.join(" ");
    logger.info(&format!("{}{}", constants::MSG_SEARCHING, index_file.display()));

    let index = read_index(index_file)?;
    for line in search_lines(&index, &pattern)? {
        writeln!(out, "{line}")?;
    }
    Ok(0)
}

/// `describe PACKAGE...`: a blank line follows each package, found or not.
/// Unknown packages are reported at WARN in place of their block.
///
/// # Errors
///
/// Returns [`CliError::MissingArgument`] without package names, and I/O
/// errors from reading the index or writing `out`.
pub fn describe(
    index_file: &Path,
    packages: &[String],
    logger: &Logger,
    out: &mut impl Write,
) -> Result<i32> {
    if packages.is_empty() {
        return Err(CliError::MissingArgument {
            command: Command::Describe.name(),
            what: "packages",
        });
    }

    let index = read_index(index_file)?;
    for name in packages {
        logger.info(&format!("{}{name}", constants::MSG_DESCRIBING));
        match describe_block(&index, name) {
            Some(block) => {
                for line in block {
                    writeln!(out, "{line}")?;
                }
            }
            None => logger.warn(&format!("{}{name}", constants::MSG_PACKAGE_NOT_FOUND)),
        }
        writeln!(out)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"release: cygwin
arch: x86_64
setup-timestamp: 1700000000

@ bash
sdesc: "The GNU Bourne Again SHell"
ldesc: "Bash is an sh-compatible shell that incorporates useful
features from the Korn shell and C shell."
category: Base Shells
requires: cygwin
version: 5.2.21-1
install: x86_64/release/bash/bash-5.2.21-1.tar.xz 1722108 abc

@ bash-completion
sdesc: "Command-line completions for bash"
ldesc: "Programmable completions for bash"
category: Shells
version: 2.11-2

@ vim
sdesc: "Vi IMproved - enhanced vi editor"
ldesc: "Vim is an advanced text editor"
category: Editors
version: 9.0.2155-2
"#;

    #[test]
    fn test_search_matches_names() {
        let lines = search_lines(INDEX, "bash").unwrap();
        assert_eq!(lines, vec!["  bash", "  bash-completion"]);
    }

    #[test]
    fn test_search_empty_pattern_lists_all() {
        let lines = search_lines(INDEX, "").unwrap();
        assert_eq!(lines, vec!["  bash", "  bash-completion", "  vim"]);
    }

    #[test]
    fn test_search_regex_anchors_on_name() {
        let lines = search_lines(INDEX, "^bash$").unwrap();
        assert_eq!(lines, vec!["  bash"]);
    }

    #[test]
    fn test_search_ignores_metadata_lines() {
        // "shell" appears only in descriptions
        assert!(search_lines(INDEX, "shell").unwrap().is_empty());
    }

    #[test]
    fn test_search_invalid_pattern() {
        let result = search_lines(INDEX, "(unclosed");
        assert!(matches!(result, Err(CliError::InvalidPattern(_))));
    }

    #[test]
    fn test_describe_block() {
        let block = describe_block(INDEX, "bash").unwrap();
        assert_eq!(
            block,
            vec![
                "  bash",
                "  \"The GNU Bourne Again SHell\"",
                "  \"Bash is an sh-compatible shell that incorporates useful",
                "  features from the Korn shell and C shell.\"",
                "  category: Base Shells",
                "  requires: cygwin",
                "  version: 5.2.21-1",
            ]
        );
    }

    #[test]
    fn test_describe_exact_name_only() {
        let block = describe_block(INDEX, "bash-completion").unwrap();
        assert_eq!(block.first().map(String::as_str), Some("  bash-completion"));
        assert_eq!(block.last().map(String::as_str), Some("  version: 2.11-2"));
        assert!(describe_block(INDEX, "bas").is_none());
    }

    #[test]
    fn test_describe_writes_blank_separator() {
        let path = std::env::temp_dir().join("cygpkg_test_describe_setup.ini");
        std::fs::write(&path, INDEX).unwrap();

        let mut out = Vec::new();
        let logger = Logger::recording(false, false);
        let code = describe(
            &path,
            &["vim".to_string(), "missing".to_string(), "bash-completion".to_string()],
            &logger,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "  vim\n",
                "  \"Vi IMproved - enhanced vi editor\"\n",
                "  \"Vim is an advanced text editor\"\n",
                "  category: Editors\n",
                "  version: 9.0.2155-2\n",
                "\n",
                "\n",
                "  bash-completion\n",
                "  \"Command-line completions for bash\"\n",
                "  \"Programmable completions for bash\"\n",
                "  category: Shells\n",
                "  version: 2.11-2\n",
                "\n",
            )
        );
        assert_eq!(logger.recorded(), vec!["WARN: package not found: missing"]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_describe_requires_packages() {
        let logger = Logger::plain(false, false);
        let mut out = Vec::new();
        let err = describe(Path::new("/unused"), &[], &logger, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "describe: no packages given");
    }

    #[test]
    fn test_search_missing_index() {
        let logger = Logger::plain(false, false);
        let mut out = Vec::new();
        let err = search(
            Path::new("/nonexistent/setup.ini"),
            &[],
            &logger,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::IndexRead { .. }));
        assert!(err.to_string().contains("/nonexistent/setup.ini"));
    }
}
