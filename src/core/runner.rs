//! External tool invocation.
//!
//! Arguments are kept as an ordered list and handed to the process directly,
//! so package names and patterns never pass through a shell.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants;
use crate::core::filter::FilterChain;
use crate::error::{CliError, Result};

/// A program plus its ordered argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl ToolCommand {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends `arg` only when `enabled` holds.
    #[must_use]
    pub fn arg_if(self, enabled: bool, arg: impl Into<String>) -> Self {
        if enabled {
            self.arg(arg)
        } else {
            self
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Printable form for debug output.
    #[must_use]
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Runs the tool, streams its stdout through `chain` into `out`, and
    /// returns the tool's exit status. Stderr is inherited untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ToolSpawn`] if the program cannot be started and
    /// [`CliError::Io`] if reading its output or writing `out` fails. In the
    /// latter case the tool is killed and reaped before returning.
    pub fn run(&self, mut chain: FilterChain, out: &mut impl Write) -> Result<i32> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| CliError::ToolSpawn {
                tool: self.program.display().to_string(),
                source,
            })?;

        let pumped = match child.stdout.take() {
            Some(stdout) => pump(stdout, &mut chain, out),
            None => out.flush(),
        };
        if let Err(err) = pumped {
            // The tool may still be writing into a pipe nobody reads.
            let _ = child.kill();
            let _ = child.wait();
            return Err(err.into());
        }

        let status = child.wait()?;
        Ok(status.code().unwrap_or(constants::EXIT_FAILURE))
    }
}

/// Copies `stdout` line by line through `chain` into `out`.
fn pump(stdout: impl Read, chain: &mut FilterChain, out: &mut impl Write) -> io::Result<()> {
    let mut reader = BufReader::new(stdout);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Windows tools may emit CRLF and non-UTF-8 bytes.
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(&['\n', '\r'][..]);
        if let Some(filtered) = chain.apply(line) {
            writeln!(out, "{filtered}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::Filter;

    #[test]
    fn test_builder_keeps_order() {
        let cmd = ToolCommand::new("setup-x86_64.exe")
            .arg("--arch")
            .arg("x86_64")
            .arg_if(false, "--verbose")
            .arg_if(true, "--quiet-mode")
            .args(["--packages", "bash,vim"]);
        assert_eq!(
            cmd.arguments(),
            ["--arch", "x86_64", "--quiet-mode", "--packages", "bash,vim"]
        );
        assert_eq!(
            cmd.display(),
            "setup-x86_64.exe --arch x86_64 --quiet-mode --packages bash,vim"
        );
    }

    #[test]
    fn test_spawn_failure() {
        let cmd = ToolCommand::new("/nonexistent/cygpkg-tool");
        let mut out = Vec::new();
        let err = cmd.run(FilterChain::new(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::ToolSpawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_filters_output() {
        let cmd = ToolCommand::new("sh")
            .arg("-c")
            .arg("printf 'header\\r\\nbash,vim\\nExtracting from file x\\n'");
        let chain = FilterChain::new()
            .then(Filter::DropMatching("Extracting from file".into()))
            .then(Filter::SkipLines(1))
            .then(Filter::ReplaceChar(',', ' '));
        let mut out = Vec::new();
        let code = cmd.run(chain, &mut out).unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "bash vim\n");
    }

    /// Reader end of a pipe that has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_stops_tool_on_closed_output() {
        // Never exits on its own; returning at all means it was killed and reaped.
        let cmd = ToolCommand::new("sh").arg("-c").arg("while :; do echo bash; done");
        let err = cmd.run(FilterChain::new(), &mut ClosedPipe).unwrap_err();
        assert!(err.is_broken_pipe(), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_passes_exit_status() {
        let cmd = ToolCommand::new("sh").arg("-c").arg("echo failing; exit 3");
        let mut out = Vec::new();
        let code = cmd.run(FilterChain::new(), &mut out).unwrap();
        assert_eq!(code, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "failing\n");
    }
}
