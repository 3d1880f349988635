//! Runs an external command and captures the first line of its standard output

use std::io::{self, BufRead, BufReader};
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::debug;

/// Exit code reported when the child was terminated by a signal
const SIGNAL_EXIT_CODE: i32 = -1;

/// Error type for launching external commands
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The command line contained no program name
    #[error("Empty command line")]
    EmptyCommand,

    /// The program could not be started (not found, permission denied, ...)
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Reading output or waiting for the child failed after it was started
    #[error("Failed to read output of `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a single command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// First line of stdout, `None` when the command exited unsuccessfully
    pub first_line: Option<String>,
    /// Process exit code
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn new(first_line: Option<String>, exit_code: i32) -> Self {
        Self {
            first_line,
            exit_code,
        }
    }

    /// A failed invocation with no usable output
    pub fn failed(exit_code: i32) -> Self {
        Self::new(None, exit_code)
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Trimmed first line, only for a successful run with non-blank output
    pub fn usable_line(&self) -> Option<&str> {
        if !self.success() {
            return None;
        }
        self.first_line
            .as_deref()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Trait for running external commands
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    /// Run a whitespace separated command line and capture its first output line
    ///
    /// A non-zero exit is reported through [`CommandOutput::exit_code`], not as an error.
    fn run(&self, command_line: &str) -> Result<CommandOutput, ExecutionError>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command_line: &str) -> Result<CommandOutput, ExecutionError> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next().ok_or(ExecutionError::EmptyCommand)?;

        debug!("Running `{}`", command_line);

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ExecutionError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        let io_error = |source: io::Error| ExecutionError::Io {
            command: command_line.to_string(),
            source,
        };

        // Read before waiting so the child never blocks on a full pipe
        let mut first_line = Vec::new();
        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            reader.read_until(b'\n', &mut first_line).map_err(io_error)?;
            io::copy(&mut reader, &mut io::sink()).map_err(io_error)?;
        }

        let status = child.wait().map_err(io_error)?;
        let exit_code = status.code().unwrap_or(SIGNAL_EXIT_CODE);

        debug!("`{}` exited with code {}", command_line, exit_code);

        if !status.success() {
            return Ok(CommandOutput::failed(exit_code));
        }

        // Output is not guaranteed to be UTF-8
        let first_line = (!first_line.is_empty()).then(|| {
            String::from_utf8_lossy(&first_line)
                .trim_end_matches(['\r', '\n'])
                .to_string()
        });

        Ok(CommandOutput::new(first_line, exit_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CommandOutput::new(Some("v1.2.0".to_string()), 0), Some("v1.2.0"))]
    #[case(CommandOutput::new(Some("  v1.2.0 \t".to_string()), 0), Some("v1.2.0"))]
    #[case(CommandOutput::new(Some("   ".to_string()), 0), None)]
    #[case(CommandOutput::new(None, 0), None)]
    #[case(CommandOutput::new(Some("v1.2.0".to_string()), 128), None)]
    #[case(CommandOutput::failed(1), None)]
    fn usable_line_returns_expected(#[case] output: CommandOutput, #[case] expected: Option<&str>) {
        assert_eq!(output.usable_line(), expected);
    }

    #[test]
    fn run_rejects_empty_command_line() {
        let result = SystemCommandRunner::new().run("   ");
        assert!(matches!(result, Err(ExecutionError::EmptyCommand)));
    }

    #[test]
    fn run_reports_spawn_failure_for_missing_program() {
        let result = SystemCommandRunner::new().run("definitely-not-a-real-program-4f1c --help");

        match result {
            Err(ExecutionError::Spawn { command, .. }) => {
                assert_eq!(command, "definitely-not-a-real-program-4f1c --help");
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_captures_only_first_line() {
        let output = SystemCommandRunner::new().run("printf first\\nsecond\\n").unwrap();

        assert_eq!(output, CommandOutput::new(Some("first".to_string()), 0));
    }

    #[cfg(unix)]
    #[test]
    fn run_replaces_invalid_utf8_in_first_line() {
        let output = SystemCommandRunner::new().run("printf \\377\\376tag\\n").unwrap();

        assert_eq!(
            output,
            CommandOutput::new(Some("\u{FFFD}\u{FFFD}tag".to_string()), 0)
        );
    }

    #[cfg(unix)]
    #[test]
    fn run_returns_none_for_silent_command() {
        let output = SystemCommandRunner::new().run("true").unwrap();

        assert_eq!(output, CommandOutput::new(None, 0));
    }

    #[cfg(unix)]
    #[test]
    fn run_returns_failed_output_for_nonzero_exit() {
        let output = SystemCommandRunner::new().run("false").unwrap();

        assert!(!output.success());
        assert_eq!(output.first_line, None);
    }

    #[cfg(unix)]
    #[test]
    fn run_does_not_block_on_large_output() {
        // Far more than a pipe buffer after the first line
        let output = SystemCommandRunner::new().run("seq 1 200000").unwrap();

        assert_eq!(output, CommandOutput::new(Some("1".to_string()), 0));
    }
}
