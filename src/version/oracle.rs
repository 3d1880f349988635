//! Tool version resolution from the version-control checkout
//!
//! Resolution is a fallback chain, first success wins:
//! 1. most recent tag (`describe --tags --abbrev=0`)
//! 2. short hash of the current commit (`rev-parse --short HEAD`)

use tracing::{info, warn};

use crate::config::DEFAULT_VCS_PROGRAM;
use crate::process::CommandRunner;
use crate::version::error::VersionError;

/// Resolves the tool version through a version-control program
pub struct GitVersionOracle<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> GitVersionOracle<R> {
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, DEFAULT_VCS_PROGRAM)
    }

    /// Use a different version-control executable (e.g. an absolute path to git)
    pub fn with_program(runner: R, program: &str) -> Self {
        Self {
            runner,
            program: program.to_string(),
        }
    }

    fn latest_tag_command(&self) -> String {
        format!("{} describe --tags --abbrev=0", self.program)
    }

    fn short_hash_command(&self) -> String {
        format!("{} rev-parse --short HEAD", self.program)
    }

    /// Resolve the human-facing tool version
    ///
    /// # Returns
    /// * `Ok(String)` - The latest tag, or the short commit hash for untagged builds
    /// * `Err(VersionError::Execution)` - The program could not be started
    /// * `Err(VersionError::Unavailable)` - Neither a tag nor a commit hash was found
    pub fn resolve_tool_version(&self) -> Result<String, VersionError> {
        let tag = self.runner.run(&self.latest_tag_command())?;
        if let Some(tag) = tag.usable_line() {
            info!("Resolved tool version from tag: {}", tag);
            return Ok(tag.to_string());
        }

        warn!(
            "No tag available (exit code {}), falling back to commit hash",
            tag.exit_code
        );

        let hash = self.runner.run(&self.short_hash_command())?;
        if let Some(hash) = hash.usable_line() {
            info!("Resolved tool version from commit hash: {}", hash);
            return Ok(hash.to_string());
        }

        warn!("No commit hash available (exit code {})", hash.exit_code);
        Err(VersionError::Unavailable)
    }
}
