//! Combined tool/library version banner

use std::fmt;
use std::path::Path;

use crate::manifest::{VersionQuery, find_dependency_version};
use crate::process::CommandRunner;
use crate::version::error::VersionError;
use crate::version::oracle::GitVersionOracle;

/// Shown in place of a library version that the manifest does not declare
pub const UNAVAILABLE_VERSION: &str = "version information unavailable";

/// Tool and library versions reported by `--version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBanner {
    pub tool_name: String,
    pub tool_version: String,
    pub library_name: String,
    /// `None` when the dependency is not declared in the manifest
    pub library_version: Option<String>,
}

impl fmt::Display for VersionBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\n{} {}",
            self.tool_name,
            self.tool_version,
            self.library_name,
            self.library_version.as_deref().unwrap_or(UNAVAILABLE_VERSION)
        )
    }
}

/// Builds the version banner from the checkout and the build manifest
pub struct VersionReporter<R: CommandRunner> {
    oracle: GitVersionOracle<R>,
}

impl<R: CommandRunner> VersionReporter<R> {
    pub fn new(oracle: GitVersionOracle<R>) -> Self {
        Self { oracle }
    }

    /// Resolve both versions; any failure aborts the whole banner
    pub fn build_banner(
        &self,
        tool_name: &str,
        query: &VersionQuery,
        manifest_path: &Path,
    ) -> Result<VersionBanner, VersionError> {
        let tool_version = self.oracle.resolve_tool_version()?;
        let library_version = find_dependency_version(manifest_path, query)?;

        Ok(VersionBanner {
            tool_name: tool_name.to_string(),
            tool_version,
            library_name: query.artifact_id.clone(),
            library_version,
        })
    }
}
