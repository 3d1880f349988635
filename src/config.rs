use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::manifest::VersionQuery;

// =============================================================================
// Defaults
// =============================================================================

/// Name printed on the first line of the version banner
pub const DEFAULT_TOOL_NAME: &str = "casbin-cli";

/// Build manifest looked up in the current working directory
pub const DEFAULT_MANIFEST_FILE: &str = "pom.xml";

/// Version-control program used to resolve the tool version
pub const DEFAULT_VCS_PROGRAM: &str = "git";

/// Dependency whose version is reported as the library version
pub const DEFAULT_LIBRARY_GROUP_ID: &str = "org.casbin";
pub const DEFAULT_LIBRARY_ARTIFACT_ID: &str = "jcasbin";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub tool_name: String,
    pub manifest_file: String,
    pub vcs_program: String,
    pub library: LibraryConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            vcs_program: DEFAULT_VCS_PROGRAM.to_string(),
            library: LibraryConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Library dependency key in the build manifest
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryConfig {
    pub group_id: String,
    pub artifact_id: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            group_id: DEFAULT_LIBRARY_GROUP_ID.to_string(),
            artifact_id: DEFAULT_LIBRARY_ARTIFACT_ID.to_string(),
        }
    }
}

impl LibraryConfig {
    pub fn query(&self) -> VersionQuery {
        VersionQuery::new(self.group_id.as_str(), self.artifact_id.as_str())
    }
}
