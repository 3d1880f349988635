//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CliConfig, DEFAULT_MANIFEST_FILE};
use crate::manifest::{default_manifest_path, working_dir_manifest};
use crate::process::SystemCommandRunner;
use crate::version::{GitVersionOracle, VersionBanner, VersionReporter};

#[derive(Debug, Parser)]
#[command(name = "casbin-cli")]
#[command(
    about = "Command-line client for the casbin authorization library",
    disable_version_flag = true
)]
pub struct Cli {
    /// Print the tool and library versions
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// JSON config file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Build manifest to read the library version from [default: ./pom.xml]
    #[arg(long, value_name = "PATH", global = true)]
    pub manifest: Option<PathBuf>,

    /// groupId of the library dependency
    #[arg(long, global = true)]
    pub group_id: Option<String>,

    /// artifactId of the library dependency
    #[arg(long, global = true)]
    pub artifact_id: Option<String>,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the tool and library versions
    Version,
}

impl Cli {
    pub fn wants_version(&self) -> bool {
        self.version || self.command == Some(Command::Version)
    }

    /// Config file (if any) with command-line overrides applied
    pub fn resolve_config(&self) -> anyhow::Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(group_id) = &self.group_id {
            config.library.group_id = group_id.clone();
        }
        if let Some(artifact_id) = &self.artifact_id {
            config.library.artifact_id = artifact_id.clone();
        }

        Ok(config)
    }

    pub fn manifest_path(&self, config: &CliConfig) -> anyhow::Result<PathBuf> {
        match &self.manifest {
            Some(path) => Ok(path.clone()),
            None if config.manifest_file == DEFAULT_MANIFEST_FILE => Ok(default_manifest_path()?),
            None => Ok(working_dir_manifest(&config.manifest_file)?),
        }
    }

    /// Build the version banner using git and the configured manifest
    pub fn report_version(&self) -> anyhow::Result<VersionBanner> {
        let config = self.resolve_config()?;
        let manifest_path = self.manifest_path(&config)?;
        let oracle = GitVersionOracle::with_program(SystemCommandRunner::new(), &config.vcs_program);
        let reporter = VersionReporter::new(oracle);

        Ok(reporter.build_banner(&config.tool_name, &config.library.query(), &manifest_path)?)
    }
}
