//! casbin-cli
//!
//! - [`process`]: external command execution
//! - [`version`]: tool version fallback chain and the version banner
//! - [`manifest`]: streaming dependency lookup in pom.xml
//! - [`config`]: defaults and the JSON config file
//! - [`cli`]: command-line arguments
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod process;
pub mod version;
