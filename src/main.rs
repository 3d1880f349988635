use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;

use casbin_cli::cli::Cli;
use casbin_cli::config::DEFAULT_TOOL_NAME;
use casbin_cli::logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref(), cli.verbose)?;

    if !cli.wants_version() {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    }

    match cli.report_version() {
        Ok(banner) => {
            println!("{}", banner);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Failed to build version banner: {:#}", e);
            eprintln!("Failed to retrieve version information.");
            eprintln!("Error: {:#}", e);
            eprintln!("Run '{} --help' for usage.", DEFAULT_TOOL_NAME);
            Ok(ExitCode::FAILURE)
        }
    }
}
