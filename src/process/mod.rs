//! External process layer
//! - runner.rs: CommandRunner trait, CommandOutput and the std::process backed runner

pub mod runner;

pub use runner::{CommandOutput, CommandRunner, ExecutionError, SystemCommandRunner};
