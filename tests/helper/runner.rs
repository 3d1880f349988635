//! Command runner test utilities

use std::cell::RefCell;
use std::collections::HashMap;

use casbin_cli::process::{CommandOutput, CommandRunner, ExecutionError};

/// Runner that answers from a fixed table and records every call
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, CommandOutput>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command_line: &str, first_line: Option<&str>, exit_code: i32) -> Self {
        self.outputs.insert(
            command_line.to_string(),
            CommandOutput::new(first_line.map(|s| s.to_string()), exit_code),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command_line: &str) -> Result<CommandOutput, ExecutionError> {
        self.calls.borrow_mut().push(command_line.to_string());
        match self.outputs.get(command_line) {
            Some(output) => Ok(output.clone()),
            None => Err(ExecutionError::Spawn {
                command: command_line.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

impl CommandRunner for &ScriptedRunner {
    fn run(&self, command_line: &str) -> Result<CommandOutput, ExecutionError> {
        (**self).run(command_line)
    }
}
