//! Shell command execution.

use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Runs a shell-level command and captures its output.
pub trait CommandExecutor {
    /// Execute `command`, returning combined stdout/stderr.
    ///
    /// Nonzero or signal-terminated exits are errors carrying the command
    /// line and its output.
    fn execute(&self, command: &str) -> Result<String>;
}

/// Executes commands through `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &str) -> Result<String> {
        debug!("executing [{}]", command);
        let output = Command::new("sh").arg("-c").arg(command).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                output: combined,
            });
        }
        Ok(combined)
    }
}
