//! Executes a rendered task through the configured shell.

use log::debug;
use stask::config::StaskConfig;
use stask::error::{Result, StaskError};
use std::process::Command;

/// Builds `<shell> <flags...> <task>` without running it.
pub(super) fn shell_command(config: &StaskConfig, task: &str) -> Result<Command> {
    let shell = config.shell.as_deref().ok_or(StaskError::NoShell)?;
    let mut command = Command::new(shell);
    command.args(config.shell_args()?).arg(task);
    Ok(command)
}

/// Runs the task with inherited stdio and returns the shell's exit code.
/// A shell killed by a signal reports 1.
pub(super) fn run_task(config: &StaskConfig, task: &str) -> Result<i32> {
    let mut command = shell_command(config, task)?;
    debug!("executing {:?}", command);
    let status = command.status()?;
    debug!("shell exited with {}", status);
    Ok(status.code().unwrap_or(1))
}
