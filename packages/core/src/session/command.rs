//! External command execution
//!
//! Command lines are handed to the platform shell (`cmd /C` on Windows,
//! `sh -c` elsewhere) exactly as rendered from the templates.

use std::future::Future;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use super::SessionStep;
use crate::error::LauncherError;

/// Runs the command lines produced by the session orchestrator
pub trait CommandRunner {
    /// Run a command line to completion
    fn run(
        &self,
        step: SessionStep,
        command_line: &str,
    ) -> impl Future<Output = Result<(), LauncherError>>;

    /// Start a command line without waiting for it to exit
    fn spawn_detached(&self, step: SessionStep, command_line: &str) -> Result<(), LauncherError>;
}

/// Runs command lines through the platform shell
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill `run` commands that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").raw_arg(command_line);
    command
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

impl CommandRunner for ShellRunner {
    async fn run(&self, step: SessionStep, command_line: &str) -> Result<(), LauncherError> {
        let mut command = shell_command(command_line);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = command.output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output).await.map_err(|_| {
                LauncherError::ExternalCommand {
                    step,
                    message: format!("timed out after {limit:?}"),
                }
            })?,
            None => output.await,
        }
        .map_err(|e| LauncherError::ExternalCommand {
            step,
            message: format!("failed to start: {e}"),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(%step, stdout = %stdout.trim(), stderr = %stderr.trim(), "Command output");

        if !output.status.success() {
            let detail = stderr.trim();
            let message = if detail.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {detail}", output.status)
            };
            return Err(LauncherError::ExternalCommand { step, message });
        }
        Ok(())
    }

    fn spawn_detached(&self, step: SessionStep, command_line: &str) -> Result<(), LauncherError> {
        let child = shell_command(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LauncherError::ExternalCommand {
                step,
                message: format!("failed to start: {e}"),
            })?;
        debug!(%step, pid = child.id(), "Detached process started");
        Ok(())
    }
}
