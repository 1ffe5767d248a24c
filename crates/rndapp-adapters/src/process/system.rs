//! Runs external tools with `std::process::Command`.

use std::process::{Command, Stdio};

use rndapp_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ShellCommand,
    error::CoreResult,
};
use tracing::{debug, instrument};

/// Production runner.
///
/// The child inherits stdin, stdout and stderr so that the scaffolding
/// tools can prompt and stream their progress. Programs are resolved on
/// `PATH` with `which` first, giving a clear error for a missing tool
/// instead of a bare `ENOENT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &ShellCommand) -> CoreResult<()> {
        let program = which::which(&command.program).map_err(|_| {
            ApplicationError::CommandNotFound {
                program: command.program.clone(),
            }
        })?;
        debug!(program = %program.display(), cwd = %command.cwd.display(), "Spawning");

        let status = Command::new(&program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::filesystem(&command.cwd, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            }
            .into())
        }
    }
}
