//! A runner that records commands instead of running them.

use std::sync::{Arc, Mutex};

use rndapp_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ShellCommand,
    error::CoreResult,
};
use tracing::info;

type Hook = dyn Fn(&ShellCommand) -> CoreResult<()> + Send + Sync;

/// Records every command it is asked to run.
///
/// An optional hook stands in for the external tool, e.g. to create the
/// files a scaffolder would have produced or to simulate a failure.
#[derive(Clone, Default)]
pub struct RecordingCommandRunner {
    commands: Arc<Mutex<Vec<ShellCommand>>>,
    hook: Option<Arc<Hook>>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(
        hook: impl Fn(&ShellCommand) -> CoreResult<()> + Send + Sync + 'static,
    ) -> Self {
        let hook: Arc<Hook> = Arc::new(hook);
        Self {
            commands: Arc::default(),
            hook: Some(hook),
        }
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> Vec<ShellCommand> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    /// Commands rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Debug for RecordingCommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingCommandRunner")
            .field("commands", &self.commands())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, command: &ShellCommand) -> CoreResult<()> {
        info!(%command, "Recorded command");
        self.commands
            .lock()
            .map_err(|_| ApplicationError::filesystem(&command.cwd, "command log poisoned"))?
            .push(command.clone());
        match &self.hook {
            Some(hook) => hook(command),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let runner = RecordingCommandRunner::new();
        runner.run(&ShellCommand::new("yarn", Vec::<String>::new(), "/w")).unwrap();
        runner.run(&ShellCommand::new("npx", ["truffle", "compile"], "/w")).unwrap();
        assert_eq!(runner.command_lines(), ["yarn", "npx truffle compile"]);
    }

    #[test]
    fn hook_result_is_returned() {
        let runner = RecordingCommandRunner::with_hook(|cmd| {
            Err(ApplicationError::CommandFailed {
                command: cmd.to_string(),
                code: Some(2),
            }
            .into())
        });
        assert!(runner.run(&ShellCommand::new("expo", ["eject"], "/w")).is_err());
        assert_eq!(runner.commands().len(), 1);
    }
}
