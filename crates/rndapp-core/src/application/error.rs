//! Application layer errors.
//!
//! These errors represent failures talking to the outside world (files and
//! processes), not business rule violations. Those are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the pipeline's ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The program is not on `PATH`.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// The program ran but did not exit cleanly.
    #[error("`{command}` failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// A manifest produced by an external tool could not be patched.
    #[error("Could not patch {path}: {reason}")]
    ManifestPatch { path: PathBuf, reason: String },
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}"))
        .unwrap_or_default()
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandNotFound { program } => match program.as_str() {
                "expo" => vec!["Install the Expo CLI: npm i -g expo-cli".into()],
                "yarn" => vec!["Install yarn: npm i -g yarn".into()],
                _ => vec![
                    format!("Make sure `{program}` is installed and on your PATH"),
                    "Node.js ships npm and npx: https://nodejs.org".into(),
                ],
            },
            Self::CommandFailed { command, .. } => vec![
                format!("Run `{command}` manually inside the project to see the full output"),
                "Re-run with -v for the commands being executed".into(),
            ],
            Self::ManifestPatch { path, .. } => vec![
                format!("Check that {} is valid JSON", path.display()),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::ManifestPatch { .. } => ErrorCategory::Internal,
        }
    }
}
