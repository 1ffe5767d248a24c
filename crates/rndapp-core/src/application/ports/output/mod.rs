//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rndapp-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ShellCommand;
use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rndapp_adapters::filesystem::LocalFilesystem` (production)
/// - `rndapp_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute; they all come from a `ContextPaths`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external tools.
///
/// Implemented by:
/// - `rndapp_adapters::process::SystemCommandRunner` (production)
/// - `rndapp_adapters::process::RecordingCommandRunner` (testing, dry runs)
///
/// Runs to completion; a non-zero exit is an error.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &ShellCommand) -> CoreResult<()>;
}
