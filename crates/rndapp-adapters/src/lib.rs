//! Infrastructure adapters for rndapp.
//!
//! This crate implements the ports defined in `rndapp_core::application::ports`.
//! It contains all I/O: the real filesystem and spawning external tools, plus
//! in-memory doubles used by tests and dry runs.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingCommandRunner, SystemCommandRunner};
