//! Application layer for rndapp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`CreateService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CreateService, PIPELINE, PlannedStep, Step};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem};

pub use error::ApplicationError;
