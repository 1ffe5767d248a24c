//! Core domain layer for rndapp.
//!
//! Pure business logic: naming rules, the derived context, the contents of
//! every generated file and the commands to run. Nothing here touches the
//! filesystem or spawns a process; that goes through the ports defined in
//! `crate::application`.
//!
//! - **No I/O**: emitters return `String`s, commands are plain values
//! - **Immutable**: a context is built once and never mutated
//! - **Deterministic**: the same inputs always produce the same bytes

pub mod artifacts;
pub mod commands;
pub mod entities;
pub mod error;
pub mod manifest;
pub mod value_objects;

pub use artifacts::{ChainEndpoint, GeneratorSettings};
pub use commands::ShellCommand;
pub use entities::{
    ContextOptions, ContextPaths, CreateContext, CreateParams, CreateParamsBuilder, CreateResult,
    HardhatAccount, HardhatOptions, TruffleOptions,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{PatchError, deep_merge, patch_manifest};
pub use value_objects::{BlockchainTools, CreationStatus, EnvVariable, PackageManager};
