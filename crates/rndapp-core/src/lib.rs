//! rndapp core - domain and application layers.
//!
//! This crate holds everything that decides *what* a generated React Native
//! dapp looks like, and drives the generation through ports so that the
//! actual filesystem and process spawning live in `rndapp-adapters`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           rndapp-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Service (pipeline)      │
//! │             CreateService               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       Filesystem, CommandRunner         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      rndapp-adapters (Infrastructure)   │
//! │  LocalFilesystem, SystemCommandRunner   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rndapp_core::{
//!     application::CreateService,
//!     domain::{BlockchainTools, CreateParams, GeneratorSettings},
//! };
//! # fn adapters() -> (Box<dyn rndapp_core::application::Filesystem>, Box<dyn rndapp_core::application::CommandRunner>) { unimplemented!() }
//!
//! let (filesystem, runner) = adapters();
//! let params = CreateParams::builder("demo")
//!     .blockchain_tools(BlockchainTools::Truffle)
//!     .build()
//!     .unwrap();
//!
//! let service = CreateService::new(filesystem, runner, GeneratorSettings::default(), ".");
//! let result = service.create(params);
//! println!("{}", result.message());
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CreateService, PlannedStep, Step,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        BlockchainTools, CreateContext, CreateParams, CreateResult, CreationStatus,
        GeneratorSettings, PackageManager, ShellCommand,
    };
    pub use crate::error::{CoreResult, ErrorCategory, RnDappError};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
