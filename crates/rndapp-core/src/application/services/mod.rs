//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a dapp project".

pub mod create_service;

pub use create_service::{CreateService, PIPELINE, PlannedStep, Step};
