use serde::Serialize;

use crate::domain::{
    entities::context::{ContextOptions, ContextPaths, CreateContext},
    value_objects::CreationStatus,
};

/// Message returned when the scaffold tool did not produce the project.
pub const MISSING_PROJECT_DIR: &str = "Failed to resolve project directory.";

/// Final record of a generation run.
///
/// Constructed exactly once, at the end of the pipeline, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateResult {
    #[serde(flatten)]
    context: CreateContext,
    status: CreationStatus,
    message: String,
}

impl CreateResult {
    /// Successful run: the message is the follow-up shell command.
    pub fn success(context: CreateContext) -> Self {
        let message = context.follow_up_command();
        Self {
            context,
            status: CreationStatus::Success,
            message,
        }
    }

    pub fn failure(context: CreateContext, message: impl Into<String>) -> Self {
        Self {
            context,
            status: CreationStatus::Failure,
            message: message.into(),
        }
    }

    pub fn context(&self) -> &CreateContext {
        &self.context
    }
    pub fn paths(&self) -> &ContextPaths {
        self.context.paths()
    }
    pub fn options(&self) -> &ContextOptions {
        self.context.options()
    }
    pub const fn status(&self) -> CreationStatus {
        self.status
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub const fn is_success(&self) -> bool {
        matches!(self.status, CreationStatus::Success)
    }
}
