// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid bundle identifier '{value}': {reason}")]
    InvalidBundleIdentifier { value: String, reason: String },

    #[error("Invalid Android package name '{value}': {reason}")]
    InvalidPackageName { value: String, reason: String },

    #[error("Unknown blockchain tooling: {0}")]
    UnknownTooling(String),

    #[error("Invalid RPC URL '{value}': {reason}")]
    InvalidRpcUrl { value: String, reason: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Manifest root must be a JSON object, found {found}")]
    ManifestNotAnObject { found: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-dapp, wallet_app, dapp123".into(),
            ],
            Self::InvalidBundleIdentifier { .. } | Self::InvalidPackageName { .. } => vec![
                "Identifiers are dot-separated segments, e.g. com.example.mydapp".into(),
                "Each segment must start with a letter".into(),
                "Only letters, digits and underscores are allowed".into(),
            ],
            Self::UnknownTooling(_) => vec![
                "Supported tooling:".into(),
                "  • none     - React Native + web3 only".into(),
                "  • truffle  - Truffle + ganache-cli".into(),
                "  • hardhat  - Hardhat network".into(),
            ],
            Self::InvalidRpcUrl { .. } => vec![
                "generator.rpc_url must look like http://127.0.0.1:8545".into(),
                "Set it in the config file or with RNDAPP__GENERATOR__RPC_URL".into(),
            ],
            Self::ManifestNotAnObject { .. } => vec![
                "package.json is expected to contain a JSON object".into(),
                "Check that the scaffolding tool produced a valid manifest".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidBundleIdentifier { .. }
            | Self::InvalidPackageName { .. }
            | Self::UnknownTooling(_)
            | Self::InvalidRpcUrl { .. } => ErrorCategory::Validation,
            Self::ManifestNotAnObject { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
