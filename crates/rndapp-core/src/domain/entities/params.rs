//! Creation parameters and their validating builder.
//!
//! `CreateParams` is what the caller asks for: a project name, the native
//! identifiers and the chain tooling. Everything is validated once in
//! `build()`; a `CreateParams` value is always consistent afterwards.

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::BlockchainTools};

/// Default first segment of generated bundle identifiers.
pub const DEFAULT_BUNDLE_PREFIX: &str = "com";

/// Validated parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    name: String,
    bundle_identifier: String,
    package_name: String,
    blockchain_tools: BlockchainTools,
}

impl CreateParams {
    /// Start building parameters for the project `name`.
    pub fn builder(name: impl Into<String>) -> CreateParamsBuilder {
        CreateParamsBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn bundle_identifier(&self) -> &str {
        &self.bundle_identifier
    }
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
    pub const fn blockchain_tools(&self) -> BlockchainTools {
        self.blockchain_tools
    }
}

/// Builder for [`CreateParams`].
///
/// Identifiers that are not set explicitly are derived from the project name
/// and the bundle prefix (`com.<name>` by default).
#[derive(Debug, Clone)]
pub struct CreateParamsBuilder {
    name: String,
    bundle_prefix: String,
    bundle_identifier: Option<String>,
    package_name: Option<String>,
    blockchain_tools: BlockchainTools,
}

impl CreateParamsBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle_prefix: DEFAULT_BUNDLE_PREFIX.into(),
            bundle_identifier: None,
            package_name: None,
            blockchain_tools: BlockchainTools::default(),
        }
    }

    pub fn bundle_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bundle_prefix = prefix.into();
        self
    }

    pub fn bundle_identifier(mut self, id: impl Into<String>) -> Self {
        self.bundle_identifier = Some(id.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn blockchain_tools(mut self, tools: BlockchainTools) -> Self {
        self.blockchain_tools = tools;
        self
    }

    pub fn build(self) -> Result<CreateParams, DomainError> {
        validate_project_name(&self.name)?;

        let derived = derive_identifier(&self.bundle_prefix, &self.name);

        let bundle_identifier = self.bundle_identifier.unwrap_or_else(|| derived.clone());
        validate_identifier(&bundle_identifier).map_err(|reason| {
            DomainError::InvalidBundleIdentifier {
                value: bundle_identifier.clone(),
                reason,
            }
        })?;

        let package_name = self.package_name.unwrap_or(derived);
        validate_identifier(&package_name).map_err(|reason| DomainError::InvalidPackageName {
            value: package_name.clone(),
            reason,
        })?;

        Ok(CreateParams {
            name: self.name,
            bundle_identifier,
            package_name,
            blockchain_tools: self.blockchain_tools,
        })
    }
}

/// Reject names that cannot be used as a directory + npm package name.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let fail = |reason: &str| {
        Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    };

    if name.is_empty() {
        return fail("name cannot be empty");
    }
    if name.starts_with('.') {
        return fail("name cannot start with '.'");
    }
    if name.starts_with('-') {
        return fail("name cannot start with '-'");
    }
    if name.starts_with('_') {
        return fail("name cannot start with '_'");
    }
    if name.contains('/') || name.contains('\\') {
        return fail("name cannot contain path separators");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return fail(&format!("character '{c}' is not allowed"));
    }
    Ok(())
}

/// `com` + `My-Dapp` → `com.mydapp`; a leading digit gets an `app` prefix so
/// the segment stays a valid Java identifier.
fn derive_identifier(prefix: &str, name: &str) -> String {
    let mut segment: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if segment.is_empty() || segment.starts_with(|c: char| c.is_ascii_digit()) {
        segment.insert_str(0, "app");
    }

    format!("{prefix}.{segment}")
}

fn validate_identifier(value: &str) -> Result<(), String> {
    let segments: Vec<&str> = value.split('.').collect();
    if segments.len() < 2 {
        return Err("expected at least two dot-separated segments".into());
    }
    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err("empty segment".into()),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(format!("segment '{segment}' must start with a letter"));
            }
            _ => {}
        }
        if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
            return Err(format!("segment '{segment}' contains invalid characters"));
        }
    }
    Ok(())
}
