//! Domain value objects: BlockchainTools, CreationStatus, PackageManager,
//! EnvVariable.
//!
//! These are pure value types: `Copy` where possible, equality-by-value, no
//! identity. Each has a stable string form used by the CLI, the config file
//! and the generated files.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── BlockchainTools ───────────────────────────────────────────────────────────

/// The local chain + contract toolchain wired into the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockchainTools {
    None,
    #[default]
    Truffle,
    Hardhat,
}

impl BlockchainTools {
    pub const ALL: [Self; 3] = [Self::None, Self::Truffle, Self::Hardhat];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Truffle => "truffle",
            Self::Hardhat => "hardhat",
        }
    }

    /// Name of the manifest script that starts the local chain.
    pub const fn launcher_script(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Truffle => Some("ganache"),
            Self::Hardhat => Some("hardhat"),
        }
    }

    /// Environment variable the generated app reads the RPC URL from.
    pub const fn rpc_env_name(&self) -> &'static str {
        match self {
            Self::Hardhat => "HARDHAT_URL",
            Self::None | Self::Truffle => "GANACHE_URL",
        }
    }

    /// File the chain writes its generated keys to; git-ignored.
    pub const fn key_file(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Truffle => Some("ganache.json"),
            Self::Hardhat => Some("hardhat.accounts.json"),
        }
    }

    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for BlockchainTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockchainTools {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "truffle" | "ganache" => Ok(Self::Truffle),
            "hardhat" => Ok(Self::Hardhat),
            other => Err(DomainError::UnknownTooling(other.to_string())),
        }
    }
}

// ── CreationStatus ────────────────────────────────────────────────────────────

/// Outcome of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CreationStatus {
    Success,
    Failure,
}

impl CreationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for CreationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

/// JavaScript package manager used inside the generated project.
///
/// Chosen by the presence of `yarn.lock` after scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub const LOCKFILE: &'static str = "yarn.lock";

    pub const fn detect(has_yarn_lock: bool) -> Self {
        if has_yarn_lock { Self::Yarn } else { Self::Npm }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Program and arguments that install the manifest's dependencies.
    pub fn install_args(&self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Yarn => ("yarn", vec![]),
            Self::Npm => ("npm", vec!["i"]),
        }
    }

    /// Shell fragment that runs a manifest script.
    pub fn run_script(&self, script: &str) -> String {
        match self {
            Self::Yarn => format!("yarn {script}"),
            Self::Npm => format!("npm run-script {script}"),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EnvVariable ───────────────────────────────────────────────────────────────

/// One variable of the generated `.env`, with its TypeScript type for the
/// `@env` ambient declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub name: String,
    pub ty: String,
    pub value: String,
}

impl EnvVariable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, "string", value)
    }
}
