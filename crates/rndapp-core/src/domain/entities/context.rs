//! The immutable generation context.
//!
//! A [`CreateContext`] pairs every path the pipeline touches with the options
//! it was created from. It is built once from the project name (and a single
//! lockfile check done by the caller) and then only ever read. When the
//! pipeline needs a fresher view, e.g. after the scaffold tool produced a
//! lockfile, it builds a new context instead of mutating the old one.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::params::CreateParams,
    value_objects::{BlockchainTools, EnvVariable, PackageManager},
};

// ── Layout ────────────────────────────────────────────────────────────────────

const SCRIPTS_DIR: &str = "scripts";
const CONTRACTS_DIR: &str = "contracts";

/// Ten thousand ether, in wei.
const HARDHAT_ACCOUNT_BALANCE: &str = "10000000000000000000000";

/// Well-known development keys of the default Hardhat network. Never hold
/// real funds with these.
const HARDHAT_DEV_KEYS: [&str; 3] = [
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
];

// ── Paths ─────────────────────────────────────────────────────────────────────

/// Every file and directory the pipeline reads or writes.
///
/// Invariant: all paths live under `project_dir`, which is `cwd.join(name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextPaths {
    /* dirs */
    pub project_dir: PathBuf,
    pub scripts_dir: PathBuf,
    pub contracts_dir: PathBuf,
    /* files */
    pub index: PathBuf,
    pub postinstall: PathBuf,
    pub pkg: PathBuf,
    pub metro_config: PathBuf,
    pub babel_config: PathBuf,
    pub env: PathBuf,
    pub example_env: PathBuf,
    pub contract: PathBuf,
    pub app: PathBuf,
    pub app_json: PathBuf,
    pub type_roots: PathBuf,
    pub tsc: PathBuf,
    pub gitignore: PathBuf,
    pub yarn_lock: PathBuf,
}

impl ContextPaths {
    /// Derive all paths for project `name` created inside `cwd`.
    pub fn derive(cwd: &Path, name: &str) -> Self {
        let dir = cwd.join(name);
        let scripts = dir.join(SCRIPTS_DIR);
        let contracts = dir.join(CONTRACTS_DIR);
        Self {
            index: dir.join("index.js"),
            postinstall: scripts.join("postinstall.js"),
            pkg: dir.join("package.json"),
            metro_config: dir.join("metro.config.js"),
            babel_config: dir.join("babel.config.js"),
            env: dir.join(".env"),
            example_env: dir.join(".env.example"),
            contract: contracts.join("Hello.sol"),
            app: dir.join("App.tsx"),
            app_json: dir.join("app.json"),
            type_roots: dir.join("index.d.ts"),
            tsc: dir.join("tsconfig.json"),
            gitignore: dir.join(".gitignore"),
            yarn_lock: dir.join(PackageManager::LOCKFILE),
            scripts_dir: scripts,
            contracts_dir: contracts,
            project_dir: dir,
        }
    }

    /// All paths, directories first. Used to check the rooting invariant.
    pub fn all(&self) -> Vec<&Path> {
        vec![
            self.project_dir.as_path(),
            self.scripts_dir.as_path(),
            self.contracts_dir.as_path(),
            self.index.as_path(),
            self.postinstall.as_path(),
            self.pkg.as_path(),
            self.metro_config.as_path(),
            self.babel_config.as_path(),
            self.env.as_path(),
            self.example_env.as_path(),
            self.contract.as_path(),
            self.app.as_path(),
            self.app_json.as_path(),
            self.type_roots.as_path(),
            self.tsc.as_path(),
            self.gitignore.as_path(),
            self.yarn_lock.as_path(),
        ]
    }
}

// ── Tool options ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruffleOptions {
    pub contract: PathBuf,
    pub ganache: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatAccount {
    pub private_key: String,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatOptions {
    pub hardhat: PathBuf,
    pub hardhat_config: PathBuf,
    pub hardhat_accounts_file: PathBuf,
    pub hardhat_accounts: Vec<HardhatAccount>,
}

impl HardhatOptions {
    fn derive(paths: &ContextPaths) -> Self {
        Self {
            hardhat: paths.scripts_dir.join("hardhat.js"),
            hardhat_config: paths.project_dir.join("hardhat.config.js"),
            hardhat_accounts_file: paths.project_dir.join("hardhat.accounts.json"),
            hardhat_accounts: HARDHAT_DEV_KEYS
                .iter()
                .map(|key| HardhatAccount {
                    private_key: (*key).into(),
                    balance: HARDHAT_ACCOUNT_BALANCE.into(),
                })
                .collect(),
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────────

/// Creation parameters plus everything derived from them.
///
/// `truffle` / `hardhat` are `None` when that tool was not selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptions {
    #[serde(flatten)]
    pub params: CreateParams,
    pub package_manager: PackageManager,
    pub truffle: Option<TruffleOptions>,
    pub hardhat: Option<HardhatOptions>,
}

impl ContextOptions {
    pub fn name(&self) -> &str {
        self.params.name()
    }

    pub const fn tools(&self) -> BlockchainTools {
        self.params.blockchain_tools()
    }

    pub const fn uses_yarn(&self) -> bool {
        matches!(self.package_manager, PackageManager::Yarn)
    }
}

// ── Context ───────────────────────────────────────────────────────────────────

/// Read-only record threaded through every pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateContext {
    paths: ContextPaths,
    options: ContextOptions,
}

impl CreateContext {
    /// Build the context for `params` inside `cwd`.
    ///
    /// `has_yarn_lock` is the result of checking [`ContextPaths::yarn_lock`];
    /// it is the only input that does not come from the parameters.
    pub fn new(params: CreateParams, cwd: &Path, has_yarn_lock: bool) -> Self {
        let paths = ContextPaths::derive(cwd, params.name());

        let truffle = matches!(params.blockchain_tools(), BlockchainTools::Truffle).then(|| {
            TruffleOptions {
                contract: paths.contract.clone(),
                ganache: paths.scripts_dir.join("ganache.js"),
            }
        });
        let hardhat = matches!(params.blockchain_tools(), BlockchainTools::Hardhat)
            .then(|| HardhatOptions::derive(&paths));

        Self {
            options: ContextOptions {
                params,
                package_manager: PackageManager::detect(has_yarn_lock),
                truffle,
                hardhat,
            },
            paths,
        }
    }

    pub fn paths(&self) -> &ContextPaths {
        &self.paths
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Script that starts the local chain, if any tooling is selected.
    pub fn launcher_script_path(&self) -> Option<&Path> {
        match (&self.options.truffle, &self.options.hardhat) {
            (Some(t), _) => Some(&t.ganache),
            (_, Some(h)) => Some(&h.hardhat),
            _ => None,
        }
    }

    /// Variables written to `.env` and declared for `@env`.
    pub fn env_variables(&self, rpc_url: &str) -> Vec<EnvVariable> {
        vec![EnvVariable::string(self.options.tools().rpc_env_name(), rpc_url)]
    }

    /// Copy-pasteable command that starts the chain and the app.
    pub fn follow_up_command(&self) -> String {
        let pm = self.options.package_manager;
        let web = pm.run_script("web");
        match self.options.tools().launcher_script() {
            Some(launcher) => format!(
                "cd {}; {}& {};",
                self.options.name(),
                pm.run_script(launcher),
                web
            ),
            None => format!("cd {}; {};", self.options.name(), web),
        }
    }
}
