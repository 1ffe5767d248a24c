//! Create Service - the generation pipeline.
//!
//! This service coordinates the entire workflow:
//! 1. Scaffold the base project with the external generator
//! 2. Rebuild the context and check the project exists
//! 3. Run every [`Step`] of [`PIPELINE`] in order
//!
//! The first failing step ends the run. Nothing is retried or rolled back;
//! the caller always receives a [`CreateResult`].

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{
        BlockchainTools, ContextPaths, CreateContext, CreateParams, CreateResult, GeneratorSettings,
        PatchError, ShellCommand, artifacts,
        entities::result::MISSING_PROJECT_DIR,
        manifest::{self, app_manifest_overlay, package_overlay},
    },
    error::{CoreResult, RnDappError},
};

/// A named unit of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    CreateBaseProject,
    PatchAppManifest,
    Eject,
    InjectShim,
    WriteScripts,
    PatchPackageManifest,
    WriteBundlerConfig,
    WriteTranspilerConfig,
    WriteTypeRoots,
    WriteCompilerConfig,
    PatchGitignore,
    WriteEnvironment,
    InitChainTooling,
    InstallDependencies,
    MaterializeExample,
}

/// Steps that run once the base project exists, in execution order.
pub const PIPELINE: &[Step] = &[
    Step::PatchAppManifest,
    Step::Eject,
    Step::InjectShim,
    Step::WriteScripts,
    Step::PatchPackageManifest,
    Step::WriteBundlerConfig,
    Step::WriteTranspilerConfig,
    Step::WriteTypeRoots,
    Step::WriteCompilerConfig,
    Step::PatchGitignore,
    Step::WriteEnvironment,
    Step::InitChainTooling,
    Step::InstallDependencies,
    Step::MaterializeExample,
];

impl Step {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateBaseProject => "create-base-project",
            Self::PatchAppManifest => "patch-app-manifest",
            Self::Eject => "eject",
            Self::InjectShim => "inject-shim",
            Self::WriteScripts => "write-scripts",
            Self::PatchPackageManifest => "patch-package-manifest",
            Self::WriteBundlerConfig => "write-bundler-config",
            Self::WriteTranspilerConfig => "write-transpiler-config",
            Self::WriteTypeRoots => "write-type-roots",
            Self::WriteCompilerConfig => "write-compiler-config",
            Self::PatchGitignore => "patch-gitignore",
            Self::WriteEnvironment => "write-environment",
            Self::InitChainTooling => "init-chain-tooling",
            Self::InstallDependencies => "install-dependencies",
            Self::MaterializeExample => "materialize-example",
        }
    }

    /// Whether the step does anything for the selected tooling.
    pub const fn applies_to(&self, tools: BlockchainTools) -> bool {
        match self {
            Self::InitChainTooling | Self::MaterializeExample => tools.is_configured(),
            _ => true,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of a dry-run plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub step: Step,
    pub command: Option<ShellCommand>,
}

/// Main generation service.
pub struct CreateService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    settings: GeneratorSettings,
    cwd: PathBuf,
}

impl CreateService {
    /// Create a new service generating projects inside `cwd`.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        settings: GeneratorSettings,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            settings,
            cwd: cwd.into(),
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Build a context, probing the filesystem once for the lockfile.
    pub fn context(&self, params: CreateParams) -> CreateContext {
        let lockfile = ContextPaths::derive(&self.cwd, params.name()).yarn_lock;
        let has_yarn_lock = self.filesystem.exists(&lockfile);
        CreateContext::new(params, &self.cwd, has_yarn_lock)
    }

    /// Generate a project.
    ///
    /// Never panics on tool or I/O failure: those end up in a `Failure`
    /// result naming the step.
    #[instrument(
        skip_all,
        fields(project = %params.name(), tooling = %params.blockchain_tools())
    )]
    pub fn create(&self, params: CreateParams) -> CreateResult {
        info!("Creating project in {}", self.cwd.display());

        let ctx = self.context(params.clone());
        if let Err(err) = self.run_step(Step::CreateBaseProject, &ctx) {
            return Self::fail(ctx, Step::CreateBaseProject, &err);
        }

        // The scaffold may have produced a lockfile.
        let ctx = self.context(params);
        if !self.filesystem.exists(&ctx.paths().project_dir) {
            warn!(
                path = %ctx.paths().project_dir.display(),
                "Project directory missing after scaffold"
            );
            return CreateResult::failure(ctx, MISSING_PROJECT_DIR);
        }
        debug!(package_manager = %ctx.options().package_manager, "Context rebuilt");

        for &step in PIPELINE {
            if !step.applies_to(ctx.options().tools()) {
                debug!(%step, "Skipped");
                continue;
            }
            if let Err(err) = self.run_step(step, &ctx) {
                return Self::fail(ctx, step, &err);
            }
        }

        info!("Project created successfully");
        CreateResult::success(ctx)
    }

    /// The steps `create` would run for `params`, with their commands.
    pub fn plan(&self, params: CreateParams) -> (CreateContext, Vec<PlannedStep>) {
        let ctx = self.context(params);
        let steps = std::iter::once(Step::CreateBaseProject)
            .chain(PIPELINE.iter().copied())
            .filter(|step| step.applies_to(ctx.options().tools()))
            .map(|step| PlannedStep {
                step,
                command: self.command_for(step, &ctx),
            })
            .collect();
        (ctx, steps)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn fail(ctx: CreateContext, step: Step, err: &RnDappError) -> CreateResult {
        error!(%step, error = %err, "Step failed");
        CreateResult::failure(ctx, format!("Step '{step}' failed: {err}"))
    }

    fn command_for(&self, step: Step, ctx: &CreateContext) -> Option<ShellCommand> {
        match step {
            Step::CreateBaseProject => Some(ShellCommand::create_base_project(
                &self.cwd,
                ctx.options().name(),
            )),
            Step::Eject => Some(ShellCommand::eject(ctx)),
            Step::InitChainTooling => ShellCommand::chain_init(ctx),
            Step::InstallDependencies => Some(ShellCommand::install(ctx)),
            Step::MaterializeExample => ShellCommand::compile(ctx),
            _ => None,
        }
    }

    fn run_step(&self, step: Step, ctx: &CreateContext) -> CoreResult<()> {
        info!(%step, "Running step");
        let paths = ctx.paths();
        let tools = ctx.options().tools();

        match step {
            Step::CreateBaseProject | Step::Eject | Step::InstallDependencies => {
                self.run_command_for(step, ctx)?;
            }
            Step::PatchAppManifest => {
                let source = if self.filesystem.exists(&paths.app_json) {
                    self.filesystem.read_to_string(&paths.app_json)?
                } else {
                    "{}".to_string()
                };
                self.patch(&paths.app_json, &source, &app_manifest_overlay(ctx))?;
            }
            Step::InjectShim => {
                self.write(&paths.index, &artifacts::entry_point(&self.settings))?;
            }
            Step::WriteScripts => {
                self.filesystem.create_dir_all(&paths.scripts_dir)?;
                self.write(&paths.postinstall, artifacts::postinstall_script())?;
                if let Some(path) = ctx.launcher_script_path() {
                    let endpoint = self.settings.chain_endpoint()?;
                    if let Some(script) = artifacts::launcher_script(tools, &endpoint) {
                        self.write(path, &script)?;
                    }
                }
            }
            Step::PatchPackageManifest => {
                let source = self.filesystem.read_to_string(&paths.pkg)?;
                self.patch(&paths.pkg, &source, &package_overlay(tools))?;
            }
            Step::WriteBundlerConfig => self.write(&paths.metro_config, artifacts::METRO_CONFIG)?,
            Step::WriteTranspilerConfig => {
                self.write(&paths.babel_config, artifacts::BABEL_CONFIG)?;
            }
            Step::WriteTypeRoots => {
                let vars = ctx.env_variables(&self.settings.rpc_url);
                self.write(&paths.type_roots, &artifacts::type_roots(&vars))?;
            }
            Step::WriteCompilerConfig => {
                let tsconfig = artifacts::tsconfig().map_err(|e| RnDappError::Internal {
                    message: e.to_string(),
                })?;
                self.write(&paths.tsc, &tsconfig)?;
            }
            Step::PatchGitignore => {
                let existing = if self.filesystem.exists(&paths.gitignore) {
                    self.filesystem.read_to_string(&paths.gitignore)?
                } else {
                    String::new()
                };
                self.write(&paths.gitignore, &artifacts::patch_gitignore(&existing, ctx))?;
            }
            Step::WriteEnvironment => {
                let env = artifacts::env_file(&ctx.env_variables(&self.settings.rpc_url));
                self.write(&paths.env, &env)?;
                self.write(&paths.example_env, &env)?;
            }
            Step::InitChainTooling => match &ctx.options().hardhat {
                Some(hardhat) => {
                    self.filesystem.create_dir_all(&paths.contracts_dir)?;
                    let accounts = artifacts::hardhat_accounts(&hardhat.hardhat_accounts)
                        .map_err(|e| RnDappError::Internal {
                            message: e.to_string(),
                        })?;
                    self.write(&hardhat.hardhat_accounts_file, &accounts)?;
                    self.write(&hardhat.hardhat_config, artifacts::hardhat_config())?;
                }
                None => self.run_command_for(step, ctx)?,
            },
            Step::MaterializeExample => {
                self.filesystem.create_dir_all(&paths.contracts_dir)?;
                self.write(&paths.contract, artifacts::example_contract())?;
                if let Some(app) = artifacts::example_app(tools) {
                    self.write(&paths.app, &app)?;
                }
                self.run_command_for(step, ctx)?;
            }
        }
        Ok(())
    }

    fn run_command_for(&self, step: Step, ctx: &CreateContext) -> CoreResult<()> {
        match self.command_for(step, ctx) {
            Some(command) => {
                info!(%command, cwd = %command.cwd.display(), "Running command");
                self.runner.run(&command)
            }
            None => Ok(()),
        }
    }

    fn write(&self, path: &Path, content: &str) -> CoreResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing file");
        self.filesystem.write_file(path, content)
    }

    fn patch(&self, path: &Path, source: &str, overlay: &serde_json::Value) -> CoreResult<()> {
        let patched = manifest::patch_manifest(source, overlay).map_err(|e| match e {
            PatchError::Domain(e) => RnDappError::Domain(e),
            PatchError::Parse(e) => ApplicationError::ManifestPatch {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into(),
        })?;
        self.write(path, &patched)
    }
}
