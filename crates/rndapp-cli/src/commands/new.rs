//! Implementation of the `rndapp new` command.
//!
//! Responsibility: translate CLI arguments into `CreateParams`, call the core
//! create service, and display results. No business logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use rndapp_adapters::{LocalFilesystem, RecordingCommandRunner, SystemCommandRunner};
use rndapp_core::{
    application::{CreateService, PlannedStep},
    domain::{BlockchainTools, CreateContext, CreateParams},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `rndapp new` command.
///
/// Dispatch sequence:
/// 1. Build and validate the parameters (flags over config defaults)
/// 2. Refuse an existing project directory
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Run the pipeline with the real filesystem and processes
/// 6. Print the follow-up command
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;

    // 1. Parameters
    let params = build_params(&args, &config)?;
    debug!(
        tooling = %params.blockchain_tools(),
        bundle_identifier = params.bundle_identifier(),
        package_name = params.package_name(),
        "Parameters resolved"
    );

    // The launcher must bind where the generated `.env` points.
    let endpoint = config.generator.chain_endpoint()?;
    debug!(host = %endpoint.host, port = endpoint.port, "Chain endpoint resolved");

    // 2. Existing directory
    let project_path = cwd.join(params.name());
    if project_path.exists() {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 3. Dry run: plan without touching anything.
    if args.dry_run {
        let service = CreateService::new(
            Box::new(LocalFilesystem::new()),
            Box::new(RecordingCommandRunner::new()),
            config.generator,
            &cwd,
        );
        let (ctx, steps) = service.plan(params);
        return show_plan(&ctx, &steps, &output);
    }

    // 4. Confirmation
    if !global.quiet && !args.yes && !output.is_json() {
        show_configuration(&params, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate
    let service = CreateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        config.generator,
        &cwd,
    );

    let name = params.name().to_owned();
    output.header(&format!("Creating '{name}'..."))?;
    info!(project = %name, path = %project_path.display(), "Generation started");

    let result = service.create(params);

    if output.is_json() {
        output.json(&result)?;
    }
    if !result.is_success() {
        return Err(CliError::CreationFailed {
            message: result.message().to_owned(),
        });
    }

    info!(project = %name, "Generation completed");

    // 6. Success + next steps
    if !output.is_json() {
        output.success(&format!("Project '{name}' created!"))?;
        output.print("")?;
        output.print("Start the local chain and the app with:")?;
        output.print(&format!("  {}", result.message()))?;
    }

    Ok(())
}

// ── Parameters ────────────────────────────────────────────────────────────────

/// Flags win over `defaults.*` from the configuration.
fn build_params(args: &NewArgs, config: &AppConfig) -> CliResult<CreateParams> {
    let tools = args
        .tooling
        .map(BlockchainTools::from)
        .unwrap_or(config.defaults.tooling);

    let mut builder = CreateParams::builder(args.name.as_str())
        .bundle_prefix(config.defaults.bundle_prefix.as_str())
        .blockchain_tools(tools);

    if let Some(id) = &args.bundle_id {
        builder = builder.bundle_identifier(id.as_str());
    }
    if let Some(package) = &args.package_name {
        builder = builder.package_name(package.as_str());
    }

    Ok(builder.build()?)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

/// The lockfile does not exist until `create-react-native-app` has run.
const PACKAGE_MANAGER_NOTE: &str =
    "  (chosen after scaffolding: yarn if the scaffold leaves a yarn.lock, npm otherwise)";

#[derive(Serialize)]
struct Plan<'a> {
    context: &'a CreateContext,
    steps: &'a [PlannedStep],
}

fn show_plan(ctx: &CreateContext, steps: &[PlannedStep], out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(&Plan {
            context: ctx,
            steps,
        })?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        ctx.options().name(),
        ctx.paths().project_dir.display(),
    ))?;
    out.print(&format!("  Tooling:         {}", ctx.options().tools()))?;
    out.print(&format!(
        "  Package manager: {}",
        ctx.options().package_manager
    ))?;
    out.print(PACKAGE_MANAGER_NOTE)?;
    out.print("")?;
    for (index, planned) in steps.iter().enumerate() {
        match &planned.command {
            Some(command) => out.print(&format!(
                "  {:>2}. {:<26} $ {command}",
                index + 1,
                planned.step.name()
            ))?,
            None => out.print(&format!("  {:>2}. {}", index + 1, planned.step.name()))?,
        }
    }
    Ok(())
}

fn show_configuration(params: &CreateParams, location: &Path, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:      {}", params.name()))?;
    out.print(&format!("  Tooling:      {}", params.blockchain_tools()))?;
    out.print(&format!("  iOS bundle:   {}", params.bundle_identifier()))?;
    out.print(&format!("  Android pkg:  {}", params.package_name()))?;
    out.print(&format!("  Location:     {}", location.display()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return confirm_plain();
    }

    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    confirm_plain()
}

fn confirm_plain() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let input = input.trim().to_ascii_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

// ── Tests ─────────────────────────────────────────────────────────────────────
