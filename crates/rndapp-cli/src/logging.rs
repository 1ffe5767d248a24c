//! Diagnostics for a generation run.
//!
//! Everything goes to stderr: stdout carries the plan, the follow-up command
//! or the `--output-format json` document, and must stay parseable.
//!
//! What each level shows while `rndapp new` runs:
//!
//! | Flag(s)   | Level | Adds                                              |
//! |-----------|-------|---------------------------------------------------|
//! | `--quiet` | ERROR | nothing but failures                              |
//! | (none)    | WARN  | a scaffold that left no project directory         |
//! | `-v`      | INFO  | each pipeline step and every external command     |
//! | `-vv`     | DEBUG | resolved parameters, endpoint, file writes, skips |
//! | `-vvv`    | TRACE | every filesystem call made by the adapters        |
//!
//! A `RUST_LOG` directive replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal when `RUST_LOG` is unset.
const LOG_TARGETS: [&str; 3] = ["rndapp", "rndapp_core", "rndapp_adapters"];

/// Install the stderr subscriber for this invocation.
///
/// Called from `main` once the arguments are parsed and before any command
/// runs. Fails if a subscriber is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(derive_level(args))));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `rndapp=info,rndapp_core=info,...`; third-party crates stay silent.
fn default_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn quiet_run_only_reports_failures() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn plain_run_shows_warnings() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn each_verbose_flag_raises_the_level() {
        assert_eq!(derive_level(&args_with(1, false)), "info");
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        assert_eq!(
            default_directives("debug"),
            "rndapp=debug,rndapp_core=debug,rndapp_adapters=debug"
        );
        assert!(EnvFilter::try_new(default_directives("info")).is_ok());
    }
}
