//! Flags accepted before or after any `rndapp` subcommand.
//!
//! `--config` and `--output-format` feed [`crate::config::AppConfig`] and
//! [`crate::output::OutputManager`]; the rest only shape what reaches the
//! terminal while a dapp is generated.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Repeat to see pipeline steps, then file writes, then filesystem calls.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more of what the generator does (-v, -vv, -vvv)",
        long_help = "Show more of what the generator does on stderr:
    (none)  - Warnings and errors
    -v      - Each pipeline step and the external commands it runs
    -vv     - Resolved parameters, chain endpoint and files written
    -vvv    - Every filesystem call"
    )]
    pub verbose: u8,

    /// Also answers the `Continue?` prompt with yes.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors; skip the confirmation prompt"
    )]
    pub quiet: bool,

    /// `NO_COLOR=1` has the same effect; `NO_COLOR=0` or empty does not.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Overrides the platform default; `RNDAPP__*` variables still win.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` in the config file.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print plans and results"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of plans, results and config listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colored, with status symbols.
    Human,
    /// No ANSI codes.
    Plain,
    /// A single JSON document on stdout.
    Json,
}
