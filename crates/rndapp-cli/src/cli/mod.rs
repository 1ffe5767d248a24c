//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rndapp_core::domain::BlockchainTools;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rndapp",
    bin_name = "rndapp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} React Native dapp generator",
    long_about = "rndapp creates a React Native (Expo, ejected) project wired for \
                  web3: Node polyfills, a local chain and an example contract.",
    after_help = "EXAMPLES:\n\
        \x20 rndapp new my-dapp\n\
        \x20 rndapp new my-dapp --tooling hardhat --bundle-id io.acme.mydapp\n\
        \x20 rndapp new my-dapp --dry-run\n\
        \x20 rndapp completions bash > /usr/share/bash-completion/completions/rndapp",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new dapp project.
    #[command(
        visible_alias = "n",
        about = "Create a new dapp project",
        after_help = "EXAMPLES:\n\
            \x20 rndapp new my-dapp\n\
            \x20 rndapp new my-dapp --tooling none\n\
            \x20 rndapp new my-dapp -y --package-name com.acme.dapp"
    )]
    New(NewArgs),

    /// Initialise an rndapp configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 rndapp init           # default location\n\
            \x20 rndapp init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rndapp completions bash > ~/.local/share/bash-completion/completions/rndapp\n\
            \x20 rndapp completions zsh  > ~/.zfunc/_rndapp\n\
            \x20 rndapp completions fish > ~/.config/fish/completions/rndapp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the rndapp configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 rndapp config get defaults.tooling\n\
            \x20 rndapp config list\n\
            \x20 rndapp config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `rndapp new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; the project is created in `./NAME`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Chain tooling; falls back to `defaults.tooling` from the config.
    #[arg(
        short = 't',
        long = "tooling",
        value_name = "TOOLING",
        value_enum,
        help = "Blockchain tooling"
    )]
    pub tooling: Option<Tooling>,

    /// iOS bundle identifier.
    #[arg(
        long = "bundle-id",
        value_name = "ID",
        help = "iOS bundle identifier (default: <bundle_prefix>.<name>)"
    )]
    pub bundle_id: Option<String>,

    /// Android package name.
    #[arg(
        long = "package-name",
        value_name = "NAME",
        help = "Android package name (default: <bundle_prefix>.<name>)"
    )]
    pub package_name: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview the steps without running anything.
    #[arg(long = "dry-run", help = "Show what would be run without running it")]
    pub dry_run: bool,
}

/// Chain tooling as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Tooling {
    None,
    /// Also accepted as `ganache`.
    #[value(alias = "ganache")]
    Truffle,
    Hardhat,
}

impl From<Tooling> for BlockchainTools {
    fn from(value: Tooling) -> Self {
        match value {
            Tooling::None => Self::None,
            Tooling::Truffle => Self::Truffle,
            Tooling::Hardhat => Self::Hardhat,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rndapp init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rndapp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `rndapp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.tooling`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
