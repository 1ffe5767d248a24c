//! External commands the pipeline spawns.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::domain::{entities::CreateContext, value_objects::BlockchainTools};

/// A program invocation: what to run and where.
///
/// Commands never go through a shell; arguments are passed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ShellCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// `npx create-react-native-app <name> -t with-typescript`, run from `cwd`.
    pub fn create_base_project(cwd: &Path, name: &str) -> Self {
        Self::new(
            "npx",
            ["create-react-native-app", name, "-t", "with-typescript"],
            cwd,
        )
    }

    /// `expo eject` inside the project.
    pub fn eject(ctx: &CreateContext) -> Self {
        Self::new("expo", ["eject"], &ctx.paths().project_dir)
    }

    /// Dependency install with the detected package manager.
    pub fn install(ctx: &CreateContext) -> Self {
        let (program, args) = ctx.options().package_manager.install_args();
        Self::new(program, args, &ctx.paths().project_dir)
    }

    /// Tooling-specific project initialisation that needs an external tool.
    ///
    /// Only Truffle shells out; Hardhat's files are written directly.
    pub fn chain_init(ctx: &CreateContext) -> Option<Self> {
        match ctx.options().tools() {
            BlockchainTools::Truffle => Some(Self::new(
                "npx",
                ["truffle", "init"],
                &ctx.paths().project_dir,
            )),
            BlockchainTools::Hardhat | BlockchainTools::None => None,
        }
    }

    /// Contract compilation for the example.
    pub fn compile(ctx: &CreateContext) -> Option<Self> {
        let tool = match ctx.options().tools() {
            BlockchainTools::Truffle => "truffle",
            BlockchainTools::Hardhat => "hardhat",
            BlockchainTools::None => return None,
        };
        Some(Self::new("npx", [tool, "compile"], &ctx.paths().project_dir))
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
