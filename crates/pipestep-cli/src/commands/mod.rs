//! CLI command definitions and dispatch.

pub mod describe;
pub mod render;

use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};
use pipestep_common::config::{FactoryConfig, NamePolicy};
use pipestep_component::factory::ContainerComponentDef;
use pipestep_component::manifest::ComponentManifest;

/// pstep — Build and inspect containerized pipeline components.
#[derive(Parser, Debug)]
#[command(name = "pstep", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// How component and argument names are treated.
    #[arg(long, global = true, value_enum, default_value_t = PolicyArg::Verbatim)]
    pub name_policy: PolicyArg,

    /// Emit logs as JSON.
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the spec and defaults generated from a component manifest.
    Describe(describe::DescribeArgs),
    /// Instantiate a component and print its container command line.
    Render(render::RenderArgs),
}

/// Command-line spelling of [`NamePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Use names as given.
    Verbatim,
    /// Reject names that are not identifiers.
    Validate,
    /// Rewrite names into identifiers.
    Sanitize,
}

impl From<PolicyArg> for NamePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Verbatim => Self::Verbatim,
            PolicyArg::Validate => Self::Validate,
            PolicyArg::Sanitize => Self::Sanitize,
        }
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = FactoryConfig {
        name_policy: cli.name_policy.into(),
        ..FactoryConfig::default()
    };
    match cli.command {
        Command::Describe(args) => describe::execute(args, config),
        Command::Render(args) => render::execute(args, config),
    }
}

/// Loads a manifest file and runs the factory on it.
fn load_definition(path: &Path, config: FactoryConfig) -> anyhow::Result<ContainerComponentDef> {
    let manifest = ComponentManifest::from_path(path).map_err(|e| anyhow::anyhow!("{e}"))?;
    manifest
        .into_definition(config)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}
