//! `pstep describe` — Print the definition generated from a manifest.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use pipestep_common::config::FactoryConfig;
use pipestep_component::channel::Channel;
use pipestep_component::executor::CommandLineArgument;
use pipestep_component::factory::ContainerComponentDef;
use pipestep_component::spec::ComponentSpecDef;
use serde::Serialize;

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Path to the component manifest.
    #[arg(default_value = "component.yaml")]
    pub file: PathBuf,

    /// Fail if a command-line placeholder names an undeclared argument.
    #[arg(long)]
    pub check: bool,
}

/// Serializable view of a component definition.
#[derive(Debug, Serialize)]
struct Description<'a> {
    name: &'a str,
    spec: &'a ComponentSpecDef,
    image: &'a str,
    command: &'a [CommandLineArgument],
    default_inputs: &'a BTreeMap<String, Channel>,
    default_outputs: &'a BTreeMap<String, Channel>,
}

impl<'a> From<&'a ContainerComponentDef> for Description<'a> {
    fn from(def: &'a ContainerComponentDef) -> Self {
        Self {
            name: def.name(),
            spec: def.spec(),
            image: def.executor().image(),
            command: def.executor().command(),
            default_inputs: def.default_inputs(),
            default_outputs: def.default_outputs(),
        }
    }
}

/// Executes the `describe` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or built, or if
/// `--check` finds an unresolvable placeholder.
pub fn execute(args: DescribeArgs, config: FactoryConfig) -> anyhow::Result<()> {
    tracing::info!(file = %args.file.display(), "describing component");
    let def = super::load_definition(&args.file, config)?;
    if args.check {
        def.check_placeholders().map_err(|e| anyhow::anyhow!("{e}"))?;
    }
    println!("{}", describe(&def)?);
    Ok(())
}

fn describe(def: &ContainerComponentDef) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&Description::from(def))?)
}
