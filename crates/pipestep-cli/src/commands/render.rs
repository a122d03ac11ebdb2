//! `pstep render` — Instantiate a component and print its command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use pipestep_common::config::FactoryConfig;
use pipestep_common::types::{ArtifactType, ParameterValue};
use pipestep_component::artifact::Artifact;
use pipestep_component::channel::Channel;
use pipestep_component::factory::ContainerComponentDef;
use pipestep_component::spec::{Argument, Arguments, ChannelParameter};

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the component manifest.
    #[arg(default_value = "component.yaml")]
    pub file: PathBuf,

    /// Bind an input to an artifact URI (`name=uri`).
    #[arg(long = "input", value_parser = parse_key_value)]
    pub inputs: Vec<(String, String)>,

    /// Bind an output to an artifact URI (`name=uri`).
    #[arg(long = "output", value_parser = parse_key_value)]
    pub outputs: Vec<(String, String)>,

    /// Bind an execution parameter (`name=value`).
    #[arg(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Instance name of the component.
    #[arg(long)]
    pub instance_name: Option<String>,

    /// Print the command as a JSON array instead of a shell line.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, an argument does not
/// match a declaration, or a placeholder cannot be resolved.
pub fn execute(args: RenderArgs, config: FactoryConfig) -> anyhow::Result<()> {
    let def = super::load_definition(&args.file, config)?;
    let arguments = bind_arguments(&def, &args)?;
    let component = def
        .instantiate(arguments, args.instance_name)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let command = component
        .resolve_command()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!(
        id = %component.id(),
        image = component.executor().image(),
        "rendered command"
    );

    if args.json {
        println!("{}", serde_json::to_string(&command)?);
    } else {
        println!("# image: {}", component.executor().image());
        println!("{}", crate::output::shell_join(&command));
    }
    Ok(())
}

fn bind_arguments(def: &ContainerComponentDef, args: &RenderArgs) -> anyhow::Result<Arguments> {
    let spec = def.spec();
    let mut arguments = Arguments::new();

    for (name, uri) in &args.inputs {
        let decl = spec
            .inputs()
            .get(name)
            .with_context(|| format!("{} declares no input \"{name}\"", def.name()))?;
        let _ = arguments.insert(name.clone(), channel_argument(decl, uri)?);
    }
    for (name, uri) in &args.outputs {
        let decl = spec
            .outputs()
            .get(name)
            .with_context(|| format!("{} declares no output \"{name}\"", def.name()))?;
        let _ = arguments.insert(name.clone(), channel_argument(decl, uri)?);
    }
    for (name, raw) in &args.params {
        let decl = spec
            .parameters()
            .get(name)
            .with_context(|| format!("{} declares no parameter \"{name}\"", def.name()))?;
        let value = ParameterValue::parse(name, decl.value_type, raw)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        let _ = arguments.insert(name.clone(), Argument::Value(value));
    }

    Ok(arguments)
}

fn channel_argument(decl: &ChannelParameter, uri: &str) -> anyhow::Result<Argument> {
    let ty: ArtifactType = decl.artifact_type.clone();
    let artifact = Artifact::empty(ty.clone()).with_uri(uri);
    let channel =
        Channel::with_artifacts(ty, vec![artifact]).map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(Argument::Channel(channel))
}

/// Parses a `name=value` pair.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got \"{s}\""))
}
