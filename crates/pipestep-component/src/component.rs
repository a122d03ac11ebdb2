//! Base component: a bound spec plus the executor that runs it.

use std::collections::BTreeMap;
use std::sync::Arc;

use pipestep_common::constants::{ARTIFACT_VALUE_PROPERTY, INSTANCE_ID_SEPARATOR};
use pipestep_common::error::{PipestepError, Result};
use pipestep_common::types::ParameterValue;

use crate::channel::Channel;
use crate::executor::{PlaceholderResolver, TemplatedExecutorContainerSpec};
use crate::spec::ComponentSpec;

/// A pipeline step instance: checked arguments bound to a container executor.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerComponent {
    name: String,
    spec: ComponentSpec,
    executor: Arc<TemplatedExecutorContainerSpec>,
    instance_name: Option<String>,
}

impl ContainerComponent {
    /// Creates a component from a bound spec.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        spec: ComponentSpec,
        executor: Arc<TemplatedExecutorContainerSpec>,
        instance_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            executor,
            instance_name,
        }
    }

    /// Returns the component definition name.
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.name
    }

    /// Returns the instance name, if one was given.
    #[must_use]
    pub fn instance_name(&self) -> Option<&str> {
        self.instance_name.as_deref()
    }

    /// Unique id within a pipeline: `<name>.<instance_name>`, or `<name>`.
    #[must_use]
    pub fn id(&self) -> String {
        match &self.instance_name {
            Some(instance) => format!("{}{INSTANCE_ID_SEPARATOR}{instance}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns the bound spec.
    #[must_use]
    pub const fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    /// Returns the bound input channels.
    #[must_use]
    pub const fn inputs(&self) -> &BTreeMap<String, Channel> {
        self.spec.inputs()
    }

    /// Returns the bound output channels.
    #[must_use]
    pub const fn outputs(&self) -> &BTreeMap<String, Channel> {
        self.spec.outputs()
    }

    /// Returns the bound execution parameter values.
    #[must_use]
    pub const fn exec_properties(&self) -> &BTreeMap<String, ParameterValue> {
        self.spec.exec_properties()
    }

    /// Returns the executor descriptor.
    #[must_use]
    pub fn executor(&self) -> &TemplatedExecutorContainerSpec {
        &self.executor
    }

    /// Renders the command line against the bound arguments.
    ///
    /// Nothing is executed; this is the command the container would receive.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::UnresolvedPlaceholder`] if a placeholder names
    /// something that is not bound, or a channel with no artifacts.
    pub fn resolve_command(&self) -> Result<Vec<String>> {
        self.executor.render(&self.spec)
    }
}

impl PlaceholderResolver for ComponentSpec {
    fn input_value(&self, name: &str) -> Result<String> {
        if let Some(value) = self.exec_properties().get(name) {
            return Ok(value.to_string());
        }
        let channel = self
            .inputs()
            .get(name)
            .ok_or_else(|| unresolved(name, "no bound execution parameter or input"))?;
        channel
            .artifacts()
            .first()
            .and_then(|artifact| artifact.properties.get(ARTIFACT_VALUE_PROPERTY))
            .map(ToString::to_string)
            .ok_or_else(|| unresolved(name, "input artifact carries no value"))
    }

    fn input_uri(&self, name: &str) -> Result<String> {
        channel_uri(self.inputs().get(name), name, "input")
    }

    fn output_uri(&self, name: &str) -> Result<String> {
        channel_uri(self.outputs().get(name), name, "output")
    }
}

fn channel_uri(channel: Option<&Channel>, name: &str, category: &str) -> Result<String> {
    let channel = channel.ok_or_else(|| unresolved(name, &format!("no bound {category}")))?;
    channel
        .first_uri()
        .map(ToString::to_string)
        .ok_or_else(|| unresolved(name, &format!("{category} channel has no artifacts")))
}

fn unresolved(name: &str, reason: &str) -> PipestepError {
    PipestepError::UnresolvedPlaceholder {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pipestep_common::types::{ArtifactType, ValueType};

    use super::*;
    use crate::artifact::Artifact;
    use crate::executor::{CommandLineArgument, Placeholder};
    use crate::spec::{Arguments, ChannelParameter, ComponentSpecDef, ExecutionParameter};

    fn bound_spec(data: Channel) -> ComponentSpec {
        let mut parameters = BTreeMap::new();
        let _ = parameters.insert(
            "steps".to_string(),
            ExecutionParameter {
                value_type: ValueType::Int,
                optional: true,
            },
        );
        let mut inputs = BTreeMap::new();
        let _ = inputs.insert(
            "data".to_string(),
            ChannelParameter {
                artifact_type: ArtifactType::DATASET,
            },
        );
        let def = ComponentSpecDef::new("TrainerSpec", parameters, inputs, BTreeMap::new())
            .expect("valid");
        let mut args = Arguments::new();
        let _ = args.insert("data".into(), data.into());
        ComponentSpec::new(Arc::new(def), args).expect("bind")
    }

    fn executor(command: Vec<CommandLineArgument>) -> Arc<TemplatedExecutorContainerSpec> {
        Arc::new(TemplatedExecutorContainerSpec::new("img", command))
    }

    #[test]
    fn id_includes_instance_name() {
        let spec = bound_spec(Channel::with_empty_artifact(ArtifactType::DATASET));
        let named = ContainerComponent::new(
            "Trainer",
            spec.clone(),
            executor(vec![]),
            Some("nightly".into()),
        );
        assert_eq!(named.id(), "Trainer.nightly");
        assert_eq!(named.instance_name(), Some("nightly"));

        let anonymous = ContainerComponent::new("Trainer", spec, executor(vec![]), None);
        assert_eq!(anonymous.id(), "Trainer");
    }

    #[test]
    fn resolve_command_uses_input_uri() {
        let data = Channel::with_artifacts(
            ArtifactType::DATASET,
            vec![Artifact::empty(ArtifactType::DATASET).with_uri("gs://bucket/train")],
        )
        .expect("channel");
        let component = ContainerComponent::new(
            "Trainer",
            bound_spec(data),
            executor(vec!["train".into(), Placeholder::input_uri("data").into()]),
            None,
        );
        assert_eq!(
            component.resolve_command().expect("resolve"),
            vec!["train", "gs://bucket/train"]
        );
    }

    #[test]
    fn resolve_command_fails_on_unbound_parameter() {
        let component = ContainerComponent::new(
            "Trainer",
            bound_spec(Channel::with_empty_artifact(ArtifactType::DATASET)),
            executor(vec![Placeholder::input_value("steps").into()]),
            None,
        );
        let err = component.resolve_command().unwrap_err();
        assert!(
            matches!(err, PipestepError::UnresolvedPlaceholder { ref name, .. } if name == "steps")
        );
    }

    #[test]
    fn input_value_reads_scalar_input_artifact() {
        let data = Channel::with_artifacts(
            ArtifactType::DATASET,
            vec![Artifact::empty(ArtifactType::DATASET).with_property("value", 0.25)],
        )
        .expect("channel");
        let component = ContainerComponent::new(
            "Trainer",
            bound_spec(data),
            executor(vec![Placeholder::concat(vec![
                CommandLineArgument::from("--split="),
                Placeholder::input_value("data").into(),
            ])
            .into()]),
            None,
        );
        assert_eq!(component.resolve_command().expect("resolve"), vec!["--split=0.25"]);
    }

    #[test]
    fn input_value_fails_on_input_without_value() {
        let component = ContainerComponent::new(
            "Trainer",
            bound_spec(Channel::with_empty_artifact(ArtifactType::DATASET)),
            executor(vec![Placeholder::input_value("data").into()]),
            None,
        );
        let err = component.resolve_command().unwrap_err();
        assert!(err.to_string().contains("carries no value"), "got: {err}");
    }

    #[test]
    fn resolve_command_fails_on_channel_without_artifacts() {
        let component = ContainerComponent::new(
            "Trainer",
            bound_spec(Channel::new(ArtifactType::DATASET)),
            executor(vec![Placeholder::input_uri("data").into()]),
            None,
        );
        let err = component.resolve_command().unwrap_err();
        assert!(err.to_string().contains("no artifacts"), "got: {err}");
    }
}
