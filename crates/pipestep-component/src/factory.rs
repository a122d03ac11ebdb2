//! Factory for container-based components.
//!
//! Turns declarative input, output, and parameter descriptors plus an image
//! and a command-line template into a [`ContainerComponentDef`]: a spec
//! definition bound to a container executor. The definition is then
//! instantiated once per pipeline with concrete channels and values.
//!
//! # Example
//!
//! ```rust,no_run
//! use pipestep_common::types::{ArtifactType, ValueType};
//! use pipestep_component::executor::Placeholder;
//! use pipestep_component::factory::{
//!     ContainerComponentBuilder, InputSpec, OutputSpec, ParameterSpec,
//! };
//!
//! let trainer = ContainerComponentBuilder::new("Trainer")
//!     .input(InputSpec::required("training_data", ArtifactType::DATASET))
//!     .output(OutputSpec::new("model", ArtifactType::MODEL))
//!     .parameter(ParameterSpec::required("num_training_steps", ValueType::Int))
//!     .image("gcr.io/my-project/my-trainer")
//!     .command(vec![
//!         "python3".into(),
//!         "my_trainer".into(),
//!         "--training_data_uri".into(),
//!         Placeholder::input_uri("training_data").into(),
//!         "--model_uri".into(),
//!         Placeholder::output_uri("model").into(),
//!         "--num_training_steps".into(),
//!         Placeholder::input_value("num_training_steps").into(),
//!     ])
//!     .build();
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use pipestep_common::config::FactoryConfig;
use pipestep_common::constants::SPEC_NAME_SUFFIX;
use pipestep_common::error::{PipestepError, Result};
use pipestep_common::types::{ArtifactType, ValueType};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::component::ContainerComponent;
use crate::executor::{CommandLineArgument, PlaceholderKind, TemplatedExecutorContainerSpec};
use crate::naming;
use crate::spec::{
    Argument, Arguments, ChannelParameter, ComponentSpec, ComponentSpecDef, DeclarationMap,
    ExecutionParameter,
};

/// Describes a component input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Input name.
    pub name: String,
    /// Artifact type carried by the input channel.
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    /// Whether the input may be omitted at instantiation.
    #[serde(default)]
    pub optional: bool,
}

impl InputSpec {
    /// Creates an input descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, artifact_type: ArtifactType, optional: bool) -> Self {
        Self {
            name: name.into(),
            artifact_type,
            optional,
        }
    }

    /// Creates a required input descriptor.
    #[must_use]
    pub fn required(name: impl Into<String>, artifact_type: ArtifactType) -> Self {
        Self::new(name, artifact_type, false)
    }

    /// Creates an optional input descriptor.
    #[must_use]
    pub fn optional(name: impl Into<String>, artifact_type: ArtifactType) -> Self {
        Self::new(name, artifact_type, true)
    }
}

/// Describes a component output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output name.
    pub name: String,
    /// Artifact type carried by the output channel.
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
}

impl OutputSpec {
    /// Creates an output descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, artifact_type: ArtifactType) -> Self {
        Self {
            name: name.into(),
            artifact_type,
        }
    }
}

/// Describes a component execution parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Scalar type of the parameter.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Whether the parameter may be omitted at instantiation.
    #[serde(default)]
    pub optional: bool,
}

impl ParameterSpec {
    /// Creates a parameter descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType, optional: bool) -> Self {
        Self {
            name: name.into(),
            value_type,
            optional,
        }
    }

    /// Creates a required parameter descriptor.
    #[must_use]
    pub fn required(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, value_type, false)
    }

    /// Creates an optional parameter descriptor.
    #[must_use]
    pub fn optional(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, value_type, true)
    }
}

/// A reusable component definition produced by the factory.
///
/// Cloning is cheap; the spec and executor are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerComponentDef {
    name: String,
    spec: Arc<ComponentSpecDef>,
    executor: Arc<TemplatedExecutorContainerSpec>,
    default_inputs: BTreeMap<String, Channel>,
    default_outputs: BTreeMap<String, Channel>,
}

impl ContainerComponentDef {
    /// Returns the definition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the specification definition.
    #[must_use]
    pub fn spec(&self) -> &ComponentSpecDef {
        &self.spec
    }

    /// Returns the executor descriptor.
    #[must_use]
    pub fn executor(&self) -> &TemplatedExecutorContainerSpec {
        &self.executor
    }

    /// Default channels for optional inputs.
    #[must_use]
    pub const fn default_inputs(&self) -> &BTreeMap<String, Channel> {
        &self.default_inputs
    }

    /// Default channels for outputs.
    #[must_use]
    pub const fn default_outputs(&self) -> &BTreeMap<String, Channel> {
        &self.default_outputs
    }

    /// Instantiates the component with caller arguments.
    ///
    /// Arguments are merged in order: default inputs, then default outputs,
    /// then `arguments`. Later sources win, so caller arguments override any
    /// default. The merged set is bound to the spec definition.
    ///
    /// # Errors
    ///
    /// Returns any error raised while binding the merged arguments, e.g. a
    /// missing required input or an argument of the wrong type.
    pub fn instantiate(
        &self,
        arguments: Arguments,
        instance_name: Option<String>,
    ) -> Result<ContainerComponent> {
        tracing::debug!(
            component = %self.name,
            instance = instance_name.as_deref().unwrap_or_default(),
            supplied = arguments.len(),
            "instantiating component"
        );

        let mut merged = Arguments::new();
        merged.extend(
            self.default_inputs
                .iter()
                .map(|(name, channel)| (name.clone(), Argument::Channel(channel.clone()))),
        );
        merged.extend(
            self.default_outputs
                .iter()
                .map(|(name, channel)| (name.clone(), Argument::Channel(channel.clone()))),
        );
        merged.extend(arguments);

        let spec = ComponentSpec::new(Arc::clone(&self.spec), merged)?;
        Ok(ContainerComponent::new(
            self.name.clone(),
            spec,
            Arc::clone(&self.executor),
            instance_name,
        ))
    }

    /// Checks that every command-line placeholder names a declared argument
    /// of the matching category.
    ///
    /// The factory does not call this; callers opt in.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::UnresolvedPlaceholder`] for the first
    /// placeholder that names an undeclared argument.
    pub fn check_placeholders(&self) -> Result<()> {
        for (kind, name) in self.executor.placeholder_names() {
            let (declared, category) = match kind {
                PlaceholderKind::InputValue => (
                    self.spec.parameters().contains_key(name)
                        || self.spec.inputs().contains_key(name),
                    "parameter or input",
                ),
                PlaceholderKind::InputUri => (self.spec.inputs().contains_key(name), "input"),
                PlaceholderKind::OutputUri => (self.spec.outputs().contains_key(name), "output"),
            };
            if !declared {
                return Err(PipestepError::UnresolvedPlaceholder {
                    name: name.to_string(),
                    reason: format!("no {category} declared with this name"),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`ContainerComponentDef`].
#[derive(Debug)]
pub struct ContainerComponentBuilder {
    name: String,
    inputs: Vec<InputSpec>,
    outputs: Vec<OutputSpec>,
    parameters: Vec<ParameterSpec>,
    image: Option<String>,
    command: Vec<CommandLineArgument>,
    config: FactoryConfig,
}

impl ContainerComponentBuilder {
    /// Creates a new builder for a component with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            parameters: Vec::new(),
            image: None,
            command: Vec::new(),
            config: FactoryConfig::default(),
        }
    }

    /// Adds an input descriptor.
    #[must_use]
    pub fn input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    /// Adds several input descriptors.
    #[must_use]
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = InputSpec>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    /// Adds an output descriptor.
    #[must_use]
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Adds several output descriptors.
    #[must_use]
    pub fn outputs(mut self, outputs: impl IntoIterator<Item = OutputSpec>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// Adds a parameter descriptor.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds several parameter descriptors.
    #[must_use]
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Sets the container image reference.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the container entrypoint command line.
    #[must_use]
    pub fn command(mut self, command: Vec<CommandLineArgument>) -> Self {
        self.command = command;
        self
    }

    /// Sets the factory configuration.
    #[must_use]
    pub fn config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the component definition.
    ///
    /// Names rewritten by the name policy are rewritten in the command's
    /// placeholders too.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is missing, a name is rejected by the
    /// configured name policy, or a name is declared twice.
    pub fn build(self) -> Result<ContainerComponentDef> {
        let image = self.image.ok_or_else(|| PipestepError::Config {
            message: "image is required".to_string(),
        })?;
        let policy = self.config.name_policy;
        let mut renamed = BTreeMap::new();

        let mut input_decls = DeclarationMap::new("input");
        let mut default_inputs = BTreeMap::new();
        for input in self.inputs {
            let name = naming::apply(policy, &input.name)?;
            if name != input.name {
                let original = input.name;
                let _ = renamed.insert((PlaceholderKind::InputUri, original.clone()), name.clone());
                let _ = renamed.insert((PlaceholderKind::InputValue, original), name.clone());
            }
            if input.optional {
                let _ = default_inputs.insert(
                    name.clone(),
                    Channel::with_empty_artifact(input.artifact_type.clone()),
                );
            }
            tracing::debug!(
                %name,
                artifact_type = %input.artifact_type,
                optional = input.optional,
                "declared input"
            );
            input_decls.declare(
                name,
                ChannelParameter {
                    artifact_type: input.artifact_type,
                },
            )?;
        }

        let mut output_decls = DeclarationMap::new("output");
        let mut default_outputs = BTreeMap::new();
        for output in self.outputs {
            let name = naming::apply(policy, &output.name)?;
            if name != output.name {
                let _ = renamed.insert((PlaceholderKind::OutputUri, output.name), name.clone());
            }
            let _ = default_outputs.insert(
                name.clone(),
                Channel::with_empty_artifact(output.artifact_type.clone()),
            );
            tracing::debug!(%name, artifact_type = %output.artifact_type, "declared output");
            output_decls.declare(
                name,
                ChannelParameter {
                    artifact_type: output.artifact_type,
                },
            )?;
        }

        let mut parameter_decls = DeclarationMap::new("parameter");
        for parameter in self.parameters {
            let name = naming::apply(policy, &parameter.name)?;
            if name != parameter.name {
                let _ = renamed.insert((PlaceholderKind::InputValue, parameter.name), name.clone());
            }
            tracing::debug!(%name, value_type = %parameter.value_type, "declared parameter");
            parameter_decls.declare(
                name,
                ExecutionParameter {
                    value_type: parameter.value_type,
                    optional: parameter.optional,
                },
            )?;
        }

        let name = if self.name.is_empty() {
            self.config.default_component_name
        } else {
            naming::apply(policy, &self.name)?
        };

        let (parameters, inputs, outputs) = (
            parameter_decls.into_inner(),
            input_decls.into_inner(),
            output_decls.into_inner(),
        );
        tracing::info!(
            component = %name,
            image = %image,
            inputs = inputs.len(),
            outputs = outputs.len(),
            parameters = parameters.len(),
            "created container component"
        );

        let spec_name = format!("{name}{SPEC_NAME_SUFFIX}");
        let spec = ComponentSpecDef::new(spec_name, parameters, inputs, outputs)?;

        let command = if renamed.is_empty() {
            self.command
        } else {
            tracing::debug!(renamed = renamed.len(), "renaming command placeholders");
            let lookup = |kind: PlaceholderKind, placeholder: &str| {
                renamed.get(&(kind, placeholder.to_string())).cloned()
            };
            self.command
                .into_iter()
                .map(|arg| arg.rename_placeholders(&lookup))
                .collect()
        };

        Ok(ContainerComponentDef {
            name,
            spec: Arc::new(spec),
            executor: Arc::new(TemplatedExecutorContainerSpec::new(image, command)),
            default_inputs,
            default_outputs,
        })
    }
}

/// Creates a container-based component definition.
///
/// `command` is the container entrypoint; it is not executed within a shell
/// and may contain placeholders substituted when the command is rendered.
/// Names are used verbatim.
///
/// # Errors
///
/// Returns an error if a name is declared twice.
pub fn create_container_component(
    name: &str,
    inputs: &[InputSpec],
    outputs: &[OutputSpec],
    parameters: &[ParameterSpec],
    image: &str,
    command: Vec<CommandLineArgument>,
) -> Result<ContainerComponentDef> {
    ContainerComponentBuilder::new(name)
        .inputs(inputs.iter().cloned())
        .outputs(outputs.iter().cloned())
        .parameters(parameters.iter().cloned())
        .image(image)
        .command(command)
        .build()
}

#[cfg(test)]
mod tests {
    use pipestep_common::config::NamePolicy;
    use pipestep_common::types::ParameterValue;

    use super::*;
    use crate::artifact::Artifact;
    use crate::executor::Placeholder;

    fn scenario() -> ContainerComponentDef {
        create_container_component(
            "Trainer",
            &[InputSpec::required("data", ArtifactType::DATASET)],
            &[OutputSpec::new("model", ArtifactType::MODEL)],
            &[],
            "img",
            vec!["run".into()],
        )
        .expect("build")
    }

    fn data_channel(uri: &str) -> Argument {
        Channel::with_artifacts(
            ArtifactType::DATASET,
            vec![Artifact::empty(ArtifactType::DATASET).with_uri(uri)],
        )
        .expect("channel")
        .into()
    }

    #[test]
    fn optional_input_gets_default_channel() {
        let def = create_container_component(
            "Evaluator",
            &[
                InputSpec::required("examples", ArtifactType::EXAMPLES),
                InputSpec::optional("baseline", ArtifactType::MODEL),
            ],
            &[],
            &[],
            "img",
            vec![],
        )
        .expect("build");

        assert_eq!(def.spec().inputs().len(), 2);
        assert_eq!(def.default_inputs().len(), 1);
        let baseline = def.default_inputs().get("baseline").expect("default");
        assert_eq!(baseline.artifact_type(), &ArtifactType::MODEL);
        assert_eq!(baseline.artifacts(), &[Artifact::empty(ArtifactType::MODEL)]);
        assert!(!def.default_inputs().contains_key("examples"));
    }

    #[test]
    fn every_output_gets_default_channel() {
        let def = scenario();
        assert_eq!(
            def.spec().outputs().get("model"),
            Some(&ChannelParameter {
                artifact_type: ArtifactType::MODEL
            })
        );
        let model = def.default_outputs().get("model").expect("default");
        assert_eq!(model.artifacts().len(), 1);
        assert!(model.artifacts()[0].is_empty());
    }

    #[test]
    fn parameters_have_no_default() {
        let def = create_container_component(
            "Trainer",
            &[],
            &[],
            &[ParameterSpec::required("steps", ValueType::Int)],
            "img",
            vec![],
        )
        .expect("build");
        assert_eq!(
            def.spec().parameters().get("steps"),
            Some(&ExecutionParameter {
                value_type: ValueType::Int,
                optional: false
            })
        );
        assert!(def.default_inputs().is_empty());
        assert!(def.default_outputs().is_empty());
    }

    #[test]
    fn spec_and_executor_carry_name_image_and_command() {
        let def = scenario();
        assert_eq!(def.name(), "Trainer");
        assert_eq!(def.spec().name(), "TrainerSpec");
        assert_eq!(def.executor().image(), "img");
        assert_eq!(def.executor().command(), &[CommandLineArgument::from("run")]);
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        let def = create_container_component("", &[], &[], &[], "img", vec![]).expect("build");
        assert_eq!(def.name(), "Component");
        assert_eq!(def.spec().name(), "ComponentSpec");
    }

    #[test]
    fn scenario_instantiates_with_only_required_input() {
        let def = scenario();
        let mut args = Arguments::new();
        let _ = args.insert("data".into(), data_channel("gs://bucket/data"));

        let component = def.instantiate(args, None).expect("instantiate");
        assert_eq!(
            component.inputs().get("data").and_then(Channel::first_uri),
            Some("gs://bucket/data")
        );
        let model = component.outputs().get("model").expect("default output");
        assert_eq!(model.artifacts(), &[Artifact::empty(ArtifactType::MODEL)]);
    }

    #[test]
    fn scenario_without_required_input_fails() {
        let err = scenario().instantiate(Arguments::new(), None).unwrap_err();
        assert!(matches!(err, PipestepError::MissingArgument { ref name, .. } if name == "data"));
    }

    #[test]
    fn caller_arguments_override_defaults() {
        let def = create_container_component(
            "Evaluator",
            &[InputSpec::optional("baseline", ArtifactType::MODEL)],
            &[OutputSpec::new("evaluation", ArtifactType::MODEL_EVALUATION)],
            &[],
            "img",
            vec![],
        )
        .expect("build");

        let baseline = Channel::with_artifacts(
            ArtifactType::MODEL,
            vec![Artifact::empty(ArtifactType::MODEL).with_uri("/models/7")],
        )
        .expect("channel");
        let evaluation = Channel::with_artifacts(
            ArtifactType::MODEL_EVALUATION,
            vec![Artifact::empty(ArtifactType::MODEL_EVALUATION).with_uri("/evals/7")],
        )
        .expect("channel");
        let mut args = Arguments::new();
        let _ = args.insert("baseline".into(), baseline.clone().into());
        let _ = args.insert("evaluation".into(), evaluation.clone().into());

        let component = def.instantiate(args, Some("v7".into())).expect("instantiate");
        assert_eq!(component.inputs().get("baseline"), Some(&baseline));
        assert_eq!(component.outputs().get("evaluation"), Some(&evaluation));
        assert_eq!(component.id(), "Evaluator.v7");
    }

    #[test]
    fn no_arguments_succeeds_when_nothing_is_required() {
        let def = create_container_component(
            "Exporter",
            &[InputSpec::optional("model", ArtifactType::MODEL)],
            &[OutputSpec::new("pushed", ArtifactType::PUSHED_MODEL)],
            &[ParameterSpec::optional("dry_run", ValueType::Bool)],
            "img",
            vec![],
        )
        .expect("build");
        let component = def.instantiate(Arguments::new(), None).expect("instantiate");
        assert!(component.exec_properties().is_empty());
    }

    #[test]
    fn missing_required_parameter_fails_instantiation() {
        let def = create_container_component(
            "Trainer",
            &[],
            &[],
            &[ParameterSpec::required("steps", ValueType::Int)],
            "img",
            vec![],
        )
        .expect("build");
        assert!(def.instantiate(Arguments::new(), None).is_err());

        let mut args = Arguments::new();
        let _ = args.insert("steps".into(), ParameterValue::Int(100).into());
        let component = def.instantiate(args, None).expect("instantiate");
        assert_eq!(component.exec_properties().get("steps"), Some(&ParameterValue::Int(100)));
    }

    #[test]
    fn identical_calls_yield_equal_independent_definitions() {
        let a = scenario();
        let b = scenario();
        assert_eq!(a, b);
        assert!(!Arc::ptr_eq(&a.spec, &b.spec));
        assert!(!Arc::ptr_eq(&a.executor, &b.executor));

        let mut args = Arguments::new();
        let _ = args.insert("data".into(), data_channel("/d"));
        let ca = a.instantiate(args.clone(), None).expect("a");
        let cb = b.instantiate(args, None).expect("b");
        assert_eq!(ca, cb);
    }

    #[test]
    fn duplicate_input_name_fails() {
        let err = create_container_component(
            "Dup",
            &[
                InputSpec::required("data", ArtifactType::DATASET),
                InputSpec::optional("data", ArtifactType::DATASET),
            ],
            &[],
            &[],
            "img",
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, PipestepError::DuplicateName { category: "input", .. }));
    }

    #[test]
    fn input_and_output_sharing_name_fails() {
        let err = create_container_component(
            "Dup",
            &[InputSpec::required("model", ArtifactType::MODEL)],
            &[OutputSpec::new("model", ArtifactType::MODEL)],
            &[],
            "img",
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, PipestepError::DuplicateName { category: "argument", .. }));
    }

    #[test]
    fn builder_requires_image() {
        let err = ContainerComponentBuilder::new("NoImage").build().unwrap_err();
        assert!(err.to_string().contains("image is required"), "got: {err}");
    }

    #[test]
    fn validate_policy_rejects_bad_names() {
        let config = FactoryConfig {
            name_policy: NamePolicy::Validate,
            ..FactoryConfig::default()
        };
        let err = ContainerComponentBuilder::new("Trainer")
            .input(InputSpec::required("training-data", ArtifactType::DATASET))
            .image("img")
            .config(config)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, PipestepError::InvalidName { ref name, .. } if name == "training-data")
        );
    }

    #[test]
    fn sanitize_policy_rewrites_names() {
        let config = FactoryConfig {
            name_policy: NamePolicy::Sanitize,
            ..FactoryConfig::default()
        };
        let def = ContainerComponentBuilder::new("my trainer")
            .input(InputSpec::optional("training-data", ArtifactType::DATASET))
            .image("img")
            .config(config)
            .build()
            .expect("build");
        assert_eq!(def.name(), "my_trainer");
        assert!(def.spec().inputs().contains_key("training_data"));
        assert!(def.default_inputs().contains_key("training_data"));
    }

    #[test]
    fn sanitize_policy_renders_with_rewritten_names() {
        let config = FactoryConfig {
            name_policy: NamePolicy::Sanitize,
            ..FactoryConfig::default()
        };
        let def = ContainerComponentBuilder::new("Trainer")
            .input(InputSpec::required("training-data", ArtifactType::DATASET))
            .output(OutputSpec::new("trained model", ArtifactType::MODEL))
            .parameter(ParameterSpec::required("num-steps", ValueType::Int))
            .image("img")
            .command(vec![
                "train".into(),
                Placeholder::input_uri("training-data").into(),
                Placeholder::concat(vec![
                    CommandLineArgument::from("--out="),
                    Placeholder::output_uri("trained model").into(),
                ])
                .into(),
                Placeholder::input_value("num-steps").into(),
            ])
            .config(config)
            .build()
            .expect("build");
        def.check_placeholders().expect("placeholders follow sanitized names");

        let mut args = Arguments::new();
        let _ = args.insert("training_data".into(), data_channel("/d"));
        let _ = args.insert("num_steps".into(), ParameterValue::Int(3).into());
        let component = def.instantiate(args, None).expect("instantiate");
        assert_eq!(
            component.resolve_command().expect("render"),
            vec!["train", "/d", "--out=", "3"]
        );
    }

    #[test]
    fn check_placeholders_accepts_input_value_of_input() {
        let def = create_container_component(
            "Trainer",
            &[InputSpec::required("split", ArtifactType::FLOAT)],
            &[],
            &[],
            "img",
            vec![Placeholder::input_value("split").into()],
        )
        .expect("build");
        assert!(def.check_placeholders().is_ok());
    }

    #[test]
    fn check_placeholders_reports_undeclared_names() {
        let def = create_container_component(
            "Trainer",
            &[InputSpec::required("data", ArtifactType::DATASET)],
            &[OutputSpec::new("model", ArtifactType::MODEL)],
            &[],
            "img",
            vec![
                Placeholder::input_uri("data").into(),
                Placeholder::output_uri("model").into(),
            ],
        )
        .expect("build");
        assert!(def.check_placeholders().is_ok());

        let def = create_container_component(
            "Trainer",
            &[InputSpec::required("data", ArtifactType::DATASET)],
            &[],
            &[],
            "img",
            vec![Placeholder::output_uri("data").into()],
        )
        .expect("build");
        let err = def.check_placeholders().unwrap_err();
        assert!(err.to_string().contains("no output declared"), "got: {err}");
    }
}
