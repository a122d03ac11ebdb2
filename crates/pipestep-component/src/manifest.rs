//! YAML component manifests.
//!
//! A manifest declares a container component in a file:
//!
//! ```yaml
//! name: Trainer
//! image: gcr.io/my-project/my-trainer
//! command:
//!   - python3
//!   - --training_data_uri
//!   - inputUri: training_data
//!   - --model_uri
//!   - outputUri: model
//! inputs:
//!   - { name: training_data, type: Dataset }
//! outputs:
//!   - { name: model, type: Model }
//! parameters:
//!   - { name: num_training_steps, type: int, optional: true }
//! ```

use std::path::Path;

use pipestep_common::config::FactoryConfig;
use pipestep_common::error::{PipestepError, Result};
use serde::{Deserialize, Serialize};

use crate::executor::CommandLineArgument;
use crate::factory::{
    ContainerComponentBuilder, ContainerComponentDef, InputSpec, OutputSpec, ParameterSpec,
};

/// On-disk description of a container component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentManifest {
    /// Component name. Empty selects the configured default name.
    #[serde(default)]
    pub name: String,
    /// Container image reference.
    pub image: String,
    /// Container entrypoint command line.
    #[serde(default)]
    pub command: Vec<CommandLineArgument>,
    /// Input descriptors.
    #[serde(default)]
    pub inputs: Vec<InputSpec>,
    /// Output descriptors.
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
    /// Parameter descriptors.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl ComponentManifest {
    /// Parses a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::Manifest`] if the text is not a valid manifest.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::Io`] if the file cannot be read, or
    /// [`PipestepError::Manifest`] if it is not a valid manifest.
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading component manifest");
        let content = std::fs::read_to_string(path).map_err(|e| PipestepError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Runs the factory on this manifest.
    ///
    /// # Errors
    ///
    /// Returns any error raised by [`ContainerComponentBuilder::build`].
    pub fn into_definition(self, config: FactoryConfig) -> Result<ContainerComponentDef> {
        ContainerComponentBuilder::new(self.name)
            .inputs(self.inputs)
            .outputs(self.outputs)
            .parameters(self.parameters)
            .image(self.image)
            .command(self.command)
            .config(config)
            .build()
    }
}
