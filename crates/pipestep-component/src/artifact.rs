//! Typed artifacts exchanged between pipeline steps.

use std::collections::BTreeMap;

use pipestep_common::types::{ArtifactType, ParameterValue};
use serde::{Deserialize, Serialize};

/// A typed unit of data or metadata produced or consumed by a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Type of this artifact.
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    /// Location of the artifact payload. Empty until the orchestrator assigns one.
    #[serde(default)]
    pub uri: String,
    /// Custom properties attached to the artifact.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ParameterValue>,
}

impl Artifact {
    /// Creates an empty placeholder artifact of the given type.
    #[must_use]
    pub const fn empty(artifact_type: ArtifactType) -> Self {
        Self {
            artifact_type,
            uri: String::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Sets the artifact URI.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Attaches a custom property.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        let _ = self.properties.insert(key.into(), value.into());
        self
    }

    /// Whether this artifact is still an unassigned placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uri.is_empty() && self.properties.is_empty()
    }
}
