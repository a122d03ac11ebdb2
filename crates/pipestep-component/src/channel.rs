//! Typed channels carrying artifacts between pipeline steps.

use pipestep_common::error::{PipestepError, Result};
use pipestep_common::types::ArtifactType;
use serde::Serialize;

use crate::artifact::Artifact;

/// A typed container of zero or more artifacts.
///
/// Every artifact in a channel has the channel's type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    #[serde(rename = "type")]
    artifact_type: ArtifactType,
    artifacts: Vec<Artifact>,
}

impl Channel {
    /// Creates a channel of the given type with no artifacts.
    #[must_use]
    pub const fn new(artifact_type: ArtifactType) -> Self {
        Self {
            artifact_type,
            artifacts: Vec::new(),
        }
    }

    /// Creates a channel holding the given artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::TypeMismatch`] if any artifact's type differs
    /// from `artifact_type`.
    pub fn with_artifacts(artifact_type: ArtifactType, artifacts: Vec<Artifact>) -> Result<Self> {
        if let Some(stray) = artifacts
            .iter()
            .find(|a| a.artifact_type != artifact_type)
        {
            return Err(PipestepError::TypeMismatch {
                name: stray.uri.clone(),
                expected: artifact_type.to_string(),
                actual: stray.artifact_type.to_string(),
            });
        }
        Ok(Self {
            artifact_type,
            artifacts,
        })
    }

    /// Creates a channel holding a single empty artifact of the given type.
    ///
    /// This is the default bound to optional inputs and to every output.
    #[must_use]
    pub fn with_empty_artifact(artifact_type: ArtifactType) -> Self {
        let artifact = Artifact::empty(artifact_type.clone());
        Self {
            artifact_type,
            artifacts: vec![artifact],
        }
    }

    /// Returns the channel type.
    #[must_use]
    pub const fn artifact_type(&self) -> &ArtifactType {
        &self.artifact_type
    }

    /// Returns the artifacts in this channel.
    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Returns the URI of the first artifact, if any.
    #[must_use]
    pub fn first_uri(&self) -> Option<&str> {
        self.artifacts.first().map(|a| a.uri.as_str())
    }
}
