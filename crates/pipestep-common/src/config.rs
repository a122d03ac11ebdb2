//! Configuration model for the component factory.

use serde::{Deserialize, Serialize};

/// How the factory treats component and declaration names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Use names exactly as given, without any validation.
    #[default]
    Verbatim,
    /// Reject names that are not identifiers (`[A-Za-z_][A-Za-z0-9_]*`).
    Validate,
    /// Rewrite names into identifiers by replacing invalid characters.
    Sanitize,
}

/// Root configuration for the component factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Policy applied to the component name and every declaration name.
    pub name_policy: NamePolicy,
    /// Name used when the caller passes an empty component name.
    pub default_component_name: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            name_policy: NamePolicy::default(),
            default_component_name: crate::constants::DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}
