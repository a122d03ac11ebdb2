//! System-wide constants.

/// Name given to a component definition when the caller supplies an empty name.
pub const DEFAULT_COMPONENT_NAME: &str = "Component";

/// Suffix appended to the component name to form its spec definition name.
pub const SPEC_NAME_SUFFIX: &str = "Spec";

/// Separator between a component name and its instance name in component ids.
pub const INSTANCE_ID_SEPARATOR: char = '.';

/// Replacement character used when sanitizing names.
pub const SANITIZE_REPLACEMENT: char = '_';

/// Artifact property holding the payload of a scalar artifact.
pub const ARTIFACT_VALUE_PROPERTY: &str = "value";
