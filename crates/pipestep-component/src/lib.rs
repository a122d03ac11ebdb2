//! # pipestep-component
//!
//! Builds reusable pipeline components that wrap a containerized executable.
//!
//! Handles:
//! - **Factory**: Turns input/output/parameter descriptors, an image, and a
//!   command line into a component definition.
//! - **Spec**: Declaration maps and argument binding.
//! - **Channel** / **Artifact**: Typed artifact containers passed between steps.
//! - **Executor**: Container image plus a command-line template with placeholders.
//! - **Component**: A definition instantiated with concrete arguments.
//! - **Manifest**: YAML files describing a component.

pub mod artifact;
pub mod channel;
pub mod component;
pub mod executor;
pub mod factory;
pub mod manifest;
pub mod naming;
pub mod spec;
