//! Component specifications: declared parameters, inputs, and outputs.
//!
//! A [`ComponentSpecDef`] describes what a component accepts. A
//! [`ComponentSpec`] is that definition bound to concrete arguments, and is
//! only constructible when every argument checks out against its declaration.

use std::collections::BTreeMap;
use std::sync::Arc;

use pipestep_common::error::{PipestepError, Result};
use pipestep_common::types::{ArtifactType, ParameterValue, ValueType};
use serde::Serialize;

use crate::channel::Channel;

/// Declares a typed input or output channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelParameter {
    /// Artifact type carried by the channel.
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
}

/// Declares a typed execution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionParameter {
    /// Scalar type of the parameter.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Whether the parameter may be omitted at instantiation.
    pub optional: bool,
}

/// An ordered name-to-declaration map that refuses repeated names.
#[derive(Debug, Clone)]
pub struct DeclarationMap<T> {
    category: &'static str,
    entries: BTreeMap<String, T>,
}

impl<T> DeclarationMap<T> {
    /// Creates an empty map for the given declaration category.
    #[must_use]
    pub const fn new(category: &'static str) -> Self {
        Self {
            category,
            entries: BTreeMap::new(),
        }
    }

    /// Adds a declaration.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::DuplicateName`] if `name` is already declared.
    pub fn declare(&mut self, name: String, declaration: T) -> Result<()> {
        if self.entries.contains_key(&name) {
            return Err(PipestepError::DuplicateName {
                name,
                category: self.category,
            });
        }
        let _ = self.entries.insert(name, declaration);
        Ok(())
    }

    /// Consumes the map, returning the declarations.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, T> {
        self.entries
    }
}

/// Specification definition: the declaration maps of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpecDef {
    name: String,
    parameters: BTreeMap<String, ExecutionParameter>,
    inputs: BTreeMap<String, ChannelParameter>,
    outputs: BTreeMap<String, ChannelParameter>,
}

impl ComponentSpecDef {
    /// Creates a specification definition from its three declaration maps.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::DuplicateName`] if a name is declared in more
    /// than one of the maps, since arguments share a single namespace.
    pub fn new(
        name: impl Into<String>,
        parameters: BTreeMap<String, ExecutionParameter>,
        inputs: BTreeMap<String, ChannelParameter>,
        outputs: BTreeMap<String, ChannelParameter>,
    ) -> Result<Self> {
        let mut seen = DeclarationMap::new("argument");
        for key in parameters.keys().chain(inputs.keys()).chain(outputs.keys()) {
            seen.declare(key.clone(), ())?;
        }
        Ok(Self {
            name: name.into(),
            parameters,
            inputs,
            outputs,
        })
    }

    /// Returns the definition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared execution parameters.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, ExecutionParameter> {
        &self.parameters
    }

    /// Returns the declared input channels.
    #[must_use]
    pub const fn inputs(&self) -> &BTreeMap<String, ChannelParameter> {
        &self.inputs
    }

    /// Returns the declared output channels.
    #[must_use]
    pub const fn outputs(&self) -> &BTreeMap<String, ChannelParameter> {
        &self.outputs
    }
}

/// A value bound to a component argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A channel, for inputs and outputs.
    Channel(Channel),
    /// A scalar, for execution parameters.
    Value(ParameterValue),
}

impl From<Channel> for Argument {
    fn from(channel: Channel) -> Self {
        Self::Channel(channel)
    }
}

impl From<ParameterValue> for Argument {
    fn from(value: ParameterValue) -> Self {
        Self::Value(value)
    }
}

/// Named arguments passed to a component at instantiation.
pub type Arguments = BTreeMap<String, Argument>;

/// A specification definition bound to checked arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    definition: Arc<ComponentSpecDef>,
    exec_properties: BTreeMap<String, ParameterValue>,
    inputs: BTreeMap<String, Channel>,
    outputs: BTreeMap<String, Channel>,
}

impl ComponentSpec {
    /// Binds arguments to a specification definition.
    ///
    /// Every argument must be declared. Channels must carry the declared
    /// artifact type and values must satisfy the declared scalar type. All
    /// inputs, all outputs, and every non-optional parameter must be bound.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::UnknownArgument`], [`PipestepError::ArgumentKind`],
    /// [`PipestepError::TypeMismatch`], or [`PipestepError::MissingArgument`].
    pub fn new(definition: Arc<ComponentSpecDef>, arguments: Arguments) -> Result<Self> {
        let mut exec_properties = BTreeMap::new();
        let mut inputs = BTreeMap::new();
        let mut outputs = BTreeMap::new();

        for (name, argument) in arguments {
            if let Some(param) = definition.parameters.get(&name) {
                let value = expect_value(&name, argument)?;
                if !value.satisfies(param.value_type) {
                    return Err(PipestepError::TypeMismatch {
                        name,
                        expected: param.value_type.to_string(),
                        actual: value.value_type().to_string(),
                    });
                }
                let _ = exec_properties.insert(name, value);
            } else if let Some(decl) = definition.inputs.get(&name) {
                let channel = expect_channel(&name, argument, decl)?;
                let _ = inputs.insert(name, channel);
            } else if let Some(decl) = definition.outputs.get(&name) {
                let channel = expect_channel(&name, argument, decl)?;
                let _ = outputs.insert(name, channel);
            } else {
                return Err(PipestepError::UnknownArgument {
                    component: definition.name.clone(),
                    name,
                });
            }
        }

        let missing = definition
            .parameters
            .iter()
            .filter(|(name, param)| !param.optional && !exec_properties.contains_key(*name))
            .map(|(name, _)| name)
            .chain(definition.inputs.keys().filter(|n| !inputs.contains_key(*n)))
            .chain(definition.outputs.keys().filter(|n| !outputs.contains_key(*n)))
            .next();
        if let Some(name) = missing {
            return Err(PipestepError::MissingArgument {
                component: definition.name.clone(),
                name: name.clone(),
            });
        }

        Ok(Self {
            definition,
            exec_properties,
            inputs,
            outputs,
        })
    }

    /// Returns the definition this spec was bound from.
    #[must_use]
    pub fn definition(&self) -> &ComponentSpecDef {
        &self.definition
    }

    /// Returns the bound execution parameter values.
    #[must_use]
    pub const fn exec_properties(&self) -> &BTreeMap<String, ParameterValue> {
        &self.exec_properties
    }

    /// Returns the bound input channels.
    #[must_use]
    pub const fn inputs(&self) -> &BTreeMap<String, Channel> {
        &self.inputs
    }

    /// Returns the bound output channels.
    #[must_use]
    pub const fn outputs(&self) -> &BTreeMap<String, Channel> {
        &self.outputs
    }
}

fn expect_value(name: &str, argument: Argument) -> Result<ParameterValue> {
    match argument {
        Argument::Value(value) => Ok(value),
        Argument::Channel(_) => Err(PipestepError::ArgumentKind {
            name: name.to_string(),
            expected: "value",
        }),
    }
}

fn expect_channel(name: &str, argument: Argument, decl: &ChannelParameter) -> Result<Channel> {
    let Argument::Channel(channel) = argument else {
        return Err(PipestepError::ArgumentKind {
            name: name.to_string(),
            expected: "channel",
        });
    };
    if channel.artifact_type() != &decl.artifact_type {
        return Err(PipestepError::TypeMismatch {
            name: name.to_string(),
            expected: decl.artifact_type.to_string(),
            actual: channel.artifact_type().to_string(),
        });
    }
    Ok(channel)
}
