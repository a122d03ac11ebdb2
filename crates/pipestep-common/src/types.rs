//! Domain primitive types used across the pipestep workspace.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PipestepError, Result};

/// Opaque artifact type token, e.g. `Dataset` or `Model`.
///
/// Two artifact types are the same type when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactType(Cow<'static, str>);

impl ArtifactType {
    /// Training or evaluation examples.
    pub const EXAMPLES: Self = Self::from_static("Examples");
    /// Generic dataset.
    pub const DATASET: Self = Self::from_static("Dataset");
    /// Trained model.
    pub const MODEL: Self = Self::from_static("Model");
    /// Data schema.
    pub const SCHEMA: Self = Self::from_static("Schema");
    /// Dataset statistics.
    pub const STATISTICS: Self = Self::from_static("ExampleStatistics");
    /// Model evaluation results.
    pub const MODEL_EVALUATION: Self = Self::from_static("ModelEvaluation");
    /// Model that passed validation and was pushed to a serving location.
    pub const PUSHED_MODEL: Self = Self::from_static("PushedModel");
    /// Artifact wrapping a single string value.
    pub const STRING: Self = Self::from_static("String");
    /// Artifact wrapping a single integer value.
    pub const INTEGER: Self = Self::from_static("Integer");
    /// Artifact wrapping a single float value.
    pub const FLOAT: Self = Self::from_static("Float");

    /// Creates an artifact type from a static name.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an artifact type from any name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scalar type of an execution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// 64-bit signed integer.
    #[serde(alias = "integer")]
    Int,
    /// 64-bit float.
    Float,
    /// UTF-8 string.
    #[serde(alias = "str", alias = "text")]
    String,
    /// Boolean flag.
    #[serde(alias = "boolean")]
    Bool,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
        }
    }
}

/// A concrete execution parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
}

impl ParameterValue {
    /// Returns the scalar type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
        }
    }

    /// Whether this value may be bound to a parameter of type `ty`.
    ///
    /// Integers are accepted where floats are declared.
    #[must_use]
    pub fn satisfies(&self, ty: ValueType) -> bool {
        let actual = self.value_type();
        actual == ty || (actual == ValueType::Int && ty == ValueType::Float)
    }

    /// Parses a raw string into a value of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`PipestepError::TypeMismatch`] if `raw` is not a valid
    /// literal of type `ty`.
    pub fn parse(name: &str, ty: ValueType, raw: &str) -> Result<Self> {
        let mismatch = || PipestepError::TypeMismatch {
            name: name.to_string(),
            expected: ty.to_string(),
            actual: format!("\"{raw}\""),
        };
        match ty {
            ValueType::Int => raw.parse().map(Self::Int).map_err(|_| mismatch()),
            ValueType::Float => raw.parse().map(Self::Float).map_err(|_| mismatch()),
            ValueType::Bool => raw.parse().map(Self::Bool).map_err(|_| mismatch()),
            ValueType::String => Ok(Self::String(raw.to_string())),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}
