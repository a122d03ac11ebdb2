//! Container executor descriptor and command-line templates.
//!
//! A command line is a sequence of literal tokens interleaved with
//! placeholders. Placeholders name a parameter, input, or output of the
//! component and are substituted when the command is rendered.

use std::fmt;

use pipestep_common::error::Result;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A single command-line token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandLineArgument {
    /// Passed through unchanged. Numbers and booleans in a manifest are
    /// read as their textual form.
    Literal(#[serde(deserialize_with = "scalar_token")] String),
    /// Substituted at render time.
    Placeholder(Placeholder),
}

/// A marker resolved against a component's bound arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placeholder {
    /// Value of an execution parameter, or else the `value` property of the
    /// first artifact of an input channel.
    InputValue(String),
    /// URI of the first artifact of an input channel.
    InputUri(String),
    /// URI of the first artifact of an output channel.
    OutputUri(String),
    /// Concatenation of several tokens into one.
    Concat(Vec<CommandLineArgument>),
}

/// What a placeholder refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlaceholderKind {
    /// An execution parameter.
    InputValue,
    /// An input channel.
    InputUri,
    /// An output channel.
    OutputUri,
}

impl Placeholder {
    /// Placeholder for a parameter value.
    #[must_use]
    pub fn input_value(name: impl Into<String>) -> Self {
        Self::InputValue(name.into())
    }

    /// Placeholder for an input artifact URI.
    #[must_use]
    pub fn input_uri(name: impl Into<String>) -> Self {
        Self::InputUri(name.into())
    }

    /// Placeholder for an output artifact URI.
    #[must_use]
    pub fn output_uri(name: impl Into<String>) -> Self {
        Self::OutputUri(name.into())
    }

    /// Placeholder joining several tokens without separators.
    #[must_use]
    pub fn concat<I, A>(parts: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<CommandLineArgument>,
    {
        Self::Concat(parts.into_iter().map(Into::into).collect())
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<(PlaceholderKind, &'a str)>) {
        match self {
            Self::InputValue(name) => out.push((PlaceholderKind::InputValue, name.as_str())),
            Self::InputUri(name) => out.push((PlaceholderKind::InputUri, name.as_str())),
            Self::OutputUri(name) => out.push((PlaceholderKind::OutputUri, name.as_str())),
            Self::Concat(parts) => {
                for part in parts {
                    if let CommandLineArgument::Placeholder(inner) = part {
                        inner.collect_names(out);
                    }
                }
            }
        }
    }

    fn rename(self, rename: &impl Fn(PlaceholderKind, &str) -> Option<String>) -> Self {
        let renamed = |kind: PlaceholderKind, name: String| rename(kind, &name).unwrap_or(name);
        match self {
            Self::InputValue(name) => Self::InputValue(renamed(PlaceholderKind::InputValue, name)),
            Self::InputUri(name) => Self::InputUri(renamed(PlaceholderKind::InputUri, name)),
            Self::OutputUri(name) => Self::OutputUri(renamed(PlaceholderKind::OutputUri, name)),
            Self::Concat(parts) => Self::Concat(
                parts
                    .into_iter()
                    .map(|part| part.rename_placeholders(rename))
                    .collect(),
            ),
        }
    }

    fn resolve(&self, resolver: &impl PlaceholderResolver) -> Result<String> {
        match self {
            Self::InputValue(name) => resolver.input_value(name),
            Self::InputUri(name) => resolver.input_uri(name),
            Self::OutputUri(name) => resolver.output_uri(name),
            Self::Concat(parts) => parts.iter().map(|p| p.resolve(resolver)).collect(),
        }
    }
}

impl CommandLineArgument {
    /// Rewrites placeholder names, including those nested in concatenations.
    ///
    /// `rename` returns the new name, or `None` to keep the current one.
    #[must_use]
    pub fn rename_placeholders(
        self,
        rename: &impl Fn(PlaceholderKind, &str) -> Option<String>,
    ) -> Self {
        match self {
            Self::Literal(_) => self,
            Self::Placeholder(p) => Self::Placeholder(p.rename(rename)),
        }
    }

    fn resolve(&self, resolver: &impl PlaceholderResolver) -> Result<String> {
        match self {
            Self::Literal(s) => Ok(s.clone()),
            Self::Placeholder(p) => p.resolve(resolver),
        }
    }
}

impl From<&str> for CommandLineArgument {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for CommandLineArgument {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<Placeholder> for CommandLineArgument {
    fn from(p: Placeholder) -> Self {
        Self::Placeholder(p)
    }
}

fn scalar_token<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarToken;

    impl Visitor<'_> for ScalarToken {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number, or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarToken)
}

/// Supplies concrete values for placeholders.
pub trait PlaceholderResolver {
    /// Renders the value of the named execution parameter or scalar input.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing with this name is bound, or the input
    /// carries no value.
    fn input_value(&self, name: &str) -> Result<String>;

    /// Renders the URI of the named input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is unknown or carries no artifact.
    fn input_uri(&self, name: &str) -> Result<String>;

    /// Renders the URI of the named output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output is unknown or carries no artifact.
    fn output_uri(&self, name: &str) -> Result<String>;
}

/// Executor descriptor: run `command` inside a container built from `image`.
///
/// The command is not executed within a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatedExecutorContainerSpec {
    image: String,
    command: Vec<CommandLineArgument>,
}

impl TemplatedExecutorContainerSpec {
    /// Creates an executor descriptor.
    #[must_use]
    pub fn new(image: impl Into<String>, command: Vec<CommandLineArgument>) -> Self {
        Self {
            image: image.into(),
            command,
        }
    }

    /// Returns the container image reference.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the command-line template.
    #[must_use]
    pub fn command(&self) -> &[CommandLineArgument] {
        &self.command
    }

    /// Lists every placeholder in the template, including those nested in
    /// concatenations, in order of appearance.
    #[must_use]
    pub fn placeholder_names(&self) -> Vec<(PlaceholderKind, &str)> {
        let mut out = Vec::new();
        for arg in &self.command {
            if let CommandLineArgument::Placeholder(p) = arg {
                p.collect_names(&mut out);
            }
        }
        out
    }

    /// Renders the command line, one string per token.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `resolver`.
    pub fn render(&self, resolver: &impl PlaceholderResolver) -> Result<Vec<String>> {
        self.command.iter().map(|arg| arg.resolve(resolver)).collect()
    }
}
