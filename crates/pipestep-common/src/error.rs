//! Unified error types for the pipestep workspace.
//!
//! The factory itself performs almost no validation; most of these variants
//! are raised by the declaration maps and by spec instantiation.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PipestepError {
    /// A component or declaration name was rejected by the name policy.
    #[error("invalid name \"{name}\": {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// A name was declared more than once.
    #[error("duplicate {category} name: \"{name}\"")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Declaration category (`input`, `output`, `parameter`, or `argument`).
        category: &'static str,
    },

    /// An argument was supplied that the component spec does not declare.
    #[error("{component} has no argument named \"{name}\"")]
    UnknownArgument {
        /// Spec definition name.
        component: String,
        /// The undeclared argument name.
        name: String,
    },

    /// A required argument was not supplied.
    #[error("{component} is missing required argument \"{name}\"")]
    MissingArgument {
        /// Spec definition name.
        component: String,
        /// The missing argument name.
        name: String,
    },

    /// An argument was supplied with the wrong type.
    #[error("argument \"{name}\" expects type {expected}, got {actual}")]
    TypeMismatch {
        /// Argument name.
        name: String,
        /// Declared type.
        expected: String,
        /// Supplied type.
        actual: String,
    },

    /// A channel was supplied where a value is expected, or the reverse.
    #[error("argument \"{name}\" expects a {expected}")]
    ArgumentKind {
        /// Argument name.
        name: String,
        /// Expected argument kind (`channel` or `value`).
        expected: &'static str,
    },

    /// A command-line placeholder could not be resolved.
    #[error("cannot resolve placeholder \"{name}\": {reason}")]
    UnresolvedPlaceholder {
        /// Name referenced by the placeholder.
        name: String,
        /// Why resolution failed.
        reason: String,
    },

    /// A configuration or manifest value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A component manifest could not be parsed.
    #[error("invalid component manifest: {source}")]
    Manifest {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PipestepError>;
