//! Unified error type for the traitmix workspace.
//!
//! Composition errors and object-system validation errors share one enum so
//! that validation failures raised while constructing an instance reach the
//! caller of `compose_and_build` unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TraitmixError {
    /// A trait name was empty after resolution, or was not a string.
    #[error("invalid trait identifier: {raw:?}")]
    InvalidIdentifier {
        /// The raw identifier as supplied by the caller.
        raw: String,
    },

    /// A trait name did not resolve to a loadable component.
    #[error("unknown component: {id}")]
    UnknownComponent {
        /// Fully-qualified component identifier.
        id: String,
    },

    /// No class is registered under a name.
    #[error("unknown class: {name}")]
    UnknownClass {
        /// Requested class name.
        name: String,
    },

    /// A class exposes no construction entry point.
    #[error("class {class} has no constructor")]
    NoConstructor {
        /// Name of the class.
        class: String,
    },

    /// A required constructor argument was not supplied.
    #[error("attribute ({attribute}) is required by {class}")]
    MissingArgument {
        /// Name of the class being constructed.
        class: String,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// A constructor argument has the wrong kind.
    #[error("attribute ({attribute}) of {class} expects {expected}, got {found}")]
    TypeMismatch {
        /// Name of the class being constructed.
        class: String,
        /// Name of the offending attribute.
        attribute: String,
        /// Expected value kind.
        expected: String,
        /// Kind actually supplied.
        found: String,
    },

    /// A component requires a method the composite does not provide.
    #[error("component {component} requires method {method}, which {class} does not provide")]
    MissingRequirement {
        /// Component declaring the requirement.
        component: String,
        /// Required method name.
        method: String,
        /// Class the component was applied to.
        class: String,
    },

    /// A method was invoked that the class does not define.
    #[error("can't locate method {method} via class {class}")]
    NoSuchMethod {
        /// Name of the class searched.
        class: String,
        /// Method name.
        method: String,
    },

    /// Constructor arguments were not a key/value map.
    #[error("invalid constructor arguments: {message}")]
    InvalidArguments {
        /// Description of the problem.
        message: String,
    },

    /// A configuration value is invalid.
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

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// YAML deserialization failed.
    #[error("yaml error: {source}")]
    Yaml {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TraitmixError>;
