//! Declared attributes of classes and components.

use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueKind};

/// An attribute slot filled at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Attribute name, also its constructor argument key.
    pub name: String,
    /// Kind of value accepted.
    #[serde(default)]
    pub kind: ValueKind,
    /// Whether construction fails when the argument is absent.
    #[serde(default)]
    pub required: bool,
    /// Value used when the argument is absent.
    #[serde(default)]
    pub default: Option<Value>,
}

impl AttributeDef {
    /// Creates an optional attribute accepting any value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ValueKind::Any,
            required: false,
            default: None,
        }
    }

    /// Restricts the accepted value kind.
    #[must_use]
    pub const fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the attribute as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}
