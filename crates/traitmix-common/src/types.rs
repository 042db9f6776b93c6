//! Domain primitive types used across the traitmix workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified name of a trait component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a component ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Process-unique identity of a class definition.
///
/// Two definitions that happen to share a name still have distinct IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(uuid::Uuid);

impl ClassId {
    /// Generates a fresh class ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_class_ids_are_distinct() {
        assert_ne!(ClassId::generate(), ClassId::generate());
    }

    #[test]
    fn component_id_serializes_as_plain_string() {
        let id = ComponentId::new("Another::Trait");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"Another::Trait\"");
    }
}
