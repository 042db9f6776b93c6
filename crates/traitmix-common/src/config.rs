//! Composition configuration model.

use serde::{Deserialize, Serialize};

use crate::constants::{ABSOLUTE_ESCAPE, NAMESPACE_SEPARATOR, TRAITS_KEY};
use crate::error::{Result, TraitmixError};

/// Settings that shape trait name resolution and argument extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Leading marker that makes a trait name absolute.
    pub absolute_escape: char,
    /// Separator between a namespace prefix and a relative trait name.
    pub namespace_separator: String,
    /// Constructor argument that carries the trait list.
    pub traits_key: String,
}

impl ComposeConfig {
    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::Config` if the separator or traits key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.namespace_separator.is_empty() {
            return Err(TraitmixError::Config {
                message: "namespace_separator must not be empty".into(),
            });
        }
        if self.traits_key.is_empty() {
            return Err(TraitmixError::Config {
                message: "traits_key must not be empty".into(),
            });
        }
        Ok(())
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            absolute_escape: ABSOLUTE_ESCAPE,
            namespace_separator: NAMESPACE_SEPARATOR.to_string(),
            traits_key: TRAITS_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ComposeConfig::default();
        assert_eq!(config.absolute_escape, '+');
        assert_eq!(config.namespace_separator, "::");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ComposeConfig =
            serde_json::from_str(r#"{"namespace_separator": "."}"#).expect("parse");
        assert_eq!(config.namespace_separator, ".");
        assert_eq!(config.traits_key, "traits");
    }

    #[test]
    fn empty_separator_is_rejected() {
        let config = ComposeConfig {
            namespace_separator: String::new(),
            ..ComposeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("namespace_separator"));
    }
}
