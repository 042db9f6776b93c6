//! Trait name resolution.
//!
//! Relative names are qualified with the base class's namespace prefix.
//! Names starting with the absolute escape are taken verbatim after the
//! escape is stripped.

use traitmix_common::config::ComposeConfig;
use traitmix_common::error::{Result, TraitmixError};
use traitmix_common::types::ComponentId;
use traitmix_core::ClassDef;

/// Resolves raw trait names against a base class.
#[derive(Debug, Clone)]
pub struct TraitResolver {
    escape: char,
    separator: String,
}

impl TraitResolver {
    /// Creates a resolver using the escape and separator from `config`.
    #[must_use]
    pub fn new(config: &ComposeConfig) -> Self {
        Self {
            escape: config.absolute_escape,
            separator: config.namespace_separator.clone(),
        }
    }

    /// Resolves every raw name in caller order. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidIdentifier` if any name is empty or
    /// resolves to the empty string.
    pub fn resolve<S: AsRef<str>>(&self, base: &ClassDef, raw: &[S]) -> Result<Vec<ComponentId>> {
        let prefix = base.namespace_prefix();
        let resolved = raw
            .iter()
            .map(|name| self.resolve_one(prefix, name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(base = base.name(), ?prefix, count = resolved.len(), "resolved traits");
        Ok(resolved)
    }

    /// Resolves a single raw name under an optional prefix.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidIdentifier` if `raw` is empty or
    /// consists only of the escape.
    pub fn resolve_one(&self, prefix: Option<&str>, raw: &str) -> Result<ComponentId> {
        let invalid = || TraitmixError::InvalidIdentifier {
            raw: raw.to_string(),
        };
        if raw.is_empty() {
            return Err(invalid());
        }
        if let Some(absolute) = raw.strip_prefix(self.escape) {
            if absolute.is_empty() {
                return Err(invalid());
            }
            return Ok(ComponentId::new(absolute));
        }
        Ok(match prefix.filter(|prefix| !prefix.is_empty()) {
            Some(prefix) => ComponentId::new(format!("{prefix}{}{raw}", self.separator)),
            None => ComponentId::new(raw),
        })
    }
}

impl Default for TraitResolver {
    fn default() -> Self {
        Self::new(&ComposeConfig::default())
    }
}
