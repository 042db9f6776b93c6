//! Process-wide store of synthesized composite classes.
//!
//! Keys encode the base's identity and the exact component order, so
//! permutations of one trait list occupy distinct entries. Entries are never
//! evicted.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use traitmix_common::types::{ClassId, ComponentId};
use traitmix_core::ClassDef;

/// Identity of a composite: its base and its ordered, deduplicated components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    base: ClassId,
    components: Vec<ComponentId>,
}

impl CacheKey {
    /// Builds a key for `base` composed with `components` in order.
    #[must_use]
    pub fn new(base: &ClassDef, components: Vec<ComponentId>) -> Self {
        Self {
            base: base.id(),
            components,
        }
    }

    /// Identity of the base class.
    #[must_use]
    pub const fn base(&self) -> ClassId {
        self.base
    }

    /// Ordered component identifiers.
    #[must_use]
    pub fn components(&self) -> &[ComponentId] {
        &self.components
    }
}

/// Shared map from [`CacheKey`] to composite class.
///
/// Lookups take a read lock only; the write lock is held just long enough
/// to publish one finished composite.
#[derive(Debug, Default)]
pub struct SynthesisCache {
    entries: RwLock<HashMap<CacheKey, Arc<ClassDef>>>,
}

impl SynthesisCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the composite stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Arc<ClassDef>> {
        self.entries.read().get(key).cloned()
    }

    /// Stores `class` under `key` unless another composite got there first,
    /// and returns whichever composite now owns the key.
    pub fn publish(&self, key: CacheKey, class: Arc<ClassDef>) -> Arc<ClassDef> {
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert(class))
    }

    /// Number of cached composites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no composites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
