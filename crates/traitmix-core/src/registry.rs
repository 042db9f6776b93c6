//! Name-indexed stores for classes and loadable components.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use traitmix_common::error::{Result, TraitmixError};
use traitmix_common::types::ComponentId;

use crate::class::ClassDef;
use crate::component::ComponentDef;

/// Maps a fully-qualified component identifier to its definition.
pub trait ComponentLoader: Send + Sync {
    /// Loads the component named `id`.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::UnknownComponent` if nothing is registered
    /// under `id`.
    fn load(&self, id: &ComponentId) -> Result<Arc<ComponentDef>>;
}

/// In-memory component store.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: RwLock<HashMap<ComponentId, Arc<ComponentDef>>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under its own identifier, returning any
    /// definition it replaced.
    pub fn register(&self, component: Arc<ComponentDef>) -> Option<Arc<ComponentDef>> {
        tracing::debug!(component = %component.id(), "registering component");
        self.components
            .write()
            .insert(component.id().clone(), component)
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.read().len()
    }

    /// Whether no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.read().is_empty()
    }
}

impl ComponentLoader for ComponentRegistry {
    fn load(&self, id: &ComponentId) -> Result<Arc<ComponentDef>> {
        self.components
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| TraitmixError::UnknownComponent { id: id.to_string() })
    }
}

/// In-memory class store keyed by class name.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: RwLock<HashMap<String, Arc<ClassDef>>>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class under its name, returning any definition it replaced.
    pub fn register(&self, class: Arc<ClassDef>) -> Option<Arc<ClassDef>> {
        tracing::debug!(class = class.name(), "registering class");
        self.classes.write().insert(class.name().to_string(), class)
    }

    /// Looks up a class by name.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::UnknownClass` if no class has that name.
    pub fn get(&self, name: &str) -> Result<Arc<ClassDef>> {
        self.classes
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| TraitmixError::UnknownClass {
                name: name.to_string(),
            })
    }

    /// Registered class names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.read().keys().cloned().collect();
        names.sort();
        names
    }
}
