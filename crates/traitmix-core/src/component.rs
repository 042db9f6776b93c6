//! Trait components: reusable bundles of attributes and methods.
//!
//! A component never exists on its own at runtime. It is applied to a
//! base class by [`ClassDef::compose_with`](crate::class::ClassDef::compose_with),
//! which layers its attributes and methods over the base and checks that
//! every method it requires is provided.

use std::collections::BTreeMap;
use std::sync::Arc;

use traitmix_common::types::ComponentId;

use crate::attribute::AttributeDef;
use crate::method::Method;

/// A loadable trait definition.
#[derive(Debug)]
pub struct ComponentDef {
    id: ComponentId,
    attributes: Vec<AttributeDef>,
    methods: BTreeMap<String, Method>,
    requires: Vec<String>,
}

impl ComponentDef {
    /// Starts a builder for a component with the given fully-qualified name.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> ComponentBuilder {
        ComponentBuilder {
            id: ComponentId::new(id),
            attributes: Vec::new(),
            methods: BTreeMap::new(),
            requires: Vec::new(),
        }
    }

    /// Fully-qualified component identifier.
    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Attributes the component contributes.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }

    /// Methods the component contributes, by name.
    #[must_use]
    pub const fn methods(&self) -> &BTreeMap<String, Method> {
        &self.methods
    }

    /// Method names the target class must provide.
    #[must_use]
    pub fn requires(&self) -> &[String] {
        &self.requires
    }
}

/// Fluent builder for [`ComponentDef`].
#[derive(Debug)]
pub struct ComponentBuilder {
    id: ComponentId,
    attributes: Vec<AttributeDef>,
    methods: BTreeMap<String, Method>,
    requires: Vec<String>,
}

impl ComponentBuilder {
    /// Adds an attribute.
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds or replaces a method.
    #[must_use]
    pub fn method(mut self, name: impl Into<String>, method: Method) -> Self {
        let _ = self.methods.insert(name.into(), method);
        self
    }

    /// Declares a method the target class must provide.
    #[must_use]
    pub fn requires(mut self, method: impl Into<String>) -> Self {
        self.requires.push(method.into());
        self
    }

    /// Finishes the component.
    #[must_use]
    pub fn build(self) -> Arc<ComponentDef> {
        Arc::new(ComponentDef {
            id: self.id,
            attributes: self.attributes,
            methods: self.methods,
            requires: self.requires,
        })
    }
}
