//! Class definitions, inheritance, and the composition primitive.
//!
//! A class owns an attribute list and a method table and may have a single
//! parent. Lookups walk the parent chain, so a class sees everything its
//! ancestors define unless it overrides it. A composite is an ordinary class
//! whose parent is the base it was composed from and whose own tables are
//! the flattened contributions of its components.

use std::collections::BTreeMap;
use std::sync::Arc;

use traitmix_common::error::{Result, TraitmixError};
use traitmix_common::types::{ClassId, ComponentId};

use crate::attribute::AttributeDef;
use crate::component::ComponentDef;
use crate::instance::Instance;
use crate::method::Method;
use crate::value::{Value, ValueKind};

/// Namespace prefix setting of a class.
///
/// The prefix is inherited from the parent unless the class overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Namespace {
    /// Use whatever the parent declares.
    #[default]
    Inherit,
    /// Prepend this prefix to relative trait names.
    Prefix(String),
    /// No prefix, even if an ancestor declares one.
    Unset,
}

/// A class definition.
#[derive(Debug)]
pub struct ClassDef {
    id: ClassId,
    name: String,
    parent: Option<Arc<ClassDef>>,
    namespace: Namespace,
    attributes: Vec<AttributeDef>,
    methods: BTreeMap<String, Method>,
    constructible: bool,
    components: Vec<Arc<ComponentDef>>,
}

impl ClassDef {
    /// Starts a builder for a class with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            parent: None,
            namespace: Namespace::Inherit,
            attributes: Vec::new(),
            methods: BTreeMap::new(),
            constructible: true,
        }
    }

    /// Process-unique identity of this definition.
    #[must_use]
    pub const fn id(&self) -> ClassId {
        self.id
    }

    /// Class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent class, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// The class's own namespace setting.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Effective namespace prefix after inheritance.
    #[must_use]
    pub fn namespace_prefix(&self) -> Option<&str> {
        match &self.namespace {
            Namespace::Prefix(prefix) => Some(prefix.as_str()),
            Namespace::Unset => None,
            Namespace::Inherit => self.parent.as_deref().and_then(Self::namespace_prefix),
        }
    }

    /// Components applied directly to this class, in application order.
    #[must_use]
    pub fn components(&self) -> &[Arc<ComponentDef>] {
        &self.components
    }

    /// Identifiers of the components applied directly to this class.
    #[must_use]
    pub fn component_ids(&self) -> Vec<&ComponentId> {
        self.components.iter().map(|c| c.id()).collect()
    }

    /// Whether this class was produced by composition.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        !self.components.is_empty()
    }

    /// Whether instances can be constructed.
    #[must_use]
    pub const fn has_constructor(&self) -> bool {
        self.constructible
    }

    /// Whether this class is, or inherits from, the class named `name`.
    #[must_use]
    pub fn isa(&self, name: &str) -> bool {
        self.name == name || self.parent.as_deref().is_some_and(|p| p.isa(name))
    }

    /// Whether the component `id` was applied to this class or an ancestor.
    #[must_use]
    pub fn does(&self, id: &str) -> bool {
        self.components.iter().any(|c| c.id().as_str() == id)
            || self.parent.as_deref().is_some_and(|p| p.does(id))
    }

    /// Finds a method on this class or the nearest ancestor defining it.
    #[must_use]
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods
            .get(name)
            .or_else(|| self.parent.as_deref().and_then(|p| p.find_method(name)))
    }

    /// All method names visible on this class, sorted.
    #[must_use]
    pub fn method_names(&self) -> Vec<String> {
        let mut names = self
            .parent
            .as_deref()
            .map(Self::method_names)
            .unwrap_or_default();
        names.extend(self.methods.keys().cloned());
        names.sort();
        names.dedup();
        names
    }

    /// Effective attributes, ancestors first; a redeclared name replaces the
    /// inherited slot in place.
    #[must_use]
    pub fn attribute_set(&self) -> Vec<AttributeDef> {
        let mut set = self
            .parent
            .as_deref()
            .map(Self::attribute_set)
            .unwrap_or_default();
        for attr in &self.attributes {
            if let Some(slot) = set.iter_mut().find(|a| a.name == attr.name) {
                *slot = attr.clone();
            } else {
                set.push(attr.clone());
            }
        }
        set
    }

    /// Lookup precedence, highest first: the class, its components from
    /// last applied to first, then the parent's linearization.
    #[must_use]
    pub fn linearization(&self) -> Vec<String> {
        let mut order = vec![self.name.clone()];
        order.extend(self.components.iter().rev().map(|c| c.id().to_string()));
        if let Some(parent) = &self.parent {
            order.extend(parent.linearization());
        }
        order
    }

    /// Builds a class named `name` that inherits from `base` and applies
    /// `components` in order. Later components override earlier ones and
    /// the base.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::MissingRequirement` if a component requires a
    /// method the composite does not provide.
    pub fn compose_with(
        base: &Arc<Self>,
        name: impl Into<String>,
        components: Vec<Arc<ComponentDef>>,
    ) -> Result<Arc<Self>> {
        let mut attributes: Vec<AttributeDef> = Vec::new();
        let mut methods = BTreeMap::new();
        for component in &components {
            for attr in component.attributes() {
                if let Some(slot) = attributes.iter_mut().find(|a| a.name == attr.name) {
                    *slot = attr.clone();
                } else {
                    attributes.push(attr.clone());
                }
            }
            for (method_name, method) in component.methods() {
                let _ = methods.insert(method_name.clone(), method.clone());
            }
        }

        let composite = Self {
            id: ClassId::generate(),
            name: name.into(),
            parent: Some(Arc::clone(base)),
            namespace: Namespace::Inherit,
            attributes,
            methods,
            constructible: base.constructible,
            components,
        };

        for component in &composite.components {
            for required in component.requires() {
                if composite.find_method(required).is_none() {
                    return Err(TraitmixError::MissingRequirement {
                        component: component.id().to_string(),
                        method: required.clone(),
                        class: base.name.clone(),
                    });
                }
            }
        }

        Ok(Arc::new(composite))
    }

    /// Validates `args` against the attribute set and allocates an instance.
    ///
    /// Arguments that match no attribute are ignored.
    ///
    /// # Errors
    ///
    /// Returns `NoConstructor` for a class without a construction entry
    /// point, `MissingArgument` for an absent required attribute, and
    /// `TypeMismatch` for a value of the wrong kind.
    pub fn construct(self: &Arc<Self>, args: &serde_json::Map<String, Value>) -> Result<Instance> {
        if !self.constructible {
            return Err(TraitmixError::NoConstructor {
                class: self.name.clone(),
            });
        }

        let mut fields = BTreeMap::new();
        for attr in self.attribute_set() {
            let value = match args.get(&attr.name).or(attr.default.as_ref()) {
                Some(value) => value.clone(),
                None if attr.required => {
                    return Err(TraitmixError::MissingArgument {
                        class: self.name.clone(),
                        attribute: attr.name,
                    });
                }
                None => continue,
            };
            if !attr.kind.accepts(&value) {
                return Err(TraitmixError::TypeMismatch {
                    class: self.name.clone(),
                    attribute: attr.name,
                    expected: attr.kind.to_string(),
                    found: ValueKind::describe(&value).to_string(),
                });
            }
            let _ = fields.insert(attr.name, value);
        }

        tracing::trace!(class = %self.name, fields = fields.len(), "constructed instance");
        Ok(Instance::new(Arc::clone(self), fields))
    }
}

/// Fluent builder for [`ClassDef`].
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parent: Option<Arc<ClassDef>>,
    namespace: Namespace,
    attributes: Vec<AttributeDef>,
    methods: BTreeMap<String, Method>,
    constructible: bool,
}

impl ClassBuilder {
    /// Sets the parent class.
    #[must_use]
    pub fn parent(mut self, parent: Arc<ClassDef>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the namespace setting. An empty prefix is the same as
    /// [`Namespace::Unset`].
    #[must_use]
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = match namespace {
            Namespace::Prefix(prefix) if prefix.is_empty() => Namespace::Unset,
            other => other,
        };
        self
    }

    /// Shorthand for `namespace(Namespace::Prefix(prefix))`.
    #[must_use]
    pub fn namespace_prefix(self, prefix: impl Into<String>) -> Self {
        self.namespace(Namespace::Prefix(prefix.into()))
    }

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

    /// Marks the class as having no construction entry point.
    #[must_use]
    pub const fn abstract_class(mut self) -> Self {
        self.constructible = false;
        self
    }

    /// Finishes the class.
    #[must_use]
    pub fn build(self) -> Arc<ClassDef> {
        Arc::new(ClassDef {
            id: ClassId::generate(),
            name: self.name,
            parent: self.parent,
            namespace: self.namespace,
            attributes: self.attributes,
            methods: self.methods,
            constructible: self.constructible,
            components: Vec::new(),
        })
    }
}
