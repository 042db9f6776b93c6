//! Constructed objects.

use std::collections::BTreeMap;
use std::sync::Arc;

use traitmix_common::error::{Result, TraitmixError};

use crate::class::ClassDef;
use crate::value::Value;

/// An object allocated by [`ClassDef::construct`].
#[derive(Debug, Clone)]
pub struct Instance {
    class: Arc<ClassDef>,
    fields: BTreeMap<String, Value>,
}

impl Instance {
    pub(crate) const fn new(class: Arc<ClassDef>, fields: BTreeMap<String, Value>) -> Self {
        Self { class, fields }
    }

    /// The class this instance was constructed from.
    #[must_use]
    pub const fn class(&self) -> &Arc<ClassDef> {
        &self.class
    }

    /// Returns the value of an attribute, if set.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.fields.get(attribute)
    }

    /// All set attributes.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Whether the instance's class is, or inherits from, `class`.
    #[must_use]
    pub fn isa(&self, class: &str) -> bool {
        self.class.isa(class)
    }

    /// Whether the instance's class has the component `id` applied.
    #[must_use]
    pub fn does(&self, id: &str) -> bool {
        self.class.does(id)
    }

    /// Whether the instance's class responds to `method`.
    #[must_use]
    pub fn can(&self, method: &str) -> bool {
        self.class.find_method(method).is_some()
    }

    /// Invokes `method` with `args`.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::NoSuchMethod` if no class in the linearization
    /// defines `method`, or whatever the method body raises.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        let body = self
            .class
            .find_method(method)
            .ok_or_else(|| TraitmixError::NoSuchMethod {
                class: self.class.name().to_string(),
                method: method.to_string(),
            })?;
        body.invoke(self, args)
    }

    /// Renders the instance as `{"class": .., "fields": {..}}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let fields: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::json!({
            "class": self.class.name(),
            "fields": fields,
        })
    }
}

/// Instances are equal when they share a class object and hold equal fields.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.class, &other.class) && self.fields == other.fields
    }
}
