//! Methods dispatched on instances.

use std::fmt;
use std::sync::Arc;

use traitmix_common::error::Result;

use crate::instance::Instance;
use crate::value::Value;

type MethodFn = dyn Fn(&Instance, &[Value]) -> Result<Value> + Send + Sync;

/// A shared callable bound into a class or component method table.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    /// Wraps a closure as a method.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(body))
    }

    /// A method that always returns `value`.
    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_, _| Ok(value.clone()))
    }

    /// A method that returns the named attribute, or null when unset.
    #[must_use]
    pub fn getter(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self::new(move |instance, _| {
            Ok(instance.get(&attribute).cloned().unwrap_or(Value::Null))
        })
    }

    /// Invokes the method on `instance`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the method body raises.
    pub fn invoke(&self, instance: &Instance, args: &[Value]) -> Result<Value> {
        (self.0)(instance, args)
    }

    /// Returns whether both handles share the same body.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}
