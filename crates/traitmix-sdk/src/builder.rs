//! Fluent API for collecting traits and constructor arguments.

use std::sync::Arc;

use traitmix_common::error::{Result, TraitmixError};
use traitmix_compose::ConstructorArgs;
use traitmix_core::{ClassDef, Instance, Value};

use crate::composer::Composer;

/// Builder for an instance of a base class with traits applied.
#[derive(Debug)]
pub struct InstanceBuilder<'a> {
    composer: &'a Composer,
    base: Arc<ClassDef>,
    traits: Vec<String>,
    args: ConstructorArgs,
    invalid: Option<TraitmixError>,
}

impl<'a> InstanceBuilder<'a> {
    pub(crate) fn new(composer: &'a Composer, base: Arc<ClassDef>) -> Self {
        Self {
            composer,
            base,
            traits: Vec::new(),
            args: ConstructorArgs::new(),
            invalid: None,
        }
    }

    /// Appends one trait name.
    #[must_use]
    pub fn trait_name(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    /// Appends several trait names in order.
    #[must_use]
    pub fn traits<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets one constructor argument. Under the traits key the value is
    /// taken as trait names and appended after those already collected; a
    /// value of the wrong shape is reported by [`build`](Self::build).
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key == self.composer.config().traits_key {
            let mut single = ConstructorArgs::new().with(key.as_str(), value);
            self.collect_traits(&mut single);
        } else {
            self.args.insert(key, value);
        }
        self
    }

    /// Merges a configuration bundle into the arguments. A traits entry in
    /// the bundle is appended after the traits collected so far.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidArguments` if `bundle` is not an object.
    pub fn bundle(mut self, bundle: Value) -> Result<Self> {
        let mut incoming = ConstructorArgs::from_bundle(bundle)?;
        self.collect_traits(&mut incoming);
        self.args.extend(incoming);
        Ok(self)
    }

    fn collect_traits(&mut self, args: &mut ConstructorArgs) {
        match args.take_traits(&self.composer.config().traits_key) {
            Ok(names) => self.traits.extend(names),
            Err(err) => {
                let _ = self.invalid.get_or_insert(err);
            }
        }
    }

    /// Composes and constructs the instance.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidIdentifier` if a traits value passed to
    /// [`arg`](Self::arg) or [`bundle`](Self::bundle) was not a name or list
    /// of names, and otherwise any error from [`Composer::new_with_traits`].
    pub fn build(self) -> Result<Instance> {
        let Self {
            composer,
            base,
            traits,
            mut args,
            invalid,
        } = self;
        if let Some(err) = invalid {
            return Err(err);
        }
        args.insert(composer.config().traits_key.clone(), traits);
        composer.new_with_traits(&base, args)
    }
}
