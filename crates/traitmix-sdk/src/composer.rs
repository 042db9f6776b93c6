//! Trait composition entry points.

use std::sync::Arc;

use traitmix_common::config::ComposeConfig;
use traitmix_common::error::Result;
use traitmix_common::types::ComponentId;
use traitmix_compose::{ConstructorArgs, SynthesisCache, Synthesizer, TraitResolver};
use traitmix_core::{ClassDef, ComponentLoader, Instance};

use crate::builder::InstanceBuilder;

/// Resolves, composes, and instantiates classes with traits.
///
/// A process normally creates one composer and shares it; every clone of
/// its synthesizer publishes into the same cache.
#[derive(Debug, Clone)]
pub struct Composer {
    config: ComposeConfig,
    resolver: TraitResolver,
    synthesizer: Synthesizer,
}

impl Composer {
    /// Creates a composer with default configuration and a fresh cache.
    #[must_use]
    pub fn new(loader: Arc<dyn ComponentLoader>) -> Self {
        let config = ComposeConfig::default();
        Self {
            resolver: TraitResolver::new(&config),
            synthesizer: Synthesizer::new(Arc::new(SynthesisCache::new()), loader)
                .with_separator(config.namespace_separator.as_str()),
            config,
        }
    }

    /// Creates a composer from explicit configuration and a shared cache.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::Config` if `config` is invalid.
    pub fn with_config(
        config: ComposeConfig,
        cache: Arc<SynthesisCache>,
        loader: Arc<dyn ComponentLoader>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            resolver: TraitResolver::new(&config),
            synthesizer: Synthesizer::new(cache, loader)
                .with_separator(config.namespace_separator.as_str()),
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Underlying synthesizer.
    #[must_use]
    pub const fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Number of composites synthesized so far.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.synthesizer.cache().len()
    }

    /// Resolves raw trait names against `base`.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidIdentifier` for an empty name.
    pub fn resolve<S: AsRef<str>>(&self, base: &ClassDef, raw: &[S]) -> Result<Vec<ComponentId>> {
        self.resolver.resolve(base, raw)
    }

    /// Returns `base` with the named traits applied. No traits returns
    /// `base` itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier`, `UnknownComponent`, or
    /// `MissingRequirement`.
    pub fn with_traits<S: AsRef<str>>(&self, base: &Arc<ClassDef>, raw: &[S]) -> Result<Arc<ClassDef>> {
        let ids = self.resolver.resolve(base, raw)?;
        self.synthesizer.compose(base, &ids)
    }

    /// Extracts the reserved traits argument from `args`, composes, and
    /// constructs an instance from the remaining arguments.
    ///
    /// # Errors
    ///
    /// Returns any composition error, `NoConstructor`, and the object
    /// system's validation errors unchanged.
    pub fn new_with_traits(&self, base: &Arc<ClassDef>, mut args: ConstructorArgs) -> Result<Instance> {
        let raw = args.take_traits(&self.config.traits_key)?;
        tracing::debug!(base = base.name(), traits = ?raw, "new_with_traits");
        let ids = self.resolver.resolve(base, raw.as_slice())?;
        self.synthesizer.compose_and_build(base, &ids, &args)
    }

    /// Starts a fluent builder for an instance of `base`.
    #[must_use]
    pub fn builder(&self, base: &Arc<ClassDef>) -> InstanceBuilder<'_> {
        InstanceBuilder::new(self, Arc::clone(base))
    }
}
