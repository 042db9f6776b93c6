//! Composite class synthesis.
//!
//! [`Synthesizer::compose`] deduplicates the requested components, consults
//! the shared [`SynthesisCache`], and on a miss loads every component and
//! builds the composite outside any lock. Publication is a double-checked
//! insert: when two callers race on one key, the later publisher drops its
//! composite and returns the winner's.

use std::collections::HashSet;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use traitmix_common::constants::{COMPOSITE_DIGEST_LEN, COMPOSITE_MARKER, NAMESPACE_SEPARATOR};
use traitmix_common::error::{Result, TraitmixError};
use traitmix_common::types::ComponentId;
use traitmix_core::{ClassDef, ComponentDef, ComponentLoader, Instance};

use crate::args::ConstructorArgs;
use crate::cache::{CacheKey, SynthesisCache};

/// Builds and caches composite classes.
#[derive(Clone)]
pub struct Synthesizer {
    cache: Arc<SynthesisCache>,
    loader: Arc<dyn ComponentLoader>,
    separator: String,
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("cached", &self.cache.len())
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl Synthesizer {
    /// Creates a synthesizer over a shared cache and component loader.
    /// Composite names use the default namespace separator.
    #[must_use]
    pub fn new(cache: Arc<SynthesisCache>, loader: Arc<dyn ComponentLoader>) -> Self {
        Self {
            cache,
            loader,
            separator: NAMESPACE_SEPARATOR.to_string(),
        }
    }

    /// Uses `separator` between the parts of composite names.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The cache this synthesizer publishes into.
    #[must_use]
    pub const fn cache(&self) -> &Arc<SynthesisCache> {
        &self.cache
    }

    /// Returns `base` composed with `components` applied in order.
    ///
    /// An empty list returns `base` itself. Repeated identifiers keep their
    /// first position. Requests with the same base and the same deduplicated
    /// order return the same composite object.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::UnknownComponent` if a component cannot be
    /// loaded, or `TraitmixError::MissingRequirement` if a component's
    /// requirements are not met. The cache is unchanged on error.
    pub fn compose(&self, base: &Arc<ClassDef>, components: &[ComponentId]) -> Result<Arc<ClassDef>> {
        if components.is_empty() {
            return Ok(Arc::clone(base));
        }

        let ordered = dedup_ordered(components);
        let key = CacheKey::new(base, ordered);

        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(class = hit.name(), "composite cache hit");
            return Ok(hit);
        }

        let loaded = key
            .components()
            .iter()
            .map(|id| self.loader.load(id))
            .collect::<Result<Vec<Arc<ComponentDef>>>>()?;
        let name = composite_name(base, key.components(), &self.separator);
        let built = ClassDef::compose_with(base, name, loaded)?;

        let published = self.cache.publish(key, Arc::clone(&built));
        if Arc::ptr_eq(&published, &built) {
            tracing::info!(
                class = published.name(),
                base = base.name(),
                components = published.components().len(),
                "synthesized composite class"
            );
        } else {
            tracing::debug!(class = published.name(), "lost synthesis race, using published composite");
        }
        Ok(published)
    }

    /// Composes `base` with `components`, then constructs an instance from
    /// `args`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`compose`](Self::compose),
    /// `TraitmixError::NoConstructor` if the composite cannot be constructed,
    /// and the object system's validation errors unchanged.
    pub fn compose_and_build(
        &self,
        base: &Arc<ClassDef>,
        components: &[ComponentId],
        args: &ConstructorArgs,
    ) -> Result<Instance> {
        let class = self.compose(base, components)?;
        if !class.has_constructor() {
            return Err(TraitmixError::NoConstructor {
                class: class.name().to_string(),
            });
        }
        class.construct(args.as_map())
    }
}

/// Drops repeated identifiers, keeping each at its first position.
#[must_use]
pub fn dedup_ordered(components: &[ComponentId]) -> Vec<ComponentId> {
    let mut seen = HashSet::with_capacity(components.len());
    components
        .iter()
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

/// Deterministic name for `base` composed with `components` in order:
/// `{base}{separator}__COMPOSITE__{separator}{digest}`.
#[must_use]
pub fn composite_name(base: &ClassDef, components: &[ComponentId], separator: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(base.name().as_bytes());
    for id in components {
        hasher.update([0u8]);
        hasher.update(id.as_str().as_bytes());
    }
    let digest = format!("{:x}", hasher.finalize());
    let short = digest.get(..COMPOSITE_DIGEST_LEN).unwrap_or(digest.as_str());
    format!(
        "{base}{separator}{COMPOSITE_MARKER}{separator}{short}",
        base = base.name(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;
    use traitmix_core::{AttributeDef, ComponentRegistry, Method, ValueKind};

    use super::*;

    /// Loader that counts how many components it has handed out.
    struct CountingLoader {
        inner: ComponentRegistry,
        loads: AtomicUsize,
    }

    impl ComponentLoader for CountingLoader {
        fn load(&self, id: &ComponentId) -> Result<Arc<ComponentDef>> {
            let _ = self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(id)
        }
    }

    fn registry() -> ComponentRegistry {
        let registry = ComponentRegistry::new();
        let _ = registry.register(
            ComponentDef::builder("A")
                .method("who", Method::constant("a"))
                .build(),
        );
        let _ = registry.register(
            ComponentDef::builder("B")
                .method("who", Method::constant("b"))
                .build(),
        );
        let _ = registry.register(
            ComponentDef::builder("Role")
                .attribute(AttributeDef::new("level").kind(ValueKind::Int).default_value(1))
                .build(),
        );
        registry
    }

    fn synthesizer() -> Synthesizer {
        Synthesizer::new(Arc::new(SynthesisCache::new()), Arc::new(registry()))
    }

    fn ids(names: &[&str]) -> Vec<ComponentId> {
        names.iter().copied().map(ComponentId::new).collect()
    }

    fn base() -> Arc<ClassDef> {
        ClassDef::builder("Class")
            .attribute(AttributeDef::new("foo").kind(ValueKind::Int).required())
            .method("who", Method::constant("base"))
            .build()
    }

    #[test]
    fn empty_list_returns_base_without_caching() {
        let synth = synthesizer();
        let base = base();
        let composed = synth.compose(&base, &[]).expect("compose");
        assert!(Arc::ptr_eq(&composed, &base));
        assert!(synth.cache().is_empty());
    }

    #[test]
    fn repeated_compose_returns_same_object() {
        let synth = synthesizer();
        let base = base();
        let first = synth.compose(&base, &ids(&["A", "B"])).expect("first");
        let second = synth.compose(&base, &ids(&["A", "B"])).expect("second");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(synth.cache().len(), 1);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let synth = synthesizer();
        let base = base();
        let with_dupes = synth.compose(&base, &ids(&["A", "B", "A"])).expect("dupes");
        let plain = synth.compose(&base, &ids(&["A", "B"])).expect("plain");
        assert!(Arc::ptr_eq(&with_dupes, &plain));
        assert_eq!(with_dupes.component_ids(), [&ComponentId::new("A"), &ComponentId::new("B")]);
    }

    #[test]
    fn order_changes_the_composite() {
        let synth = synthesizer();
        let base = base();
        let ab = synth.compose(&base, &ids(&["A", "B"])).expect("ab");
        let ba = synth.compose(&base, &ids(&["B", "A"])).expect("ba");
        assert!(!Arc::ptr_eq(&ab, &ba));
        assert_ne!(ab.name(), ba.name());

        let args = ConstructorArgs::new().with("foo", 1);
        let from_ab = ab.construct(args.as_map()).expect("ab instance");
        let from_ba = ba.construct(args.as_map()).expect("ba instance");
        assert_eq!(from_ab.call("who", &[]).expect("who"), json!("b"));
        assert_eq!(from_ba.call("who", &[]).expect("who"), json!("a"));
    }

    #[test]
    fn unknown_component_leaves_cache_untouched() {
        let synth = synthesizer();
        let err = synth.compose(&base(), &ids(&["A", "Nope"])).unwrap_err();
        assert!(matches!(err, TraitmixError::UnknownComponent { ref id } if id == "Nope"));
        assert!(synth.cache().is_empty());
    }

    #[test]
    fn composite_name_is_deterministic() {
        let base = base();
        let one = composite_name(&base, &ids(&["A", "B"]), "::");
        let two = composite_name(&base, &ids(&["A", "B"]), "::");
        assert_eq!(one, two);
        assert!(one.starts_with("Class::__COMPOSITE__::"));
        assert_eq!(one.len(), "Class::__COMPOSITE__::".len() + COMPOSITE_DIGEST_LEN);
        assert_ne!(one, composite_name(&base, &ids(&["AB"]), "::"));
    }

    #[test]
    fn composite_name_uses_configured_separator() {
        let synth = Synthesizer::new(Arc::new(SynthesisCache::new()), Arc::new(registry()))
            .with_separator(".");
        let composed = synth.compose(&base(), &ids(&["A"])).expect("compose");
        assert!(composed.name().starts_with("Class.__COMPOSITE__."));
        assert!(!composed.name().contains("::"));
    }

    #[test]
    fn compose_and_build_forwards_arguments() {
        let synth = synthesizer();
        let base = base();
        let args = ConstructorArgs::new().with("foo", 42);
        let instance = synth
            .compose_and_build(&base, &ids(&["Role"]), &args)
            .expect("build");
        assert!(instance.isa("Class"));
        assert!(instance.does("Role"));
        assert_eq!(instance.get("foo"), Some(&json!(42)));
        assert_eq!(instance.get("level"), Some(&json!(1)));
    }

    #[test]
    fn compose_and_build_propagates_validation_errors() {
        let synth = synthesizer();
        let err = synth
            .compose_and_build(&base(), &ids(&["Role"]), &ConstructorArgs::new())
            .unwrap_err();
        assert!(matches!(err, TraitmixError::MissingArgument { ref attribute, .. } if attribute == "foo"));
        assert_eq!(synth.cache().len(), 1);
    }

    #[test]
    fn compose_and_build_requires_constructor() {
        let synth = synthesizer();
        let abstract_base = ClassDef::builder("Abstract").abstract_class().build();
        let err = synth
            .compose_and_build(&abstract_base, &ids(&["A"]), &ConstructorArgs::new())
            .unwrap_err();
        assert!(matches!(err, TraitmixError::NoConstructor { .. }));
    }

    #[test]
    fn concurrent_compose_publishes_one_composite() {
        let loader = Arc::new(CountingLoader {
            inner: registry(),
            loads: AtomicUsize::new(0),
        });
        let synth = Synthesizer::new(Arc::new(SynthesisCache::new()), loader.clone());
        let base = base();
        let request = ids(&["A", "B"]);

        let results: Vec<Arc<ClassDef>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| synth.compose(&base, &request).expect("compose")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("join"))
                .collect()
        });

        let first = &results[0];
        assert!(results.iter().all(|r| Arc::ptr_eq(r, first)));
        assert_eq!(synth.cache().len(), 1);
        assert!(loader.loads.load(Ordering::SeqCst) >= 2);

        let after = loader.loads.load(Ordering::SeqCst);
        let _ = synth.compose(&base, &request).expect("hit");
        assert_eq!(loader.loads.load(Ordering::SeqCst), after);
    }

    #[test]
    fn composing_a_composite_stacks_components() {
        let synth = synthesizer();
        let base = base();
        let inner = synth.compose(&base, &ids(&["A"])).expect("inner");
        let outer = synth.compose(&inner, &ids(&["Role"])).expect("outer");
        assert!(outer.does("A"));
        assert!(outer.does("Role"));
        assert!(outer.isa("Class"));
        assert_eq!(synth.cache().len(), 2);
    }
}
