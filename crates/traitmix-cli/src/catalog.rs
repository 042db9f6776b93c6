//! Catalog files: class and trait definitions loaded from YAML or JSON.
//!
//! ```yaml
//! config:
//!   namespace_separator: "::"
//! classes:
//!   - name: Another::Class
//!     namespace: Another
//!     attributes:
//!       - { name: foo, kind: int, required: true }
//!     methods:
//!       foo: { get: foo }
//! traits:
//!   - name: Another::Trait
//!     requires: [foo]
//!     methods:
//!       greet: { const: "hello" }
//! ```
//!
//! Classes are registered in file order, so a parent must appear before
//! its children. An empty `namespace` clears an inherited prefix.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use traitmix_common::config::ComposeConfig;
use traitmix_common::error::{Result, TraitmixError};
use traitmix_core::{
    AttributeDef, ClassDef, ClassRegistry, ComponentDef, ComponentRegistry, Method, Value,
};

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Composition settings.
    #[serde(default)]
    pub config: ComposeConfig,
    /// Class definitions, parents first.
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
    /// Trait definitions.
    #[serde(default)]
    pub traits: Vec<TraitSpec>,
}

/// A class entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassSpec {
    /// Class name.
    pub name: String,
    /// Parent class name.
    #[serde(default)]
    pub parent: Option<String>,
    /// Namespace prefix; empty clears an inherited one.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Attributes.
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    /// Methods.
    #[serde(default)]
    pub methods: BTreeMap<String, MethodSpec>,
    /// Whether instances can be constructed.
    #[serde(default = "default_true")]
    pub constructible: bool,
}

/// A trait entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraitSpec {
    /// Fully-qualified trait name.
    pub name: String,
    /// Attributes.
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    /// Methods.
    #[serde(default)]
    pub methods: BTreeMap<String, MethodSpec>,
    /// Method names the target class must provide.
    #[serde(default)]
    pub requires: Vec<String>,
}

/// A method body expressible in a catalog file: exactly one of `const`
/// or `get`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    /// Always returns this value.
    #[serde(default, rename = "const")]
    pub constant: Option<Value>,
    /// Returns the named attribute.
    #[serde(default)]
    pub get: Option<String>,
}

impl MethodSpec {
    fn to_method(&self, owner: &str, name: &str) -> Result<Method> {
        match (&self.constant, &self.get) {
            (Some(value), None) => Ok(Method::constant(value.clone())),
            (None, Some(attribute)) => Ok(Method::getter(attribute.clone())),
            _ => Err(TraitmixError::Config {
                message: format!("method {name} of {owner} must set exactly one of const or get"),
            }),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// A loaded catalog, ready for composition.
#[derive(Debug)]
pub struct Catalog {
    /// Composition settings.
    pub config: ComposeConfig,
    /// Classes by name.
    pub classes: ClassRegistry,
    /// Loadable traits.
    pub components: Arc<ComponentRegistry>,
}

impl Catalog {
    /// Reads and builds a catalog. `.json` files are parsed as JSON,
    /// anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a class
    /// names an undefined parent.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading catalog");
        let content = std::fs::read_to_string(path).map_err(|e| TraitmixError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: CatalogFile = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Self::build(file)
    }

    /// Registers every class and trait of `file`.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::Config` for an invalid `config` section and
    /// `TraitmixError::UnknownClass` for an undefined parent.
    pub fn build(file: CatalogFile) -> Result<Self> {
        file.config.validate()?;

        let components = ComponentRegistry::new();
        for spec in file.traits {
            let mut builder = ComponentDef::builder(spec.name.clone());
            for attr in spec.attributes {
                builder = builder.attribute(attr);
            }
            for (name, method) in &spec.methods {
                builder = builder.method(name.clone(), method.to_method(&spec.name, name)?);
            }
            for required in spec.requires {
                builder = builder.requires(required);
            }
            let _ = components.register(builder.build());
        }

        let classes = ClassRegistry::new();
        for spec in file.classes {
            let mut builder = ClassDef::builder(spec.name.clone());
            if let Some(parent) = &spec.parent {
                builder = builder.parent(classes.get(parent)?);
            }
            if let Some(prefix) = spec.namespace {
                builder = builder.namespace_prefix(prefix);
            }
            for attr in spec.attributes {
                builder = builder.attribute(attr);
            }
            for (name, method) in &spec.methods {
                builder = builder.method(name.clone(), method.to_method(&spec.name, name)?);
            }
            if !spec.constructible {
                builder = builder.abstract_class();
            }
            let _ = classes.register(builder.build());
        }

        tracing::debug!(
            classes = classes.names().len(),
            traits = components.len(),
            "catalog built"
        );
        Ok(Self {
            config: file.config,
            classes,
            components: Arc::new(components),
        })
    }
}
