//! # traitmix-core
//!
//! The object system that composed classes are built on.
//!
//! This crate provides:
//! - **Values**: dynamically typed attribute values and their kinds.
//! - **Attributes**: declared, optionally required and defaulted fields.
//! - **Methods**: shared callables dispatched on an instance.
//! - **Components**: reusable trait bundles of attributes, methods, and requirements.
//! - **Classes**: definitions with inheritance, namespace settings, method lookup,
//!   and the composition primitive that layers components over a base.
//! - **Instances**: validated, allocated objects of a class.
//! - **Registries**: name-indexed stores of classes and loadable components.

pub mod attribute;
pub mod class;
pub mod component;
pub mod instance;
pub mod method;
pub mod registry;
pub mod value;

pub use attribute::AttributeDef;
pub use class::{ClassBuilder, ClassDef, Namespace};
pub use component::{ComponentBuilder, ComponentDef};
pub use instance::Instance;
pub use method::Method;
pub use registry::{ClassRegistry, ComponentLoader, ComponentRegistry};
pub use value::{Value, ValueKind};
