//! # traitmix-sdk
//!
//! Public SDK for composing traits onto classes at runtime.
//!
//! Provides two main entry points:
//! - [`Composer`](composer::Composer): Resolves trait names against a base
//!   class and returns the cached composite (`with_traits`) or an instance
//!   of it (`new_with_traits`).
//! - [`InstanceBuilder`](builder::InstanceBuilder): Fluent API for
//!   collecting traits and constructor arguments before construction.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use traitmix_core::{AttributeDef, ClassDef, ComponentDef, ComponentRegistry};
//! use traitmix_sdk::composer::Composer;
//!
//! let registry = Arc::new(ComponentRegistry::new());
//! let _ = registry.register(ComponentDef::builder("Role").build());
//! let composer = Composer::new(registry);
//!
//! let class = ClassDef::builder("Class")
//!     .attribute(AttributeDef::new("foo"))
//!     .build();
//! let instance = composer
//!     .builder(&class)
//!     .trait_name("Role")
//!     .arg("foo", 42)
//!     .build()
//!     .expect("compose");
//! assert!(instance.isa("Class"));
//! assert!(instance.does("Role"));
//! ```

pub mod builder;
pub mod composer;

pub use builder::InstanceBuilder;
pub use composer::Composer;
