//! # traitmix-compose
//!
//! Turns a base class and a list of trait names into a composite class.
//!
//! Handles:
//! - **Resolver**: Namespace-prefixing of relative trait names and the
//!   absolute escape that bypasses it.
//! - **Cache**: Process-wide store of synthesized composites, one per
//!   (base, ordered trait list).
//! - **Synthesizer**: Deduplication, component loading, composite
//!   construction, and the compose-then-construct entry point.
//! - **Args**: Constructor argument bags and extraction of the reserved
//!   `traits` key.

pub mod args;
pub mod cache;
pub mod resolver;
pub mod synthesizer;

pub use args::ConstructorArgs;
pub use cache::{CacheKey, SynthesisCache};
pub use resolver::TraitResolver;
pub use synthesizer::Synthesizer;
