//! # traitmix-common
//!
//! Shared identifiers, error definitions, configuration models, and constants
//! used across the entire traitmix workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the primitives that the object system, the
//! composer, and the CLI build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
