//! Foundation types for ConfigGuard.
//!
//! This crate provides the in-memory tree model that every other ConfigGuard
//! crate operates on: a configuration document parsed into a nested map of
//! string keys to values.
//!
//! # Key Types
//!
//! - [`ConfigValue`] — A node in the tree: scalar, list, or nested map
//! - [`Scalar`] — An atomic value (null, bool, int, float, string)
//! - [`ConfigMap`] — The map type used at every nesting level

pub mod value;

pub use value::{ConfigMap, ConfigValue, Scalar};
