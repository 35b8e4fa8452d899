//! Document loading for ConfigGuard.
//!
//! Turns a YAML or INI source into the [`ConfigMap`](confguard_types::ConfigMap)
//! tree the diff engine consumes. The format is an explicit input
//! ([`Format`]), never sniffed from content; [`load_path`] offers the
//! conventional extension-based detection for callers that start from a
//! file path.
//!
//! A load either produces a complete tree or fails with a [`LoadError`].
//! A malformed file is never silently substituted with an empty tree --
//! that would make it indistinguishable from a genuinely empty config.

pub mod error;
pub mod format;
mod ini;
mod load;
mod yaml;

pub use error::{LoadError, LoadResult};
pub use format::Format;
pub use load::{load_path, parse_str, MAX_DEPTH};
