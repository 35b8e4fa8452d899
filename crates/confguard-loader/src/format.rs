//! The recognized document formats.

use std::fmt;
use std::path::Path;

/// A configuration document format.
///
/// Callers that receive content without a filename pass the format
/// explicitly; [`Format::from_path`] covers the common
/// detect-from-extension case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Ini,
}

impl Format {
    /// Detect the format from a path's extension (case-insensitive).
    /// Recognizes `yaml`, `yml`, and `ini`; anything else is `None`.
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "ini" => Some(Format::Ini),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "YAML"),
            Format::Ini => write!(f, "INI"),
        }
    }
}
