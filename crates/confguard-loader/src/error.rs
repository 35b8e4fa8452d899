//! Error types for document loading.

use std::path::PathBuf;

use crate::format::Format;

/// Errors produced while loading a configuration document.
///
/// All of these are deterministic, input-dependent failures; none warrant
/// a retry. Any of them aborts the comparison before it starts.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The requested source does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The source's extension is not one of the recognized set.
    #[error("unsupported format for {0}: expected .yaml, .yml, or .ini")]
    UnsupportedFormat(PathBuf),

    /// The source has a recognized format but does not parse into a tree.
    #[error("malformed {format} document: {reason}")]
    MalformedDocument { format: Format, reason: String },

    /// The source exists but could not be read.
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;

impl LoadError {
    pub(crate) fn malformed(format: Format, reason: impl Into<String>) -> Self {
        LoadError::MalformedDocument {
            format,
            reason: reason.into(),
        }
    }
}
