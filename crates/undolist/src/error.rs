#![forbid(unsafe_code)]

//! Error types for list access and configuration loading.

use thiserror::Error;

/// Errors surfaced by indexed list operations.
///
/// This is the only recoverable failure of the list itself. An empty undo
/// log, a search that finds nothing, or clearing an empty list are normal
/// outcomes and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index violated the precondition of `op`.
    #[error("{op}: index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Name of the rejecting operation (e.g. `"insert_before"`).
        op: &'static str,
        /// The offending index.
        index: usize,
        /// Live length at the time of the call.
        len: usize,
    },
}

impl ListError {
    /// The offending index.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::IndexOutOfRange { index, .. } => *index,
        }
    }

    /// Name of the operation that rejected the index.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { op, .. } => op,
        }
    }
}

/// Result alias for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors from loading or validating a [`ListConfig`](crate::ListConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "config-file")]
    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "config-file")]
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
