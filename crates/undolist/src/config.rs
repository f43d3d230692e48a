#![forbid(unsafe_code)]

//! Construction-time configuration for [`StringList`](crate::StringList).
//!
//! With the `config-file` feature the config can be loaded from TOML or
//! JSON; every missing field falls back to its default. An absent (or JSON
//! `null`) `max_undo_depth` means unlimited history.
//!
//! ```toml
//! initial_capacity = 32
//! log_initial_capacity = 8
//! max_undo_depth = 1000
//! ```

#[cfg(feature = "config-file")]
use std::path::Path;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::DEFAULT_CAPACITY;
use crate::undo_log::DEFAULT_LOG_CAPACITY;

/// Capacities and history limits for a list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct ListConfig {
    /// Slots reserved by the backing store at construction.
    pub initial_capacity: usize,
    /// Slots reserved by the undo log at construction.
    pub log_initial_capacity: usize,
    /// Maximum number of undo records; the oldest is evicted past this.
    /// `None` keeps every record.
    #[cfg_attr(
        feature = "config-file",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub max_undo_depth: Option<usize>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            log_initial_capacity: DEFAULT_LOG_CAPACITY,
            max_undo_depth: None,
        }
    }
}

impl ListConfig {
    /// Create a configuration with custom capacities and unlimited history.
    #[must_use]
    pub fn new(initial_capacity: usize, log_initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            log_initial_capacity,
            max_undo_depth: None,
        }
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_log_initial_capacity(mut self, capacity: usize) -> Self {
        self.log_initial_capacity = capacity;
        self
    }

    /// Bound the undo history to `depth` records.
    #[must_use]
    pub fn with_max_undo_depth(mut self, depth: usize) -> Self {
        self.max_undo_depth = Some(depth);
        self
    }

    /// Default capacities, unbounded history.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Validate all parameters.
    ///
    /// Returns a list of problems; empty means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.initial_capacity == 0 {
            errors.push("initial_capacity must be at least 1".to_string());
        }
        if self.log_initial_capacity == 0 {
            errors.push("log_initial_capacity must be at least 1".to_string());
        }
        if self.max_undo_depth == Some(0) {
            errors.push("max_undo_depth must be at least 1".to_string());
        }
        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}
