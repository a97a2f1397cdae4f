//! Construction options for a history.
//!
//! Options are fixed when an engine is built. They can be assembled in code
//! with [`OptionsBuilder`] or loaded from JSON host configuration.
//!
//! # Example
//!
//! ```rust
//! use undoable::options::HistoryOptions;
//!
//! let options = HistoryOptions::builder()
//!     .use_checkpoints(true)
//!     .max_capacity(50)
//!     .build()
//!     .unwrap();
//!
//! assert!(options.use_checkpoints);
//! assert_eq!(options.capacity(), Some(50));
//!
//! let loaded = HistoryOptions::from_json(r#"{ "maxCapacity": 50, "useCheckpoints": true }"#).unwrap();
//! assert_eq!(loaded, options);
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

pub mod error;

pub use error::ConfigError;

/// How a history records sets and how much past it keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryOptions {
    /// When true, only sets marked as checkpoints push onto the past.
    /// Unmarked sets replace the present in place.
    #[serde(alias = "useCheckpoints")]
    pub use_checkpoints: bool,

    /// Maximum number of past entries. `None` keeps everything.
    #[serde(alias = "maxCapacity")]
    pub max_capacity: Option<NonZeroUsize>,
}

impl HistoryOptions {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Parse options from a JSON document.
    ///
    /// Missing fields take their defaults. A capacity of `0` is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Capacity as a plain integer, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.max_capacity.map(NonZeroUsize::get)
    }
}

/// Builder for [`HistoryOptions`].
#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
    use_checkpoints: bool,
    max_capacity: Option<usize>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between always-checkpoint (false) and explicit-checkpoint (true).
    pub fn use_checkpoints(mut self, enabled: bool) -> Self {
        self.use_checkpoints = enabled;
        self
    }

    /// Bound the past to `n` entries.
    pub fn max_capacity(mut self, n: usize) -> Self {
        self.max_capacity = Some(n);
        self
    }

    /// Remove any capacity bound.
    pub fn unbounded(mut self) -> Self {
        self.max_capacity = None;
        self
    }

    /// Build the options.
    /// Returns an error if the capacity is zero.
    pub fn build(self) -> Result<HistoryOptions, ConfigError> {
        let max_capacity = match self.max_capacity {
            Some(n) => Some(NonZeroUsize::new(n).ok_or(ConfigError::ZeroCapacity)?),
            None => None,
        };

        Ok(HistoryOptions {
            use_checkpoints: self.use_checkpoints,
            max_capacity,
        })
    }
}
