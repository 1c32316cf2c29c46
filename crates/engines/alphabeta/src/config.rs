//! Search configuration, loadable from TOML.
//!
//! ```toml
//! use_transposition_table = true
//! use_quiescence = true
//! use_move_ordering = true
//! tt_capacity = 262144
//! replacement = "depth-preferred"   # or "always"
//! quiescence_max_ply = 32
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tt::Replacement;

/// Default number of transposition table slots.
pub const DEFAULT_TT_CAPACITY: usize = 1 << 18;

/// Default ceiling on quiescence recursion.
pub const DEFAULT_QUIESCENCE_MAX_PLY: u8 = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read search config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("transposition table capacity must be at least one entry")]
    ZeroCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub use_transposition_table: bool,
    pub use_quiescence: bool,
    /// MVV-LVA capture ordering
    pub use_move_ordering: bool,
    /// Number of table slots. Required to be non-zero when the table is on.
    pub tt_capacity: usize,
    pub replacement: Replacement,
    /// Quiescence plies after which the stand-pat value is returned as is.
    pub quiescence_max_ply: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_transposition_table: true,
            use_quiescence: true,
            use_move_ordering: true,
            tt_capacity: DEFAULT_TT_CAPACITY,
            replacement: Replacement::default(),
            quiescence_max_ply: DEFAULT_QUIESCENCE_MAX_PLY,
        }
    }
}

impl SearchConfig {
    /// Plain alpha-beta: no table, no quiescence, no ordering.
    pub fn simple() -> Self {
        Self {
            use_transposition_table: false,
            use_quiescence: false,
            use_move_ordering: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_transposition_table && self.tt_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
