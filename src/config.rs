//! Simulator configuration.
//!
//! Loaded from an optional TOML file; every field has a default so the
//! simulator runs with no configuration at all. See `configs/default.toml`.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;

const DEFAULT_MAX_WORDS: usize = 65536;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Diagnostics settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory sizing settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage diagnostics (fetch, stalls, flushes, writebacks) to
    /// stderr. The stdout trace is unaffected.
    #[serde(default)]
    pub trace_pipeline: bool,
}

/// Memory sizing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Upper bound of the word address space. Accesses at or beyond this
    /// index are fatal. The memory arrays themselves are sized to the
    /// loaded image and grow only as stores touch new addresses.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

impl Config {
    /// Loads a configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
