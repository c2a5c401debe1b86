//! Configuration for the cleanup pipeline.
//!
//! Loaded once at pipeline start from TOML, immutable thereafter.

use crate::error::{Result, TidyscribeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub filter: FilterConfig,
    pub dedup: DedupConfig,
    pub engine: EngineConfig,
}

/// Segment quality gate configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum trimmed length for a segment to be considered at all.
    pub min_segment_chars: usize,
    /// Minimum number of distinct characters. Guards against near-uniform
    /// noise like "aaaa".
    pub min_distinct_chars: usize,
}

/// Repetition and phrase deduplication configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DedupConfig {
    /// Jaccard similarity above which a segment counts as a near-duplicate
    /// of the last accepted one.
    pub similarity_threshold: f64,
    /// The exact-duplicate check looks at the last
    /// `exact_match_window * candidate length` characters of running text.
    pub exact_match_window: usize,
    /// Shortest word group the phrase deduplicator collapses.
    pub min_phrase_len: usize,
    /// Longest word group the phrase deduplicator collapses.
    pub max_phrase_len: usize,
}

/// Opaque pass-through parameters for the external ASR engine.
///
/// The pipeline never interprets these; they are forwarded to whatever
/// produces the segment stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Model size (tiny, base, small, medium, large-v2, large-v3).
    pub model: String,
    /// Language hint, or "auto" for detection.
    pub language: String,
    /// Compute device ("cpu" or "cuda").
    pub device: String,
    /// Compute precision ("int8", "float16", ...). Empty means engine default.
    pub compute: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_segment_chars: 2,
            min_distinct_chars: 3,
        }
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            exact_match_window: 3,
            min_phrase_len: 2,
            max_phrase_len: 5,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "base".to_string(),
            language: "auto".to_string(),
            device: "cpu".to_string(),
            compute: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, or return defaults if the file
    /// doesn't exist. Invalid TOML or invalid values are still errors.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(TidyscribeError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - TIDYSCRIBE_MODEL → engine.model
    /// - TIDYSCRIBE_LANGUAGE → engine.language
    /// - TIDYSCRIBE_DEVICE → engine.device
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("TIDYSCRIBE_MODEL")
            && !model.is_empty()
        {
            self.engine.model = model;
        }

        if let Ok(language) = std::env::var("TIDYSCRIBE_LANGUAGE")
            && !language.is_empty()
        {
            self.engine.language = language;
        }

        if let Ok(device) = std::env::var("TIDYSCRIBE_DEVICE")
            && !device.is_empty()
        {
            self.engine.device = device;
        }

        self
    }

    /// Check value ranges that the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.dedup.similarity_threshold) {
            return Err(TidyscribeError::ConfigInvalidValue {
                key: "dedup.similarity_threshold".to_string(),
                message: "must be between 0 and 1".to_string(),
            });
        }
        if self.dedup.min_phrase_len < 1 {
            return Err(TidyscribeError::ConfigInvalidValue {
                key: "dedup.min_phrase_len".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.dedup.max_phrase_len < self.dedup.min_phrase_len {
            return Err(TidyscribeError::ConfigInvalidValue {
                key: "dedup.max_phrase_len".to_string(),
                message: "must be >= dedup.min_phrase_len".to_string(),
            });
        }
        if self.dedup.exact_match_window == 0 {
            return Err(TidyscribeError::ConfigInvalidValue {
                key: "dedup.exact_match_window".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/tidyscribe/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tidyscribe").join("config.toml"))
    }
}
