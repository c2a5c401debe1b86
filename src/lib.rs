//! tidyscribe - cleanup and assembly for ASR transcript streams.
//!
//! Consumes a raw, timestamped segment stream from a speech-to-text engine
//! and produces a single deduplicated, punctuation-normalized transcript,
//! suppressing hallucinated repetition at the segment level and the
//! word-phrase level.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod segment;
pub mod source;
pub mod transcript;

// Core types (source → pipeline → transcript)
pub use segment::{EngineInfo, Segment};
pub use source::{MockSource, ReplaySource, SegmentSource};
pub use transcript::{Transcript, TranscriptResponse};

// Pipeline
pub use pipeline::{Pipeline, SkipReason};

// Error handling
pub use error::{Result, TidyscribeError};

// Config
pub use config::{Config, DedupConfig, EngineConfig, FilterConfig};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }
}
