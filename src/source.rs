//! The engine seam: a pull-based stream of recognized segments.

use crate::error::{Result, TidyscribeError};
use crate::segment::{EngineInfo, Segment};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Trait for the ASR engine boundary.
///
/// This trait allows swapping implementations (a recorded engine run,
/// a live engine adapter, or a mock for tests). The stream is finite,
/// lazily produced and non-restartable: the pipeline consumes each
/// segment exactly once and never rewinds.
pub trait SegmentSource {
    /// Run-level metadata (detected language and confidence).
    fn info(&self) -> &EngineInfo;

    /// Pull the next segment.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. An `Err` means the
    /// engine failed and the run must terminate (no retries).
    fn next_segment(&mut self) -> Result<Option<Segment>>;
}

/// A recorded engine run, as serialized by the engine wrapper:
/// `{ "language": "...", "languageProbability": 0.97, "segments": [...] }`.
///
/// A bare JSON array of segments is also accepted; language falls back
/// to "unknown".
#[derive(Debug, Deserialize)]
struct RecordedRun {
    #[serde(default)]
    language: Option<String>,
    #[serde(default, rename = "languageProbability")]
    language_probability: Option<f32>,
    segments: Vec<Segment>,
}

/// Segment source that replays a recorded engine run.
#[derive(Debug)]
pub struct ReplaySource {
    info: EngineInfo,
    segments: std::vec::IntoIter<Segment>,
}

impl ReplaySource {
    /// Build a source from already-parsed parts.
    pub fn new(info: EngineInfo, segments: Vec<Segment>) -> Self {
        Self {
            info,
            segments: segments.into_iter(),
        }
    }

    /// Parse a recorded run from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let (info, segments) = match serde_json::from_str::<RecordedRun>(json) {
            Ok(run) => (
                EngineInfo::new(
                    run.language.unwrap_or_else(|| "unknown".to_string()),
                    run.language_probability.unwrap_or(0.0),
                ),
                run.segments,
            ),
            Err(object_err) => match serde_json::from_str::<Vec<Segment>>(json) {
                Ok(segments) => (EngineInfo::default(), segments),
                Err(_) => {
                    return Err(TidyscribeError::EngineUnavailable {
                        message: "Malformed engine output".to_string(),
                        details: Some(object_err.to_string()),
                    });
                }
            },
        };
        Ok(Self::new(info, segments))
    }

    /// Load a recorded run from a file.
    ///
    /// A missing file is `InputNotFound`; malformed content is
    /// `EngineUnavailable` with parse detail.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TidyscribeError::InputNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl SegmentSource for ReplaySource {
    fn info(&self) -> &EngineInfo {
        &self.info
    }

    fn next_segment(&mut self) -> Result<Option<Segment>> {
        Ok(self.segments.next())
    }
}

/// Mock segment source for testing.
///
/// Yields queued segments in order and can be configured to fail
/// mid-stream the way a real engine does (missing runtime libraries,
/// unsupported device).
#[derive(Debug)]
pub struct MockSource {
    info: EngineInfo,
    segments: Vec<Segment>,
    position: usize,
    fail_after: Option<usize>,
}

impl MockSource {
    /// Create a mock source yielding the given segment texts with
    /// synthetic one-second timestamps.
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Segment::new(*text, i as f64, (i + 1) as f64))
            .collect();
        Self {
            info: EngineInfo::new("en", 0.99),
            segments,
            position: 0,
            fail_after: None,
        }
    }

    /// Create a mock source from full segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            info: EngineInfo::new("en", 0.99),
            segments,
            position: 0,
            fail_after: None,
        }
    }

    /// Override the reported engine metadata.
    pub fn with_info(mut self, info: EngineInfo) -> Self {
        self.info = info;
        self
    }

    /// Configure the source to fail after yielding `n` segments.
    pub fn with_failure_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }
}

impl SegmentSource for MockSource {
    fn info(&self) -> &EngineInfo {
        &self.info
    }

    fn next_segment(&mut self) -> Result<Option<Segment>> {
        if let Some(n) = self.fail_after
            && self.position >= n
        {
            return Err(TidyscribeError::EngineUnavailable {
                message: "mock engine failure".to_string(),
                details: None,
            });
        }
        let segment = self.segments.get(self.position).cloned();
        self.position += 1;
        Ok(segment)
    }
}
