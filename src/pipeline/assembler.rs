//! Per-run pipeline state and punctuation-aware transcript assembly.

use crate::segment::Segment;

/// Punctuation that may start a fragment segment. When a new segment begins
/// with one of these, no space separator is inserted before it — the engine
/// sometimes emits trailing punctuation as its own segment.
/// Covers Latin and Arabic marks (Arabic comma '،' and semicolon '؛').
const NO_SPACE_BEFORE: [char; 6] = ['.', '،', ',', '!', '?', '؛'];

/// Mutable state for one transcription run.
///
/// Owned exclusively by the run and discarded at completion. `running_text`
/// is always the concatenation-with-spacing of the accepted segments' texts
/// in arrival order; `accepted_segments` only ever grows.
#[derive(Debug, Default)]
pub struct PipelineState {
    /// Segments accepted so far, in arrival order.
    pub accepted_segments: Vec<Segment>,
    /// Append-only accumulation of accepted text.
    pub running_text: String,
    /// Most recently accepted segment's trimmed text. Rejected segments
    /// never update this — repetition is measured against the last
    /// *accepted* output, not the last seen input.
    pub last_accepted_text: String,
    /// Count of accepted segments.
    pub accepted_count: usize,
    /// Segments rejected by the repetition detector.
    pub repetition_skip_count: usize,
    /// Segments rejected by the quality filter.
    pub quality_skip_count: usize,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted segment.
    ///
    /// Inserts one space separator before the new text unless the running
    /// text is empty or the new text starts with punctuation.
    /// `text` must already be trimmed; the stored segment carries the
    /// trimmed text with the original timestamps.
    pub fn accept(&mut self, text: &str, start: f64, end: f64) {
        if !self.running_text.is_empty()
            && !text.chars().next().is_some_and(|c| NO_SPACE_BEFORE.contains(&c))
        {
            self.running_text.push(' ');
        }
        self.running_text.push_str(text);

        self.accepted_segments.push(Segment::new(text, start, end));
        self.last_accepted_text = text.to_string();
        self.accepted_count += 1;
    }

    /// Record a repetition rejection. No other field changes.
    pub fn skip_repetition(&mut self) {
        self.repetition_skip_count += 1;
    }

    /// Record a quality rejection. No other field changes.
    pub fn skip_quality(&mut self) {
        self.quality_skip_count += 1;
    }
}
