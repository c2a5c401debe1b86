//! Pipeline that turns a raw segment stream into a cleaned transcript.
//!
//! One run per audio input: segments are pulled from the source one at a
//! time and processed strictly in arrival order, because repetition
//! detection is order-sensitive. The run ends in `Completed` (an `Ok`
//! transcript, possibly empty) or `Failed` (the source's error, propagated
//! unchanged). Segment-level rejections are normal operation, counted and
//! logged, never surfaced as errors.

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::assembler::PipelineState;
use crate::pipeline::normalize::normalize;
use crate::pipeline::phrase::collapse_repeated_phrases;
use crate::pipeline::quality::QualityFilter;
use crate::pipeline::repetition::RepetitionDetector;
use crate::source::SegmentSource;
use crate::transcript::Transcript;
use tracing::{debug, info};

/// Truncate text for log lines the way the engine wrapper did (50 chars).
fn preview(text: &str) -> String {
    if text.chars().count() <= 50 {
        text.to_string()
    } else {
        let cut: String = text.chars().take(50).collect();
        format!("{cut}...")
    }
}

/// The cleanup and assembly pipeline.
///
/// Holds only immutable configuration; all per-run state lives in a
/// `PipelineState` owned by `run`, so independent runs need no locking.
#[derive(Debug, Clone)]
pub struct Pipeline {
    quality: QualityFilter,
    repetition: RepetitionDetector,
    min_phrase_len: usize,
    max_phrase_len: usize,
}

impl Pipeline {
    /// Creates a pipeline from validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            quality: QualityFilter::new(&config.filter),
            repetition: RepetitionDetector::new(&config.dedup),
            min_phrase_len: config.dedup.min_phrase_len,
            max_phrase_len: config.dedup.max_phrase_len,
        }
    }

    /// Consume the segment stream and produce the final transcript.
    ///
    /// A source error terminates the run immediately and is returned as-is.
    /// Zero accepted segments is success: an empty transcript.
    pub fn run(&self, source: &mut dyn SegmentSource) -> Result<Transcript> {
        let mut state = PipelineState::new();

        while let Some(segment) = source.next_segment()? {
            let text = segment.text.trim();

            if !self.quality.accepts(text) {
                state.skip_quality();
                debug!(reason = "quality", text = %preview(text), "skipping segment");
                continue;
            }

            if let Some(reason) = self.repetition.evaluate(text, &state) {
                state.skip_repetition();
                debug!(reason = reason.as_str(), text = %preview(text), "skipping segment");
                continue;
            }

            state.accept(text, segment.start, segment.end);
        }

        let normalized = normalize(&state.running_text);
        let text = collapse_repeated_phrases(&normalized, self.min_phrase_len, self.max_phrase_len);

        let info = source.info();
        info!(
            segments = state.accepted_count,
            characters = text.chars().count(),
            words = text.split_whitespace().count(),
            language = %info.language,
            confidence = info.language_probability,
            "transcription complete"
        );
        if state.repetition_skip_count > 0 {
            info!(
                skipped = state.repetition_skip_count,
                "removed repetitive segments"
            );
        }
        if state.quality_skip_count > 0 {
            debug!(skipped = state.quality_skip_count, "removed noise segments");
        }

        Ok(Transcript::new(
            text,
            info.language.clone(),
            state.accepted_segments,
        ))
    }
}
