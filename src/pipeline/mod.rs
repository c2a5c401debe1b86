//! Cleanup and assembly pipeline for raw ASR segment streams.
//!
//! Stages run in a fixed order: quality gate → repetition detector →
//! assembler, then two whole-text passes (punctuation normalization and
//! phrase deduplication) once the stream is exhausted.

pub mod assembler;
pub mod normalize;
pub mod orchestrator;
pub mod phrase;
pub mod quality;
pub mod repetition;

pub use assembler::PipelineState;
pub use normalize::normalize;
pub use orchestrator::Pipeline;
pub use phrase::collapse_repeated_phrases;
pub use quality::QualityFilter;
pub use repetition::{RepetitionDetector, SkipReason};
