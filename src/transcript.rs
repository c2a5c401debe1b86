//! Final pipeline output and its serialized response envelope.

use crate::error::TidyscribeError;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// The cleaned transcript produced by one pipeline run.
///
/// Created once at pipeline completion, immutable, owned by the caller.
/// `segments` lists the accepted segments with their original timestamps;
/// phrase-level deduplication edits the flattened `text` only.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Deduplicated, punctuation-normalized transcript text.
    pub text: String,
    /// Number of whitespace-separated words in `text`.
    pub word_count: usize,
    /// Number of characters (Unicode scalar values) in `text`.
    pub character_count: usize,
    /// Language reported by the engine.
    pub language: String,
    /// Accepted segments in arrival order.
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Build a transcript from final text and the accepted segments.
    ///
    /// Word and character counts are derived from the text.
    pub fn new(text: String, language: String, segments: Vec<Segment>) -> Self {
        let word_count = text.split_whitespace().count();
        let character_count = text.chars().count();
        Self {
            text,
            word_count,
            character_count,
            language,
            segments,
        }
    }

    /// True when no segment survived the filters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The response envelope written to the caller.
///
/// Field names are camelCase on the wire to match the engine wrapper's
/// existing consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TranscriptResponse {
    /// Failure envelope from a fatal pipeline error.
    pub fn from_error(error: &TidyscribeError) -> Self {
        Self {
            success: false,
            transcript: None,
            word_count: None,
            character_count: None,
            language: None,
            segments: None,
            error: Some(error.to_string()),
            details: error.details().map(str::to_string),
        }
    }
}

impl From<Transcript> for TranscriptResponse {
    fn from(transcript: Transcript) -> Self {
        Self {
            success: true,
            transcript: Some(transcript.text),
            word_count: Some(transcript.word_count),
            character_count: Some(transcript.character_count),
            language: Some(transcript.language),
            segments: Some(transcript.segments),
            error: None,
            details: None,
        }
    }
}
