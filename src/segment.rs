//! Data types shared between the engine boundary and the pipeline.

use serde::{Deserialize, Serialize};

/// One timestamped unit of recognized text from the ASR engine.
///
/// Produced once per recognized utterance, immutable after creation.
/// Timestamps are seconds from the start of the audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Recognized text for this utterance.
    pub text: String,
    /// Start of the utterance in seconds.
    pub start: f64,
    /// End of the utterance in seconds.
    pub end: f64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Run-level metadata reported by the ASR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInfo {
    /// Detected (or caller-forced) language code, e.g. "ar", "en".
    pub language: String,
    /// Engine confidence in the detected language, in [0, 1].
    #[serde(default, rename = "languageProbability")]
    pub language_probability: f32,
}

impl EngineInfo {
    pub fn new(language: impl Into<String>, language_probability: f32) -> Self {
        Self {
            language: language.into(),
            language_probability,
        }
    }
}

impl Default for EngineInfo {
    fn default() -> Self {
        Self {
            language: "unknown".to_string(),
            language_probability: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_serializes_with_plain_keys() {
        let segment = Segment::new("hello", 0.0, 1.5);
        let json = serde_json::to_value(&segment).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["start"], 0.0);
        assert_eq!(json["end"], 1.5);
    }

    #[test]
    fn segment_round_trips() {
        let segment = Segment::new("مرحبا بالعالم", 2.25, 4.75);
        let json = serde_json::to_string(&segment).unwrap();
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, segment);
    }

    #[test]
    fn engine_info_default_is_unknown() {
        let info = EngineInfo::default();
        assert_eq!(info.language, "unknown");
        assert_eq!(info.language_probability, 0.0);
    }

    #[test]
    fn engine_info_probability_defaults_when_missing() {
        let info: EngineInfo = serde_json::from_str(r#"{"language": "ar"}"#).unwrap();
        assert_eq!(info.language, "ar");
        assert_eq!(info.language_probability, 0.0);
    }
}
