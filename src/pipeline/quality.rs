//! Quality gate that rejects noise segments before the dedup logic sees them.

use crate::config::FilterConfig;

/// Stateless per-segment quality filter.
///
/// Rejects segments that are too short after trimming, or whose trimmed
/// text has too few distinct characters — engine noise like "aaaa" or a
/// lone punctuation mark under low audio quality.
#[derive(Debug, Clone)]
pub struct QualityFilter {
    min_segment_chars: usize,
    min_distinct_chars: usize,
}

impl QualityFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            min_segment_chars: config.min_segment_chars,
            min_distinct_chars: config.min_distinct_chars,
        }
    }

    /// Whether a segment's trimmed text passes the quality gate.
    ///
    /// Deterministic, no side effects. `text` is expected to already be
    /// trimmed by the caller.
    pub fn accepts(&self, text: &str) -> bool {
        if text.chars().count() < self.min_segment_chars {
            return false;
        }

        let mut distinct: Vec<char> = text.chars().collect();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.len() >= self.min_distinct_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> QualityFilter {
        QualityFilter::new(&FilterConfig::default())
    }

    #[test]
    fn rejects_empty_text() {
        assert!(!default_filter().accepts(""));
    }

    #[test]
    fn rejects_single_character() {
        assert!(!default_filter().accepts("a"));
    }

    #[test]
    fn rejects_uniform_noise() {
        // Distinct chars = 1, below the default minimum of 3
        assert!(!default_filter().accepts("aaaa"));
    }

    #[test]
    fn rejects_two_distinct_characters() {
        assert!(!default_filter().accepts("ababab"));
    }

    #[test]
    fn accepts_normal_text() {
        assert!(default_filter().accepts("hello world"));
    }

    #[test]
    fn accepts_exactly_three_distinct_characters() {
        assert!(default_filter().accepts("abc"));
    }

    #[test]
    fn accepts_arabic_text() {
        assert!(default_filter().accepts("مرحبا بالعالم"));
    }

    #[test]
    fn length_is_measured_in_characters_not_bytes() {
        // Two Arabic characters: 4 bytes but 2 chars, passes the length
        // gate though not the distinct gate.
        let filter = QualityFilter::new(&FilterConfig {
            min_segment_chars: 2,
            min_distinct_chars: 2,
        });
        assert!(filter.accepts("مر"));
    }

    #[test]
    fn thresholds_come_from_config() {
        let filter = QualityFilter::new(&FilterConfig {
            min_segment_chars: 5,
            min_distinct_chars: 1,
        });
        assert!(!filter.accepts("abcd"));
        assert!(filter.accepts("aaaaa"));
    }
}
