//! Stateless checks against per-run state that flag hallucinated repetition.
//!
//! ASR engines loop under low audio quality or code-switched speech: the
//! same phrase comes back verbatim or lightly rephrased, segment after
//! segment. Two ordered checks catch both shapes. The near-duplicate check
//! (token-set Jaccard against the last accepted segment) catches rephrased
//! loops; the exact-substring check over a bounded tail of the running text
//! catches verbatim repeats that an order-insensitive token comparison can
//! miss on short segments.

use crate::config::DedupConfig;
use crate::pipeline::assembler::PipelineState;
use std::collections::HashSet;

/// Why a segment was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Token-set similarity to the last accepted segment exceeded the
    /// threshold.
    NearDuplicate,
    /// The candidate text already occurs verbatim in the recent tail of
    /// the running text.
    ExactDuplicate,
}

impl SkipReason {
    /// Tag used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NearDuplicate => "near_duplicate",
            SkipReason::ExactDuplicate => "exact_duplicate",
        }
    }
}

/// Detector for hallucinated repetition at the segment level.
#[derive(Debug, Clone)]
pub struct RepetitionDetector {
    similarity_threshold: f64,
    exact_match_window: usize,
}

impl RepetitionDetector {
    pub fn new(config: &DedupConfig) -> Self {
        Self {
            similarity_threshold: config.similarity_threshold,
            exact_match_window: config.exact_match_window,
        }
    }

    /// Evaluate a quality-passed candidate against the run state.
    ///
    /// Returns `None` to accept, or the reason to reject. Checks run in a
    /// fixed order and the first to trigger wins; there is no double
    /// counting.
    pub fn evaluate(&self, candidate: &str, state: &PipelineState) -> Option<SkipReason> {
        if !state.last_accepted_text.is_empty()
            && let Some(similarity) = jaccard(&state.last_accepted_text, candidate)
            && similarity > self.similarity_threshold
        {
            return Some(SkipReason::NearDuplicate);
        }

        let window_chars = self.exact_match_window * candidate.chars().count();
        if tail_chars(&state.running_text, window_chars).contains(candidate) {
            return Some(SkipReason::ExactDuplicate);
        }

        None
    }
}

/// Jaccard similarity of the lowercase word-token sets of two strings.
///
/// Returns `None` when either token set is empty — there is nothing
/// meaningful to compare.
fn jaccard(a: &str, b: &str) -> Option<f64> {
    let set_a: HashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
    let set_b: HashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();
    if set_a.is_empty() || set_b.is_empty() {
        return None;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    Some(intersection as f64 / union as f64)
}

/// The last `n` characters of `text`, respecting char boundaries.
fn tail_chars(text: &str, n: usize) -> &str {
    let char_count = text.chars().count();
    if char_count <= n {
        return text;
    }
    let skip = char_count - n;
    match text.char_indices().nth(skip) {
        Some((byte_idx, _)) => &text[byte_idx..],
        None => "",
    }
}
