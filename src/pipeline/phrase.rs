//! Word-level pass that collapses adjacent repeated phrases.
//!
//! Segment-level checks cannot see doubling *inside* one segment, or across
//! a segment boundary once texts are joined ("البرمجة الاصطناعية، البرمجة
//! الاصطناعية"). This pass scans the normalized word sequence once, left to
//! right, and collapses each adjacent phrase pair it finds.

/// Collapse adjacent repeated word groups in `text`.
///
/// Greedy, leftmost, longest-phrase-first: at each position, phrase lengths
/// from `max_phrase_len` down to `min_phrase_len` are tried; the first
/// (longest) exact match wins, both occurrences are consumed and the phrase
/// is emitted once. Longest-first prevents a long repeated phrase from being
/// partially absorbed by a shorter spurious match. Comparison is
/// case-sensitive over the normalized words.
///
/// This is a single pass: it removes one level of doubling per position and
/// deliberately does not re-scan its own output, so a phrase repeated three
/// or more times in immediate succession keeps its trailing occurrence.
pub fn collapse_repeated_phrases(text: &str, min_phrase_len: usize, max_phrase_len: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let min_len = min_phrase_len.max(1);

    let mut cleaned: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let mut matched = false;
        for len in (min_len..=max_phrase_len).rev() {
            if i + 2 * len <= words.len() && words[i..i + len] == words[i + len..i + 2 * len] {
                cleaned.extend_from_slice(&words[i..i + len]);
                i += 2 * len;
                matched = true;
                break;
            }
        }
        if !matched {
            cleaned.push(words[i]);
            i += 1;
        }
    }

    cleaned.join(" ")
}
