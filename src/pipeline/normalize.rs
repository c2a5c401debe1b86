//! Deterministic punctuation normalization over the assembled transcript.
//!
//! Three rewrite rules applied to the whole text in a fixed order; later
//! rules depend on earlier ones. Each rule is a single-pass character
//! scanner rather than a regex, and the composed transform is idempotent:
//! normalizing twice yields the same text as normalizing once.

/// Punctuation that binds to the preceding word. Latin marks plus the
/// Arabic comma '،' and Arabic semicolon '؛'.
const PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '،', '؛'];

fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Rule 1: collapse any whitespace run to a single space, trim both ends.
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace && !result.is_empty() {
                result.push(' ');
            }
            in_whitespace = false;
            result.push(ch);
        }
    }

    result
}

/// Rule 2: remove whitespace immediately preceding a punctuation mark.
fn strip_space_before_punctuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        if is_punctuation(ch) {
            while result.ends_with(|c: char| c.is_whitespace()) {
                result.pop();
            }
        }
        result.push(ch);
    }

    result
}

/// Rule 3: insert a single space after a punctuation mark when the next
/// character is not whitespace (punctuation at end of string stays bare).
fn space_after_punctuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        result.push(ch);
        if is_punctuation(ch)
            && let Some(&next) = chars.peek()
            && !next.is_whitespace()
        {
            result.push(' ');
        }
    }

    result
}

/// Apply the full ordered rewrite pass.
pub fn normalize(text: &str) -> String {
    space_after_punctuation(&strip_space_before_punctuation(&collapse_whitespace(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── individual rules ─────────────────────────────────────────────────

    #[test]
    fn collapse_squeezes_runs_and_trims() {
        assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
    }

    #[test]
    fn collapse_handles_empty_and_blank() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn strip_removes_space_before_each_mark() {
        assert_eq!(
            strip_space_before_punctuation("hello , world !"),
            "hello, world!"
        );
    }

    #[test]
    fn strip_handles_arabic_marks() {
        assert_eq!(strip_space_before_punctuation("مرحبا ،"), "مرحبا،");
        assert_eq!(strip_space_before_punctuation("كلام ؛ آخر"), "كلام؛ آخر");
    }

    #[test]
    fn space_after_inserts_when_missing() {
        assert_eq!(space_after_punctuation("hello,world"), "hello, world");
    }

    #[test]
    fn space_after_leaves_end_of_string_bare() {
        assert_eq!(space_after_punctuation("done."), "done.");
    }

    // ── composed transform ───────────────────────────────────────────────

    #[test]
    fn normalizes_stray_spacing() {
        assert_eq!(normalize("hello , world !"), "hello, world!");
    }

    #[test]
    fn normalizes_missing_space_after_comma() {
        assert_eq!(normalize("hello,world"), "hello, world");
    }

    #[test]
    fn normalizes_whitespace_runs() {
        assert_eq!(normalize("one   two\t\tthree\n four"), "one two three four");
    }

    #[test]
    fn normalizes_colon_spacing() {
        assert_eq!(normalize("note :important"), "note: important");
    }

    #[test]
    fn normalizes_arabic_punctuation() {
        assert_eq!(normalize("مرحبا ، بالعالم"), "مرحبا، بالعالم");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(normalize("nothing to fix here"), "nothing to fix here");
    }

    #[test]
    fn idempotent_on_typical_text() {
        let inputs = [
            "hello , world !",
            "hello,world",
            "  spaced   out  text . ",
            "مرحبا ، بالعالم ؛ نعم",
            "a:b;c,d.e",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(twice, once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn idempotent_on_consecutive_punctuation() {
        // Rule 3 separates runs of marks; a second pass must not change
        // the result further.
        let once = normalize("wait ...");
        let twice = normalize(&once);
        assert_eq!(twice, once);
    }
}
