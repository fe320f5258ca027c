use std::sync::OnceLock;

use regex::Regex;

/// Sentences at or below this many characters (after trim) are discarded.
const MIN_SENTENCE_CHARS: usize = 10;

static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn boundary() -> &'static Regex {
    SENTENCE_BOUNDARY.get_or_init(|| Regex::new(r"[.!?]\s+").expect("sentence boundary regex"))
}

/// Split raw text into trimmed candidate sentences.
///
/// Splitting is purely punctuation-based: `.`, `!`, or `?` followed by
/// whitespace ends a sentence. No abbreviation handling, no language
/// detection. Empty input or input under the minimum length yields an empty
/// vec.
pub fn split_sentences(text: &str) -> Vec<String> {
    boundary()
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn short_input_yields_nothing() {
        assert!(split_sentences("too short").is_empty());
    }

    #[test]
    fn splits_on_terminators_followed_by_whitespace() {
        let sentences = split_sentences(
            "The first sentence is here. The second one follows! Is this the third one? Yes",
        );
        assert_eq!(
            sentences,
            vec![
                "The first sentence is here".to_string(),
                "The second one follows".to_string(),
                "Is this the third one".to_string(),
            ]
        );
    }

    #[test]
    fn discards_short_fragments() {
        let sentences = split_sentences("A tiny bit. This fragment is long enough to keep. No");
        assert_eq!(
            sentences,
            vec!["This fragment is long enough to keep".to_string()]
        );
    }

    #[test]
    fn trailing_terminator_stays_with_last_sentence() {
        let sentences = split_sentences("Numbers like 90% stay intact in one sentence.");
        assert_eq!(
            sentences,
            vec!["Numbers like 90% stay intact in one sentence.".to_string()]
        );
    }
}
