//! Text splitting primitives.
//!
//! Provides sentence splitting, word extraction, and paragraph splitting
//! for use by the metric and keyword modules.
//!
//! Sentence splitting is deliberately simple: text is split on `.`, `!`,
//! and `?`, and empty fragments are discarded. Abbreviations, decimals, and
//! URLs are not special-cased; the scoring formulas downstream are
//! calibrated against this rule.

/// Characters that terminate a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split text into sentences on `.`, `!`, and `?`.
///
/// Fragments that are empty after trimming are discarded, so a run of
/// terminators ("Wow!!!") still yields a single sentence. Returns an empty
/// vec for empty or whitespace-only input.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into paragraphs (blocks separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split text into raw whitespace-delimited tokens.
///
/// Punctuation-only tokens are kept; word counting treats every token as a
/// word, and only the keyword path strips punctuation.
pub fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Extract normalized words: whitespace tokens, lower-cased, stripped of
/// leading and trailing punctuation. Tokens that are punctuation-only
/// disappear here.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence");
        assert_eq!(sentences[1], "This is another sentence");
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn terminator_runs_collapse() {
        let sentences = split_sentences("Wow!!! That was loud.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Wow");
    }

    #[test]
    fn no_terminal_punctuation_is_one_fragment() {
        let sentences = split_sentences("a trailing fragment without punctuation");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("...").is_empty());
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn extract_words_drops_punctuation_only_tokens() {
        let words = extract_words("yes -- no");
        assert_eq!(words, vec!["yes", "no"]);
    }

    #[test]
    fn tokens_keep_punctuation() {
        assert_eq!(tokens("yes -- no"), vec!["yes", "--", "no"]);
    }

    #[test]
    fn split_paragraphs_basic() {
        let text = "First paragraph.\n\nSecond paragraph.\n\nThird.";
        let paras = split_paragraphs(text);
        assert_eq!(paras.len(), 3);
    }

    #[test]
    fn split_paragraphs_skips_blank_blocks() {
        let text = "First.\n\n\n\nSecond.";
        assert_eq!(split_paragraphs(text).len(), 2);
    }
}
