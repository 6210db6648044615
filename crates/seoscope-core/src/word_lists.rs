//! Curated word lists for keyword extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common function words excluded from keyword-frequency ranking.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them",
    ]
    .into_iter()
    .collect()
});

/// Minimum length for a word to rank as a keyword.
pub const MIN_KEYWORD_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_common_function_words() {
        assert!(STOP_WORDS.contains("the"));
        assert!(STOP_WORDS.contains("them"));
        assert!(!STOP_WORDS.contains("marketing"));
    }
}
