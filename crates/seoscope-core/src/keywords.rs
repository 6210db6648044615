//! Keyword density and top-keyword extraction.

use std::collections::HashMap;

use crate::word_lists::{MIN_KEYWORD_LEN, STOP_WORDS};

/// Maximum number of keywords returned by [`top_keywords`].
pub const TOP_KEYWORD_LIMIT: usize = 10;

/// Percentage of words matching `keyword`, case-insensitively.
///
/// `words` must already be normalized (lower-cased, punctuation-stripped)
/// and `total_words` is the raw word count of the content, so that
/// punctuation-only tokens still dilute the density. Returns 0 when the
/// content has no words. Rounded to 2 decimals.
pub fn keyword_density(words: &[String], total_words: usize, keyword: &str) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    let needle = keyword.to_lowercase();
    let occurrences = words.iter().filter(|w| **w == needle).count();
    round2(occurrences as f64 / total_words as f64 * 100.0)
}

/// Rank the most frequent keywords in normalized `words`.
///
/// Stop words and words shorter than [`MIN_KEYWORD_LEN`] are excluded.
/// Returns up to [`TOP_KEYWORD_LIMIT`] `(word, count)` pairs sorted by
/// frequency descending; ties rank the earlier first occurrence higher.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn top_keywords(words: &[String]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (position, word) in words.iter().enumerate() {
        if word.len() < MIN_KEYWORD_LEN || STOP_WORDS.contains(word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
        first_seen.entry(word).or_insert(position);
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|(word, count)| (std::cmp::Reverse(*count), first_seen[word]));
    ranked.truncate(TOP_KEYWORD_LIMIT);

    ranked
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
