//! Readability scoring using an approximate Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * 1.5`
//!
//! Higher = easier to read. Instead of counting syllables the formula uses
//! a fixed estimate of 1.5 syllables per word, so only sentence length
//! moves the score. The result is intentionally NOT clamped to 0-100:
//! very long sentences push it negative, and downstream thresholds are
//! calibrated against the raw values.

/// Flesch base constant.
const FLESCH_BASE: f64 = 206.835;

/// Weight applied to average sentence length.
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;

/// Weight applied to syllables per word.
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Fixed syllables-per-word estimate standing in for real syllable counting.
const SYLLABLES_PER_WORD: f64 = 1.5;

/// Score readability from word and sentence counts.
///
/// The sentence count is floored at 1 so zero-sentence input cannot divide
/// by zero. Rounded to 2 decimals.
pub fn approximate_flesch(word_count: usize, sentence_count: usize) -> f64 {
    let words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;
    let score = FLESCH_BASE
        - SENTENCE_LENGTH_WEIGHT * words_per_sentence
        - SYLLABLE_WEIGHT * SYLLABLES_PER_WORD;
    round2(score)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_word_sentences_score_midrange() {
        // 100 words over 5 sentences: 206.835 - 1.015*20 - 126.9 = 59.635
        let score = approximate_flesch(100, 5);
        assert!((score - 59.635).abs() < 0.01);
    }

    #[test]
    fn one_word_sentences_score_high() {
        // 206.835 - 1.015*1 - 126.9 = 78.92
        let score = approximate_flesch(1, 1);
        assert!((score - 78.92).abs() < 0.01);
    }

    #[test]
    fn very_long_sentences_go_negative() {
        let score = approximate_flesch(200, 1);
        assert!(score < 0.0);
    }

    #[test]
    fn zero_sentences_does_not_divide_by_zero() {
        // Floored divisor: 206.835 - 0 - 126.9 = 79.935
        let score = approximate_flesch(0, 0);
        assert!((score - 79.935).abs() < 0.01);
    }

    #[test]
    fn deterministic() {
        assert_eq!(approximate_flesch(123, 7), approximate_flesch(123, 7));
    }
}
