//! Basic text metrics: word, character, paragraph, and sentence counts.

use crate::text;

/// Raw counts extracted from a block of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Character count, whitespace included.
    pub char_count: usize,
    /// Character count with spaces removed.
    pub char_count_no_spaces: usize,
    /// Blank-line-separated block count.
    pub paragraph_count: usize,
    /// Sentence fragment count, floored at 1 for non-empty content.
    pub sentence_count: usize,
}

impl TextMetrics {
    /// Average words per sentence, with the sentence count floored at 1.
    pub fn avg_words_per_sentence(&self) -> f64 {
        self.word_count as f64 / self.sentence_count.max(1) as f64
    }
}

/// Count words, characters, paragraphs, and sentences.
///
/// Empty or whitespace-only content yields all-zero counts; the sentence
/// floor of 1 applies only when the content has at least one word.
#[tracing::instrument(skip_all, fields(text_len = content.len()))]
pub fn collect_metrics(content: &str) -> TextMetrics {
    if content.trim().is_empty() {
        return TextMetrics {
            word_count: 0,
            char_count: 0,
            char_count_no_spaces: 0,
            paragraph_count: 0,
            sentence_count: 0,
        };
    }

    TextMetrics {
        word_count: text::tokens(content).len(),
        char_count: content.chars().count(),
        char_count_no_spaces: content.chars().filter(|c| *c != ' ').count(),
        paragraph_count: text::split_paragraphs(content).len(),
        sentence_count: text::split_sentences(content).len().max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zeros() {
        let m = collect_metrics("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.char_count, 0);
        assert_eq!(m.paragraph_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.avg_words_per_sentence(), 0.0);
    }

    #[test]
    fn whitespace_only_is_all_zeros() {
        let m = collect_metrics("   \n\n\t  ");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
    }

    #[test]
    fn single_sentence_counts() {
        let m = collect_metrics("The cat sat on the mat.");
        assert_eq!(m.word_count, 6);
        assert_eq!(m.char_count, 23);
        assert_eq!(m.paragraph_count, 1);
        assert_eq!(m.sentence_count, 1);
    }

    #[test]
    fn sentence_floor_for_unpunctuated_text() {
        let m = collect_metrics("no terminal punctuation here");
        assert_eq!(m.sentence_count, 1);
        assert_eq!(m.word_count, 4);
    }

    #[test]
    fn punctuation_only_tokens_count_as_words() {
        let m = collect_metrics("yes -- no");
        assert_eq!(m.word_count, 3);
    }

    #[test]
    fn char_count_includes_whitespace() {
        let m = collect_metrics("a b");
        assert_eq!(m.char_count, 3);
        assert_eq!(m.char_count_no_spaces, 2);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let m = collect_metrics("One block.\n\nTwo block.\n\nThree block.");
        assert_eq!(m.paragraph_count, 3);
    }

    #[test]
    fn avg_words_per_sentence_divides_by_floored_count() {
        let m = collect_metrics("one two three four. five six.");
        assert_eq!(m.sentence_count, 2);
        assert_eq!(m.avg_words_per_sentence(), 3.0);
    }
}
