//! Composite SEO scoring.
//!
//! The score is an additive composite of four independent sub-scores
//! (content length, paragraph structure, sentence length, keyword usage)
//! clamped to 0-100. Weights and thresholds are named constants on
//! [`SeoWeights`]; the default weights make the maximum exactly 100.

use serde::{Deserialize, Serialize};

/// Word count granting full content-length points.
pub const FULL_LENGTH_WORDS: usize = 300;

/// Word count granting partial content-length points.
pub const PARTIAL_LENGTH_WORDS: usize = 100;

/// Paragraph count granting structure points.
pub const MIN_PARAGRAPHS: usize = 3;

/// Upper bound of the target average-sentence-length band, in words.
pub const SENTENCE_BAND_MAX: f64 = 20.0;

/// Upper bound of the near-miss sentence-length band, in words.
pub const SENTENCE_NEAR_MAX: f64 = 25.0;

/// Keyword density band granting full keyword points, in percent.
pub const DENSITY_BAND: (f64, f64) = (1.0, 3.0);

/// Density above this is treated as keyword stuffing, in percent.
pub const DENSITY_STUFFING: f64 = 5.0;

/// Point weights for each SEO sub-score.
///
/// `length_full + structure + sentence_band + keyword_band` is the maximum
/// attainable score and must not exceed 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoWeights {
    /// `word_count >= FULL_LENGTH_WORDS`.
    pub length_full: u8,
    /// `PARTIAL_LENGTH_WORDS <= word_count < FULL_LENGTH_WORDS`.
    pub length_partial: u8,
    /// `0 < word_count < PARTIAL_LENGTH_WORDS`.
    pub length_minimal: u8,
    /// `paragraph_count >= MIN_PARAGRAPHS`.
    pub structure: u8,
    /// Average sentence length within `(0, SENTENCE_BAND_MAX]`.
    pub sentence_band: u8,
    /// Average sentence length within `(SENTENCE_BAND_MAX, SENTENCE_NEAR_MAX]`.
    pub sentence_near: u8,
    /// Keyword density inside `DENSITY_BAND`.
    pub keyword_band: u8,
    /// Keyword present but outside the band (and not stuffed).
    pub keyword_present: u8,
    /// Keyword density above `DENSITY_STUFFING`.
    pub keyword_stuffed: u8,
    /// No target keyword supplied at all.
    pub keyword_unset: u8,
}

impl Default for SeoWeights {
    fn default() -> Self {
        Self {
            length_full: 30,
            length_partial: 20,
            length_minimal: 10,
            structure: 20,
            sentence_band: 20,
            sentence_near: 10,
            keyword_band: 30,
            keyword_present: 15,
            keyword_stuffed: 5,
            keyword_unset: 15,
        }
    }
}

impl SeoWeights {
    /// The highest score these weights can produce before clamping.
    pub const fn max_score(&self) -> u8 {
        self.length_full + self.structure + self.sentence_band + self.keyword_band
    }
}

/// Compute the composite SEO score.
///
/// `keyword_density` is `None` when no target keyword was supplied and
/// `Some(0.0)` when the keyword never appears. Empty content scores 0.
/// Identical inputs always produce identical scores.
pub fn seo_score(
    word_count: usize,
    paragraph_count: usize,
    avg_words_per_sentence: f64,
    keyword_density: Option<f64>,
    weights: &SeoWeights,
) -> u8 {
    if word_count == 0 {
        return 0;
    }

    let mut score: u32 = 0;

    score += u32::from(if word_count >= FULL_LENGTH_WORDS {
        weights.length_full
    } else if word_count >= PARTIAL_LENGTH_WORDS {
        weights.length_partial
    } else {
        weights.length_minimal
    });

    if paragraph_count >= MIN_PARAGRAPHS {
        score += u32::from(weights.structure);
    }

    if avg_words_per_sentence > 0.0 && avg_words_per_sentence <= SENTENCE_BAND_MAX {
        score += u32::from(weights.sentence_band);
    } else if avg_words_per_sentence <= SENTENCE_NEAR_MAX {
        score += u32::from(weights.sentence_near);
    }

    score += u32::from(match keyword_density {
        None => weights.keyword_unset,
        Some(density) if density >= DENSITY_BAND.0 && density <= DENSITY_BAND.1 => {
            weights.keyword_band
        }
        Some(density) if density > DENSITY_STUFFING => weights.keyword_stuffed,
        Some(density) if density > 0.0 => weights.keyword_present,
        Some(_) => 0,
    });

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> SeoWeights {
        SeoWeights::default()
    }

    #[test]
    fn default_weights_max_out_at_100() {
        assert_eq!(weights().max_score(), 100);
    }

    #[test]
    fn empty_content_scores_zero() {
        assert_eq!(seo_score(0, 0, 0.0, None, &weights()), 0);
    }

    #[test]
    fn well_formed_content_with_good_density_scores_100() {
        assert_eq!(seo_score(500, 5, 15.0, Some(2.0), &weights()), 100);
    }

    #[test]
    fn well_formed_content_without_keyword_scores_85() {
        assert_eq!(seo_score(500, 5, 15.0, None, &weights()), 85);
    }

    #[test]
    fn short_single_paragraph_scores_low() {
        // 10 minimal-length + 20 in-band sentences + 15 no keyword
        assert_eq!(seo_score(20, 1, 10.0, None, &weights()), 45);
    }

    #[test]
    fn stuffed_keyword_is_penalized() {
        let stuffed = seo_score(500, 5, 15.0, Some(8.0), &weights());
        let in_band = seo_score(500, 5, 15.0, Some(2.0), &weights());
        assert!(stuffed < in_band);
        assert_eq!(stuffed, 75);
    }

    #[test]
    fn missing_keyword_earns_nothing() {
        assert_eq!(seo_score(500, 5, 15.0, Some(0.0), &weights()), 70);
    }

    #[test]
    fn sentence_near_band_earns_half() {
        let near = seo_score(500, 5, 22.0, None, &weights());
        let over = seo_score(500, 5, 30.0, None, &weights());
        assert_eq!(near, 75);
        assert_eq!(over, 65);
    }

    #[test]
    fn score_never_exceeds_100() {
        for words in [0, 50, 150, 301, 5000] {
            for paras in [0, 1, 3, 12] {
                for density in [None, Some(0.0), Some(2.0), Some(4.0), Some(9.9)] {
                    let s = seo_score(words, paras, 18.0, density, &weights());
                    assert!(s <= 100);
                }
            }
        }
    }
}
