//! Full content analysis.
//!
//! [`analyze`] is the single entry point: it splits the content once, fans
//! out to the metric, readability, keyword, and SEO modules, and assembles
//! a flat [`AnalysisReport`]. The computation is pure and request-scoped —
//! no shared state, no I/O — so concurrent callers need no coordination.

use crate::error::{AnalysisError, AnalysisResult};
use crate::keywords;
use crate::metrics;
use crate::readability;
use crate::report::AnalysisReport;
use crate::seo::{self, SeoWeights};
use crate::text;

/// Analyze a block of content, optionally against a target keyword.
///
/// Empty and whitespace-only content is rejected with
/// [`AnalysisError::EmptyInput`] before any computation starts; every other
/// input produces a report. A keyword that is `Some` but blank after
/// trimming is treated as absent.
#[tracing::instrument(skip_all, fields(text_len = content.len(), keyword = target_keyword.is_some()))]
pub fn analyze(content: &str, target_keyword: Option<&str>) -> AnalysisResult<AnalysisReport> {
    if content.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let counts = metrics::collect_metrics(content);
    let words = text::extract_words(content);

    let keyword = target_keyword.map(str::trim).filter(|k| !k.is_empty());
    let keyword_density =
        keyword.map(|k| keywords::keyword_density(&words, counts.word_count, k));

    let avg_words_per_sentence = round2(counts.avg_words_per_sentence());

    Ok(AnalysisReport {
        word_count: counts.word_count,
        char_count: counts.char_count,
        char_count_no_spaces: counts.char_count_no_spaces,
        paragraph_count: counts.paragraph_count,
        sentence_count: counts.sentence_count,
        avg_words_per_sentence,
        readability_score: readability::approximate_flesch(
            counts.word_count,
            counts.sentence_count,
        ),
        keyword_density,
        seo_score: seo::seo_score(
            counts.word_count,
            counts.paragraph_count,
            avg_words_per_sentence,
            keyword_density,
            &SeoWeights::default(),
        ),
        top_keywords: keywords::top_keywords(&words),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Digital marketing has become essential for modern business.\n\n\
        Search engine optimization plays a crucial role in marketing success. \
        Optimized content improves visibility and attracts organic traffic.\n\n\
        Content marketing builds brand authority and customer trust.";

    #[test]
    fn empty_content_is_rejected() {
        assert!(matches!(analyze("", None), Err(AnalysisError::EmptyInput)));
        assert!(matches!(
            analyze("   \n\n ", None),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn blank_keyword_is_treated_as_absent() {
        let report = analyze(SAMPLE, Some("   ")).unwrap();
        assert!(report.keyword_density.is_none());
    }

    #[test]
    fn counts_cover_the_sample() {
        let report = analyze(SAMPLE, None).unwrap();
        assert_eq!(report.paragraph_count, 3);
        assert_eq!(report.sentence_count, 4);
        assert!(report.word_count >= 30);
        assert!(report.char_count > report.char_count_no_spaces);
    }

    #[test]
    fn density_reported_when_keyword_supplied() {
        let report = analyze(SAMPLE, Some("marketing")).unwrap();
        let density = report.keyword_density.unwrap();
        assert!(density > 0.0);
    }

    #[test]
    fn density_zero_when_keyword_absent_from_text() {
        let report = analyze(SAMPLE, Some("blockchain")).unwrap();
        assert_eq!(report.keyword_density, Some(0.0));
    }

    #[test]
    fn top_keywords_rank_by_frequency() {
        let report = analyze(SAMPLE, None).unwrap();
        assert_eq!(report.top_keywords[0].0, "marketing");
        for pair in report.top_keywords.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert!(report.top_keywords.len() <= 10);
    }

    #[test]
    fn analyze_is_idempotent() {
        let first = analyze(SAMPLE, Some("marketing")).unwrap();
        let second = analyze(SAMPLE, Some("marketing")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn seo_score_in_range_for_varied_inputs() {
        for content in [
            "x",
            "One short sentence.",
            SAMPLE,
            &"word ".repeat(2000),
        ] {
            let report = analyze(content, Some("word")).unwrap();
            assert!(report.seo_score <= 100);
        }
    }

    #[test]
    fn single_word_report_is_consistent() {
        let report = analyze("hello", None).unwrap();
        assert_eq!(report.word_count, 1);
        assert_eq!(report.sentence_count, 1);
        assert_eq!(report.paragraph_count, 1);
        assert_eq!(report.avg_words_per_sentence, 1.0);
    }
}
