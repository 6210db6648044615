//! Report structs for content analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full content analysis report.
///
/// A flat record: every metric is computed fresh per request and the whole
/// report is discarded after the response is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Whitespace-delimited token count (punctuation-only tokens included).
    pub word_count: usize,
    /// Character count, whitespace included.
    pub char_count: usize,
    /// Character count with spaces removed.
    pub char_count_no_spaces: usize,
    /// Blocks separated by blank lines.
    pub paragraph_count: usize,
    /// Fragments produced by splitting on `.`/`!`/`?` (at least 1 for
    /// non-empty content).
    pub sentence_count: usize,
    /// `word_count / max(sentence_count, 1)`, rounded to 2 decimals.
    pub avg_words_per_sentence: f64,
    /// Approximate Flesch Reading Ease. Typically 0-100 but deliberately
    /// unclamped; very short or very long sentences push it out of range.
    pub readability_score: f64,
    /// Percentage of words matching the target keyword. Omitted when no
    /// keyword was supplied; 0 when the keyword never appears.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_density: Option<f64>,
    /// Composite SEO score, 0-100.
    pub seo_score: u8,
    /// Up to 10 `[word, count]` pairs, frequency descending, ties broken
    /// by first occurrence.
    pub top_keywords: Vec<(String, usize)>,
}

/// Suggestion priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    /// Fix first.
    High,
    /// Worth addressing.
    Medium,
    /// Nice to have.
    Low,
}

impl Priority {
    /// Returns the priority as a display string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single optimization suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Category, e.g. "Content Length" or "Keyword Usage".
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable advice.
    pub suggestion: String,
    /// The observed value, as a display string.
    pub current: String,
    /// The desired value or range, as a display string.
    pub target: String,
    /// How urgent the fix is.
    pub priority: Priority,
}

/// The subset of an [`AnalysisReport`] the suggestion rules read.
///
/// Deserialization is permissive: missing fields take their zero value and
/// unknown fields are ignored, so suggestion generation is total over any
/// report-shaped mapping (including hand-edited or truncated ones).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisSnapshot {
    /// See [`AnalysisReport::word_count`].
    pub word_count: usize,
    /// See [`AnalysisReport::readability_score`].
    pub readability_score: f64,
    /// See [`AnalysisReport::keyword_density`].
    pub keyword_density: Option<f64>,
    /// See [`AnalysisReport::paragraph_count`].
    pub paragraph_count: usize,
}

impl From<&AnalysisReport> for AnalysisSnapshot {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            word_count: report.word_count,
            readability_score: report.readability_score,
            keyword_density: report.keyword_density,
            paragraph_count: report.paragraph_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_keywords_serialize_as_pairs() {
        let report = AnalysisReport {
            word_count: 3,
            char_count: 11,
            char_count_no_spaces: 9,
            paragraph_count: 1,
            sentence_count: 1,
            avg_words_per_sentence: 3.0,
            readability_score: 76.9,
            keyword_density: None,
            seo_score: 30,
            top_keywords: vec![("cat".to_string(), 2), ("dog".to_string(), 1)],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["top_keywords"][0][0], "cat");
        assert_eq!(json["top_keywords"][0][1], 2);
        // keyword_density omitted entirely when no keyword was supplied
        assert!(json.get("keyword_density").is_none());
    }

    #[test]
    fn snapshot_tolerates_missing_and_unknown_fields() {
        let snapshot: AnalysisSnapshot =
            serde_json::from_str(r#"{"word_count": 120, "seo_score": 40}"#).unwrap();
        assert_eq!(snapshot.word_count, 120);
        assert_eq!(snapshot.readability_score, 0.0);
        assert_eq!(snapshot.paragraph_count, 0);
        assert!(snapshot.keyword_density.is_none());
    }

    #[test]
    fn suggestion_type_field_renames() {
        let suggestion = Suggestion {
            kind: "Content Length".to_string(),
            suggestion: "write more".to_string(),
            current: "10 words".to_string(),
            target: "300+ words".to_string(),
            priority: Priority::High,
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "Content Length");
        assert_eq!(json["priority"], "High");
    }
}
