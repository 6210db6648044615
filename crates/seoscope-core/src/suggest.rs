//! Optimization suggestions derived from a completed analysis.
//!
//! The engine is a fixed, ordered table of independent rules. Every rule is
//! evaluated against the snapshot (no early exit) and each rule that fires
//! emits one suggestion, so the output order always follows the table.
//! Rules read the [`AnalysisSnapshot`], never the raw text.

use crate::report::{AnalysisSnapshot, Priority, Suggestion};

/// Word count below which content is considered thin.
pub const MIN_WORDS: usize = 300;

/// Readability below this reads as very hard.
pub const HARD_READABILITY: f64 = 30.0;

/// Readability above this reads as too simplistic.
pub const SIMPLISTIC_READABILITY: f64 = 90.0;

/// Keyword density above this is stuffing, in percent.
pub const STUFFING_DENSITY: f64 = 5.0;

/// Minimum paragraph count for acceptable structure.
pub const MIN_PARAGRAPHS: usize = 3;

/// Inputs shared by every suggestion rule.
struct RuleContext<'a> {
    analysis: &'a AnalysisSnapshot,
    keyword: Option<&'a str>,
    /// `keyword_density` with the missing-field zero default applied.
    density: f64,
}

type Predicate = for<'a> fn(&RuleContext<'a>) -> bool;
type Builder = for<'a> fn(&RuleContext<'a>) -> Suggestion;

/// The rule table. Order is the output order.
const RULES: &[(Predicate, Builder)] = &[
    (|ctx| ctx.analysis.word_count < MIN_WORDS, content_length),
    (
        |ctx| ctx.analysis.readability_score < HARD_READABILITY,
        hard_to_read,
    ),
    (
        |ctx| ctx.analysis.readability_score > SIMPLISTIC_READABILITY,
        too_simplistic,
    ),
    (
        |ctx| ctx.keyword.is_some() && ctx.density == 0.0,
        keyword_missing,
    ),
    (|ctx| ctx.density > STUFFING_DENSITY, keyword_stuffing),
    (
        |ctx| ctx.analysis.paragraph_count < MIN_PARAGRAPHS,
        structure,
    ),
];

/// Generate suggestions for an analysis snapshot.
///
/// Total over any snapshot: missing fields were already defaulted to zero
/// during deserialization, and a blank keyword is treated as absent.
#[tracing::instrument(skip_all, fields(keyword = target_keyword.is_some()))]
pub fn suggestions(analysis: &AnalysisSnapshot, target_keyword: Option<&str>) -> Vec<Suggestion> {
    let keyword = target_keyword.map(str::trim).filter(|k| !k.is_empty());
    let ctx = RuleContext {
        analysis,
        keyword,
        density: analysis.keyword_density.unwrap_or(0.0),
    };

    RULES
        .iter()
        .filter(|(applies, _)| applies(&ctx))
        .map(|(_, build)| build(&ctx))
        .collect()
}

fn content_length(ctx: &RuleContext<'_>) -> Suggestion {
    Suggestion {
        kind: "Content Length".to_string(),
        suggestion: format!(
            "Increase content length to at least {MIN_WORDS} words for better search visibility"
        ),
        current: format!("{} words", ctx.analysis.word_count),
        target: format!("{MIN_WORDS}+ words"),
        priority: Priority::High,
    }
}

fn hard_to_read(ctx: &RuleContext<'_>) -> Suggestion {
    Suggestion {
        kind: "Readability".to_string(),
        suggestion: "Improve readability by using shorter sentences and simpler words".to_string(),
        current: format!("{} score", ctx.analysis.readability_score),
        target: "60+ score".to_string(),
        priority: Priority::Medium,
    }
}

fn too_simplistic(ctx: &RuleContext<'_>) -> Suggestion {
    Suggestion {
        kind: "Readability".to_string(),
        suggestion: "Content may be too simplistic; vary sentence length to keep readers engaged"
            .to_string(),
        current: format!("{} score", ctx.analysis.readability_score),
        target: "60-90 score".to_string(),
        priority: Priority::Low,
    }
}

fn keyword_missing(ctx: &RuleContext<'_>) -> Suggestion {
    let keyword = ctx.keyword.unwrap_or_default();
    Suggestion {
        kind: "Keyword Usage".to_string(),
        suggestion: format!("Increase usage of target keyword \"{keyword}\""),
        current: format!("{}% density", ctx.density),
        target: "1-3% density".to_string(),
        priority: Priority::High,
    }
}

fn keyword_stuffing(ctx: &RuleContext<'_>) -> Suggestion {
    let suggestion = ctx.keyword.map_or_else(
        || "Reduce keyword stuffing".to_string(),
        |k| format!("Reduce keyword stuffing for \"{k}\""),
    );
    Suggestion {
        kind: "Keyword Usage".to_string(),
        suggestion,
        current: format!("{}% density", ctx.density),
        target: "1-3% density".to_string(),
        priority: Priority::Medium,
    }
}

fn structure(ctx: &RuleContext<'_>) -> Suggestion {
    Suggestion {
        kind: "Content Structure".to_string(),
        suggestion: "Break content into more paragraphs for better readability".to_string(),
        current: format!("{} paragraphs", ctx.analysis.paragraph_count),
        target: format!("{MIN_PARAGRAPHS}+ paragraphs"),
        priority: Priority::Medium,
    }
}
