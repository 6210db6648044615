//! Analyze command — full content metrics, keywords, and SEO score.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscope_core::analyzer;

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Target keyword for density and SEO scoring.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Minimum acceptable SEO score (0-100); exits non-zero below it.
    #[arg(long)]
    pub min_score: Option<u8>,
}

/// Run full content analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_keyword: Option<&str>,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = ?args.keyword, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let keyword = args.keyword.as_deref().or(config_keyword);
    let min_score = args.min_score.or(config_min_score);

    let report = analyzer::analyze(&content, keyword)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return gate(min_score, report.seo_score, &args.file);
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    println!(
        "\n  {} {} words, {} chars, {} paragraphs, {} sentences",
        "Counts:".cyan(),
        report.word_count,
        report.char_count,
        report.paragraph_count,
        report.sentence_count,
    );

    println!(
        "\n  {} {:.2} avg words/sentence, readability {:.2}",
        "Reading:".cyan(),
        report.avg_words_per_sentence,
        report.readability_score,
    );

    if let Some(density) = report.keyword_density {
        println!(
            "\n  {} \"{}\" at {:.2}% density",
            "Keyword:".cyan(),
            keyword.unwrap_or_default(),
            density,
        );
    }

    if !report.top_keywords.is_empty() {
        let top: Vec<String> = report
            .top_keywords
            .iter()
            .take(5)
            .map(|(word, count)| format!("\"{word}\" ({count})"))
            .collect();
        println!("\n  {} {}", "Top keywords:".cyan(), top.join(", "));
    }

    let score_str = if report.seo_score >= 80 {
        format!("{}", report.seo_score).green().to_string()
    } else if report.seo_score >= 60 {
        format!("{}", report.seo_score).yellow().to_string()
    } else {
        format!("{}", report.seo_score).red().to_string()
    };
    println!("\n  {} {}/100", "SEO score:".cyan(), score_str);

    gate(min_score, report.seo_score, &args.file)
}

/// Check the SEO score gate.
fn gate(min_score: Option<u8>, seo_score: u8, file: &Utf8Path) -> anyhow::Result<()> {
    if let Some(min) = min_score
        && seo_score < min
    {
        bail!(
            "{} SEO score {} is below minimum {} — see `seoscope suggest` for fixes.",
            file,
            seo_score,
            min,
        );
    }
    Ok(())
}
