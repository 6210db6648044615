//! Readability command — approximate Flesch Reading Ease scoring.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use seoscope_core::analyzer;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable readability score; exits non-zero below it.
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Serialize)]
struct ReadabilityOutput {
    readability_score: f64,
    word_count: usize,
    sentence_count: usize,
    avg_words_per_sentence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
    below_min: bool,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let min_score = args.min_score.or(config_min_score);

    let report = analyzer::analyze(&content, None)
        .with_context(|| format!("failed to score readability of {}", args.file))?;
    let below_min = min_score.is_some_and(|min| report.readability_score < min);

    if global_json {
        let output = ReadabilityOutput {
            readability_score: report.readability_score,
            word_count: report.word_count,
            sentence_count: report.sentence_count,
            avg_words_per_sentence: report.avg_words_per_sentence,
            min_score,
            below_min,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if below_min {
        let min = min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.2} (min: {:.0}). Shorten sentences to raise the score.",
            args.file,
            report.readability_score,
            min,
        );
    } else if let Some(min) = min_score {
        println!(
            "{} {} scores {:.2} (min: {:.0})",
            "PASS:".green(),
            args.file,
            report.readability_score,
            min,
        );
    } else {
        println!("{:.2}", report.readability_score);
    }

    Ok(())
}
