//! Keywords command — top-frequency keyword listing.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscope_core::analyzer;

use super::read_input_file;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// List the most frequent keywords in a file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing keywords command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let report = analyzer::analyze(&content, None)
        .with_context(|| format!("failed to extract keywords from {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report.top_keywords)?);
        return Ok(());
    }

    if report.top_keywords.is_empty() {
        println!("{} no ranking keywords found", "NOTE:".yellow());
        return Ok(());
    }

    println!("{}", args.file.bold());
    for (word, count) in &report.top_keywords {
        println!("  {:>4}  {word}", count.to_string().cyan());
    }

    Ok(())
}
