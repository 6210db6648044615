//! Suggest command — optimization suggestions from content or a saved report.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscope_core::report::AnalysisSnapshot;
use seoscope_core::{Priority, analyzer, suggest};

use super::read_input_file;

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Content file to analyze, or a saved report with --from-report.
    pub file: Utf8PathBuf,

    /// Target keyword for the keyword-usage rules.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Treat FILE as a JSON analysis report instead of content.
    ///
    /// Missing report fields default to zero, so partial reports still
    /// produce suggestions.
    #[arg(long)]
    pub from_report: bool,
}

/// Generate optimization suggestions.
#[instrument(name = "cmd_suggest", skip_all, fields(file = %args.file, from_report = args.from_report))]
pub fn cmd_suggest(
    args: SuggestArgs,
    global_json: bool,
    config_keyword: Option<&str>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = ?args.keyword, "executing suggest command");

    let input = read_input_file(&args.file, max_input_bytes)?;
    let keyword = args.keyword.as_deref().or(config_keyword);

    let snapshot: AnalysisSnapshot = if args.from_report {
        serde_json::from_str(&input)
            .with_context(|| format!("{} is not a JSON analysis report", args.file))?
    } else {
        let report = analyzer::analyze(&input, keyword)
            .with_context(|| format!("failed to analyze {}", args.file))?;
        AnalysisSnapshot::from(&report)
    };

    let suggestions = suggest::suggestions(&snapshot, keyword);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{} no optimization issues found", "OK:".green());
        return Ok(());
    }

    println!("{}", args.file.bold());
    for s in &suggestions {
        let priority = match s.priority {
            Priority::High => s.priority.as_str().red().to_string(),
            Priority::Medium => s.priority.as_str().yellow().to_string(),
            Priority::Low => s.priority.as_str().green().to_string(),
        };
        println!("\n  {} [{priority}] {}", s.kind.cyan(), s.suggestion);
        println!("    current: {}  target: {}", s.current, s.target.dimmed());
    }

    Ok(())
}
