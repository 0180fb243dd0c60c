//! Count command — word frequencies over files or stdin.

use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{
    OwoColorize,
    Stream::{Stderr, Stdout},
};
use tracing::{debug, instrument};

use wordstat_core::{FrequencyReport, WordStatistics, markdown, text};

use super::{read_input_file, read_stdin};

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Files to read. Reads stdin when none are given.
    pub files: Vec<Utf8PathBuf>,

    /// Show only the N most frequent words.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Hide words recorded fewer than N times.
    #[arg(long, value_name = "N")]
    pub min_count: Option<usize>,

    /// Count markdown files verbatim instead of extracting prose.
    #[arg(long)]
    pub raw: bool,
}

/// Count word frequencies and print the ranking, least frequent first.
///
/// Stdout carries only ranking lines. The totals summary goes to stderr
/// unless `quiet` is set.
#[instrument(name = "cmd_count", skip_all, fields(files = args.files.len()))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    quiet: bool,
    config_top: Option<usize>,
    config_min_count: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, top = ?args.top, min_count = ?args.min_count, "executing count command");

    let mut stats = WordStatistics::new();

    if args.files.is_empty() {
        let content = read_stdin(max_input_bytes)?;
        stats.record_all(text::words(&content));
    } else {
        let progress = if args.files.len() > 1 {
            let bar = ProgressBar::new(args.files.len() as u64);
            bar.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")?);
            bar
        } else {
            ProgressBar::hidden()
        };

        for file in &args.files {
            progress.set_message(file.to_string());
            let content = read_input_file(file, max_input_bytes)?;
            let before = stats.total();
            if !args.raw && file.extension() == Some("md") {
                stats.record_all(text::words(&markdown::strip_to_prose(&content)));
            } else {
                stats.record_all(text::words(&content));
            }
            debug!(file = %file, words = stats.total() - before, "counted file");
            progress.inc(1);
        }
        progress.finish_and_clear();
    }

    let top = args.top.or(config_top);
    let min_count = args.min_count.or(config_min_count);
    let report = FrequencyReport::build(&stats, min_count, top);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = report
        .entries
        .last()
        .map_or(1, |e| e.count.to_string().len());
    for entry in &report.entries {
        let count = format!("{:>width$}", entry.count);
        println!("{} {}", count.if_supports_color(Stdout, |t| t.cyan()), entry.word);
    }
    if !quiet {
        let summary = format!(
            "{} words, {} distinct",
            report.total_words, report.distinct_words
        );
        eprintln!("{}", summary.if_supports_color(Stderr, |t| t.dimmed()));
    }

    Ok(())
}
