//! Output formatters for reports and diagnostics

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use timecraft_core::{Level, Message, WeeklyReport, format_hours};

/// Everything produced while processing one input file
pub struct FileOutcome {
    pub path: PathBuf,
    pub report: Result<WeeklyReport>,
    pub messages: Vec<Message>,
}

/// Print reports to stdout and diagnostics to stderr.
///
/// Info messages are shown only in verbose mode; warnings and alerts always.
pub fn print_human(outcomes: &[FileOutcome], verbose: bool, decimals: i64) {
    for outcome in outcomes {
        for message in &outcome.messages {
            match message.level {
                Level::Info => {
                    if verbose {
                        eprintln!("{} {}", "INFO".blue().bold(), message.text);
                    }
                }
                Level::Warning => eprintln!("{} {}", "WARN".yellow().bold(), message.text),
                Level::Alert => eprintln!("{} {}", "ALERT".red().bold(), message.text),
            }
        }

        match &outcome.report {
            Ok(report) => {
                println!("{} {}", "File:".bold(), report.input);
                println!("{} {}", "Balance:".bold(), format_hours(report.balance, decimals));
                if report.skipped_rows > 0 {
                    println!("{} {}", "Skipped rows:".bold(), report.skipped_rows);
                }
            }
            Err(err) => {
                eprintln!(
                    "{} {}: {err:#}",
                    "ERROR".red().bold(),
                    outcome.path.display()
                );
            }
        }
    }
}

/// Print one JSON document covering all files
pub fn print_json(outcomes: &[FileOutcome]) -> Result<()> {
    let files: Vec<_> = outcomes
        .iter()
        .map(|outcome| match &outcome.report {
            Ok(report) => serde_json::json!({
                "file": outcome.path.display().to_string(),
                "balance": report.balance,
                "skipped_rows": report.skipped_rows,
                "per_week": report.per_week,
                "messages": outcome.messages,
            }),
            Err(err) => serde_json::json!({
                "file": outcome.path.display().to_string(),
                "error": format!("{err:#}"),
            }),
        })
        .collect();

    let output = serde_json::json!({ "files": files });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
