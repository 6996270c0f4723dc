use anyhow::Context;
use chrono::Weekday;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;
use timecraft_core::{BalanceCalculator, CalcConfig, MemorySink, parse_weekday};

mod formatter;

use formatter::FileOutcome;

#[derive(Parser)]
#[command(name = "timetally")]
#[command(about = "Timesheet balance calculator for spreadsheet exports", long_about = None)]
#[command(version)]
struct Cli {
    /// Spreadsheet files to process
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Name of the duration column
    #[arg(short = 'D', long)]
    duration_column: Option<String>,

    /// Name of the date column
    #[arg(short = 'A', long)]
    date_column: Option<String>,

    /// Expected working hours per week
    #[arg(short = 'H', long = "hours")]
    hours_per_week: Option<f64>,

    /// Minimum hours per day to alert
    #[arg(short = 'd', long)]
    min_daily_hours: Option<f64>,

    /// Minimum hours per week to alert
    #[arg(short = 'm', long)]
    min_weekly_hours: Option<f64>,

    /// Reject rows whose date falls before this year
    #[arg(long)]
    min_year: Option<i32>,

    /// First day of the week used for bucketing
    #[arg(long, value_parser = parse_weekday)]
    week_start: Option<Weekday>,

    /// Decimal places for displayed hour values
    #[arg(long)]
    decimals: Option<i64>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Show row-level diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(2);
        }
    };

    let unreadable: Vec<_> = cli
        .files
        .iter()
        .filter(|path| std::fs::metadata(path).is_err())
        .map(|path| path.display().to_string())
        .collect();
    if !unreadable.is_empty() {
        eprintln!("Cannot read [{}]", unreadable.join(", "));
        std::process::exit(2);
    }

    let calculator = match BalanceCalculator::new(config) {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    // Each file gets its own sink, so parallel processing cannot interleave
    // the per-file message streams.
    let outcomes: Vec<FileOutcome> = cli
        .files
        .par_iter()
        .map(|path| {
            let sink = MemorySink::new();
            let report = calculator.calculate_file(path, &sink);
            FileOutcome {
                path: path.clone(),
                report,
                messages: sink.into_messages(),
            }
        })
        .collect();

    let decimals = calculator.config().decimals;
    match cli.format {
        OutputFormat::Human => formatter::print_human(&outcomes, cli.verbose, decimals),
        OutputFormat::Json => {
            if let Err(err) = formatter::print_json(&outcomes) {
                eprintln!("{err:#}");
                std::process::exit(1);
            }
        }
    }

    let failed = outcomes.iter().any(|outcome| outcome.report.is_err());
    std::process::exit(if failed { 1 } else { 0 });
}

/// Merge settings: explicit CLI flags beat the config file, which beats the
/// defaults. The config file comes from --config, else ./timetally.toml if
/// one exists.
fn build_config(cli: &Cli) -> anyhow::Result<CalcConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        CalcConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        let default_config_path = PathBuf::from("timetally.toml");
        if default_config_path.exists() {
            CalcConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            CalcConfig::default()
        }
    };

    if let Some(name) = &cli.duration_column {
        config.duration_column = name.clone();
    }
    if let Some(name) = &cli.date_column {
        config.date_column = name.clone();
    }
    if let Some(hours) = cli.hours_per_week {
        config.expected_per_week = hours;
    }
    if let Some(hours) = cli.min_daily_hours {
        config.min_daily = hours;
    }
    if let Some(hours) = cli.min_weekly_hours {
        config.min_weekly = hours;
    }
    if let Some(year) = cli.min_year {
        config.min_year = Some(year);
    }
    if let Some(day) = cli.week_start {
        config.week_start = day;
    }
    if let Some(decimals) = cli.decimals {
        config.decimals = decimals;
    }

    Ok(config)
}
