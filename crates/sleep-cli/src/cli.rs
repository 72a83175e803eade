//! CLI argument definitions for the sleep journal tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sleep-journal",
    version,
    about = "Clean and summarize a sleep journal",
    long_about = "Clean a sleep journal whose dates mix DD/MM, DD/MM/YY and DD/MM/YYYY.\n\n\
                  Missing years are inferred from row order: entering January starts a new year.\n\
                  Rows marked NUIT BLANCHE and empty rows are dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow journal contents in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve every date to DD/MM/YYYY and write a cleaned copy.
    Clean(CleanArgs),

    /// Summarize a cleaned journal.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Journal CSV with Date, Onset, Wakeup and optional Duration columns.
    #[arg(value_name = "JOURNAL")]
    pub input: PathBuf,

    /// Calendar year of the first journal entry.
    #[arg(
        long = "start-year",
        value_name = "YEAR",
        value_parser = clap::value_parser!(i32).range(1000..=9999)
    )]
    pub start_year: i32,

    /// Output file (default: <JOURNAL stem>_cleaned.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the full cleaning without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Cleaned journal CSV (dates in DD/MM/YYYY).
    #[arg(value_name = "CLEANED_JOURNAL")]
    pub input: PathBuf,

    /// Number of days, ending at the latest entry, in the recent window.
    #[arg(long = "days", default_value_t = 7)]
    pub days: u32,

    /// List single sessions longer than this many hours.
    #[arg(long = "long-session-hours", default_value_t = 10.0)]
    pub long_session_hours: f64,

    /// List days whose total sleep exceeds this many hours.
    #[arg(long = "long-day-hours", default_value_t = 12.0)]
    pub long_day_hours: f64,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
