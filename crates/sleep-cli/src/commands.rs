use anyhow::{Context, Result};
use tracing::info;

use sleep_cli::pipeline::{CleanRequest, ingest, run_clean_pipeline};
use sleep_cli::types::CleanResult;
use sleep_report::{JournalReport, ReportOptions, build_report};

use crate::cli::{CleanArgs, ReportArgs};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let request = CleanRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        start_year: args.start_year,
        dry_run: args.dry_run,
    };
    run_clean_pipeline(&request)
}

pub fn run_report(args: &ReportArgs) -> Result<JournalReport> {
    let records = ingest(&args.input)?;
    let options = ReportOptions {
        recent_days: args.days,
        long_session_hours: args.long_session_hours,
        long_day_hours: args.long_day_hours,
    };
    let report = build_report(&records, &options);
    info!(
        entries = report.entries,
        days = report.daily.len(),
        invalid_dates = report.invalid_dates.len(),
        "report built"
    );
    Ok(report)
}

pub fn report_json(report: &JournalReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}
