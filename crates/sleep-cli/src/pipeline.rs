//! Journal cleaning pipeline with explicit stages.
//!
//! 1. **Ingest**: read the journal CSV and tag each date cell
//! 2. **Clean**: filter anomalies, then resolve dates in two passes
//! 3. **Output**: write the cleaned CSV (skipped on dry runs)
//!
//! A failure at any stage aborts the run before anything is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use sleep_ingest::read_journal;
use sleep_model::{DateField, RawRecord, ResolvedRecord};
use sleep_output::{default_output_path, write_cleaned_journal};
use sleep_transform::{CleanedJournal, clean_journal};

use crate::logging::redact_value;
use crate::types::CleanResult;

/// Everything a `clean` run needs.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub start_year: i32,
    pub dry_run: bool,
}

impl CleanRequest {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(input: &Path) -> Result<Vec<RawRecord>> {
    let records = read_journal(input).with_context(|| format!("read {}", input.display()))?;
    for record in &records {
        let date = match &record.date {
            DateField::Missing => "<missing>",
            DateField::Sentinel => "<sentinel>",
            DateField::Text(text) => redact_value(text),
        };
        trace!(row = record.row, date, "ingested row");
    }
    Ok(records)
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

pub fn clean(records: Vec<RawRecord>, start_year: i32) -> Result<CleanedJournal> {
    let lines: Vec<(usize, u64)> = records
        .iter()
        .filter_map(|r| r.line.map(|line| (r.row, line)))
        .collect();
    let cleaned = clean_journal(records, start_year).map_err(|error| {
        let context = match lines.iter().find(|(row, _)| *row == error.row()) {
            Some((_, line)) => format!("resolve journal dates (source line {line})"),
            None => "resolve journal dates".to_string(),
        };
        anyhow::Error::new(error).context(context)
    })?;
    for record in &cleaned.records {
        let date = record.date.to_string();
        trace!(row = record.row, date = redact_value(&date), "resolved row");
    }
    Ok(cleaned)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

pub fn output(path: &Path, records: &[ResolvedRecord]) -> Result<()> {
    write_cleaned_journal(path, records).with_context(|| format!("write {}", path.display()))
}

/// Run all stages for one journal.
pub fn run_clean_pipeline(request: &CleanRequest) -> Result<CleanResult> {
    let span = info_span!(
        "clean",
        input = %request.input.display(),
        start_year = request.start_year
    );
    let _guard = span.enter();
    let started = Instant::now();

    let records = ingest(&request.input)?;
    let cleaned = clean(records, request.start_year)?;

    let output_path = if request.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = request.output_path();
        output(&path, &cleaned.records)?;
        Some(path)
    };

    info!(
        rows = cleaned.records.len(),
        duration_ms = started.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanResult {
        input: request.input.clone(),
        output: output_path,
        start_year: request.start_year,
        stats: cleaned.stats,
        resolved_rows: cleaned.records.len(),
    })
}
