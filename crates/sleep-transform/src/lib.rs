//! Sleep journal cleaning.
//!
//! Turns tagged journal rows into rows with unambiguous `DD/MM/YYYY` dates:
//!
//! 1. **Filter**: drop sentinel rows and dead days, tag dateless rows that
//!    still carry sleep times as continuations ([`filter_anomalies`]).
//! 2. **Pass 1**: fold over the surviving rows, expanding short years and
//!    inferring missing ones from the January rollover ([`infer_years`]).
//! 3. **Pass 2**: recompute every year from the month sequence so the
//!    result is monotonic ([`enforce_monotonic_years`]).
//!
//! The whole run is sequential; any error aborts it without output.
//!
//! # Example
//!
//! ```ignore
//! use sleep_transform::clean_journal;
//!
//! let cleaned = clean_journal(records, 2023)?;
//! for record in &cleaned.records {
//!     println!("{}", record.date);
//! }
//! ```

mod date_text;
mod disambiguate;
mod error;
mod filter;
mod rollover;

use serde::Serialize;
use tracing::info;

use sleep_model::{RawRecord, ResolvedRecord};

pub use date_text::{DateText, parse_date_text};
pub use disambiguate::{Anchor, InferenceStats, infer_years};
pub use error::{Result, TransformError};
pub use filter::{DateSource, FilterOutcome, FilterStats, FilteredRecord, filter_anomalies};
pub use rollover::{RolloverState, enforce_monotonic_years};

/// Counters describing one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub rows_read: usize,
    pub filter: FilterStats,
    pub inference: InferenceStats,
    /// Rows whose pass-1 year was replaced by pass 2.
    pub years_corrected: usize,
}

/// Output of [`clean_journal`].
#[derive(Debug, Clone)]
pub struct CleanedJournal {
    pub records: Vec<ResolvedRecord>,
    pub stats: CleanStats,
}

/// Run the filter and both disambiguation passes.
///
/// `start_year` is the calendar year of the first journal entry. A January
/// rollover past `i32::MAX` fails with [`TransformError::YearOutOfRange`].
pub fn clean_journal(records: Vec<RawRecord>, start_year: i32) -> Result<CleanedJournal> {
    let rows_read = records.len();
    let FilterOutcome {
        records: filtered,
        stats: filter,
    } = filter_anomalies(records);
    info!(
        rows_read,
        kept = filtered.len(),
        sentinel = filter.sentinel,
        dead_day = filter.dead_day,
        "anomaly filter complete"
    );

    let (mut resolved, inference) = infer_years(filtered, start_year)?;
    let years_corrected = enforce_monotonic_years(&mut resolved, start_year)?;
    info!(
        rows = resolved.len(),
        inferred = inference.inferred,
        expanded = inference.expanded,
        years_corrected,
        "dates resolved"
    );

    Ok(CleanedJournal {
        records: resolved,
        stats: CleanStats {
            rows_read,
            filter,
            inference,
            years_corrected,
        },
    })
}
