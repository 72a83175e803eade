//! Anomaly filter: drops sentinel and dead-day rows, tags the rest.

use serde::Serialize;
use tracing::debug;

use sleep_model::{DateField, RawRecord, SleepTimes};

/// How the disambiguator obtains a surviving row's date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSource {
    /// Parse this date text.
    Resolve(String),
    /// Reuse the previous resolved date (lazily filled continuation row).
    Inherit,
}

/// A row that survived the anomaly filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRecord {
    pub row: usize,
    pub source: DateSource,
    pub times: SleepTimes,
}

/// Counts of what the filter did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Rows carrying the "no sleep" sentinel.
    pub sentinel: usize,
    /// Rows with no date and no sleep times.
    pub dead_day: usize,
    /// Dateless rows kept as continuations.
    pub inherited: usize,
}

impl FilterStats {
    pub fn dropped(&self) -> usize {
        self.sentinel + self.dead_day
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub records: Vec<FilteredRecord>,
    pub stats: FilterStats,
}

enum Verdict {
    DropSentinel,
    DropDeadDay,
    Keep(DateSource),
}

fn classify(record: &RawRecord) -> Verdict {
    match &record.date {
        DateField::Sentinel => Verdict::DropSentinel,
        DateField::Missing if !record.times.has_sleep_times() => Verdict::DropDeadDay,
        DateField::Missing => Verdict::Keep(DateSource::Inherit),
        DateField::Text(text) => Verdict::Keep(DateSource::Resolve(text.clone())),
    }
}

/// Build the ordered list of surviving rows.
///
/// The input is consumed and a new sequence is built; nothing is removed by
/// position, so row order and row numbers stay intact.
pub fn filter_anomalies(records: Vec<RawRecord>) -> FilterOutcome {
    let mut outcome = FilterOutcome {
        records: Vec::with_capacity(records.len()),
        stats: FilterStats::default(),
    };
    for record in records {
        match classify(&record) {
            Verdict::DropSentinel => {
                debug!(row = record.row, "dropping sentinel row");
                outcome.stats.sentinel += 1;
            }
            Verdict::DropDeadDay => {
                debug!(row = record.row, "dropping dead day");
                outcome.stats.dead_day += 1;
            }
            Verdict::Keep(source) => {
                if source == DateSource::Inherit {
                    outcome.stats.inherited += 1;
                }
                outcome.records.push(FilteredRecord {
                    row: record.row,
                    source,
                    times: record.times,
                });
            }
        }
    }
    outcome
}
