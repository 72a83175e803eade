//! Forward year inference (pass 1).
//!
//! Most journal rows are written as `DD/MM`, so the only signal that a year
//! has passed is the month moving into January. Each row's year therefore
//! depends on the fully resolved row before it, and the rows are folded
//! strictly in order with the previous date carried in the accumulator.

use serde::Serialize;
use tracing::debug;

use sleep_model::{JournalDate, ResolvedRecord};

use crate::date_text::{DateText, parse_date_text};
use crate::error::{Result, TransformError};
use crate::filter::{DateSource, FilteredRecord};

/// What the next row's year is inferred from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Nothing resolved yet; only the configured start year is known.
    Seed { year: i32 },
    /// The previous resolved date.
    Resolved(JournalDate),
}

impl Anchor {
    pub fn year(&self) -> i32 {
        match self {
            Anchor::Seed { year } => *year,
            Anchor::Resolved(date) => date.year,
        }
    }

    pub fn month(&self) -> Option<u32> {
        match self {
            Anchor::Seed { .. } => None,
            Anchor::Resolved(date) => Some(date.month),
        }
    }

    /// Year for a `DD/MM` row with the given month.
    ///
    /// Entering January from any other month (or from the seed) starts a new
    /// year. Two Januaries in a row never do, even if a whole year was skipped.
    /// `None` when the new year would overflow.
    pub fn infer_year(&self, month: u32) -> Option<i32> {
        if month == 1 && self.month() != Some(1) {
            self.year().checked_add(1)
        } else {
            Some(self.year())
        }
    }
}

/// Counts of how pass 1 resolved each row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InferenceStats {
    /// `DD/MM` rows whose year came from the rollover heuristic.
    pub inferred: usize,
    /// `DD/MM/YY` rows expanded to four digits.
    pub expanded: usize,
    /// `DD/MM/YYYY` rows taken as written.
    pub explicit: usize,
}

struct Pass {
    anchor: Anchor,
    resolved: Vec<ResolvedRecord>,
    stats: InferenceStats,
}

impl Pass {
    fn step(mut self, record: FilteredRecord) -> Result<Self> {
        let date = match &record.source {
            DateSource::Inherit => match self.anchor {
                Anchor::Resolved(previous) => previous,
                Anchor::Seed { .. } => {
                    return Err(TransformError::OrphanContinuation { row: record.row });
                }
            },
            DateSource::Resolve(text) => match parse_date_text(text, record.row)? {
                DateText::DayMonth { day, month } => {
                    self.stats.inferred += 1;
                    let year = self.anchor.infer_year(month).ok_or(
                        TransformError::YearOutOfRange {
                            row: record.row,
                            year: self.anchor.year(),
                        },
                    )?;
                    JournalDate::new(day, month, year).ok_or_else(|| {
                        TransformError::MalformedDateToken {
                            row: record.row,
                            raw: text.clone(),
                        }
                    })?
                }
                DateText::ShortYear(date) => {
                    self.stats.expanded += 1;
                    date
                }
                DateText::FullYear(date) => {
                    self.stats.explicit += 1;
                    date
                }
            },
        };
        debug!(row = record.row, %date, "pass 1 resolved");
        self.anchor = Anchor::Resolved(date);
        self.resolved.push(ResolvedRecord {
            row: record.row,
            date,
            times: record.times,
        });
        Ok(self)
    }
}

/// Resolve every filtered row to a full date, inferring missing years.
///
/// Fails on the first malformed row; no partial result is returned.
pub fn infer_years(
    records: Vec<FilteredRecord>,
    start_year: i32,
) -> Result<(Vec<ResolvedRecord>, InferenceStats)> {
    let initial = Pass {
        anchor: Anchor::Seed { year: start_year },
        resolved: Vec::with_capacity(records.len()),
        stats: InferenceStats::default(),
    };
    let pass = records.into_iter().try_fold(initial, Pass::step)?;
    Ok((pass.resolved, pass.stats))
}
