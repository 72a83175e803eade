use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker written in the date column for a night without sleep.
pub const SENTINEL: &str = "NUIT BLANCHE";

/// The date cell of a journal row, tagged once at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DateField {
    /// Empty or whitespace-only cell.
    Missing,
    /// Explicit "no sleep" marker.
    Sentinel,
    /// Any other text, kept trimmed and unparsed.
    Text(String),
}

impl DateField {
    /// Tag a raw cell value.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            DateField::Missing
        } else if trimmed == SENTINEL {
            DateField::Sentinel
        } else {
            DateField::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DateField::Text(text) => Some(text),
            DateField::Missing | DateField::Sentinel => None,
        }
    }
}

/// A fully resolved calendar date (day, month, four-digit year).
///
/// Only day and month ranges are checked; `31/02` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JournalDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl JournalDate {
    /// Returns `None` when the day is outside 1..=31 or the month outside 1..=12.
    pub fn new(day: u32, month: u32, year: i32) -> Option<Self> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { day, month, year })
    }

    #[must_use]
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn is_january(&self) -> bool {
        self.month == 1
    }

    pub fn is_december(&self) -> bool {
        self.month == 12
    }
}

impl fmt::Display for JournalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}
