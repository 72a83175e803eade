use serde::{Deserialize, Serialize};

use crate::date::{DateField, JournalDate};

/// Onset, wakeup and duration cells, carried through the pipeline untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepTimes {
    pub onset: Option<String>,
    pub wakeup: Option<String>,
    pub duration: Option<String>,
}

impl SleepTimes {
    /// Build from raw cells; empty cells become `None`.
    pub fn new(onset: Option<&str>, wakeup: Option<&str>, duration: Option<&str>) -> Self {
        Self {
            onset: non_empty(onset),
            wakeup: non_empty(wakeup),
            duration: non_empty(duration),
        }
    }

    /// True when either the onset or the wakeup time was recorded.
    pub fn has_sleep_times(&self) -> bool {
        self.onset.is_some() || self.wakeup.is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A journal row as read from the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based data row number in the source (header excluded).
    pub row: usize,
    /// 1-based line in the source file where the row starts. Not `row + 1`
    /// once the file has blank lines or multi-line quoted cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    pub date: DateField,
    pub times: SleepTimes,
}

impl RawRecord {
    pub fn new(row: usize, date: DateField, times: SleepTimes) -> Self {
        Self {
            row,
            line: None,
            date,
            times,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

/// A journal row whose date has been fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub row: usize,
    pub date: JournalDate,
    pub times: SleepTimes,
}
