//! Header resolution for journal files.

use std::path::Path;

use crate::error::{IngestError, Result};

pub const DATE_COLUMN: &str = "Date";
pub const ONSET_COLUMN: &str = "Onset";
pub const WAKEUP_COLUMN: &str = "Wakeup";
pub const DURATION_COLUMN: &str = "Duration";

/// Positions of the journal columns within a CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalColumns {
    pub date: usize,
    pub onset: usize,
    pub wakeup: usize,
    /// Older journals have no duration column.
    pub duration: Option<usize>,
}

impl JournalColumns {
    /// Locate the journal columns by name, ignoring case, whitespace and a UTF-8 BOM.
    pub fn from_headers<S: AsRef<str>>(headers: &[S], source: &Path) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header.as_ref()).eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: source.to_path_buf(),
            })
        };
        Ok(Self {
            date: require(DATE_COLUMN)?,
            onset: require(ONSET_COLUMN)?,
            wakeup: require(WAKEUP_COLUMN)?,
            duration: find(DURATION_COLUMN),
        })
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> &str {
    value.trim_start_matches('\u{feff}').trim()
}
