//! Cleaned journal serialization.
//!
//! Writes resolved records back out as CSV with the date rendered as
//! `DD/MM/YYYY`. Time cells are copied as they were read.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use sleep_model::ResolvedRecord;

/// Header row of a cleaned journal.
pub const CLEANED_HEADERS: [&str; 4] = ["Date", "Onset", "Wakeup", "Duration"];

/// Suffix added to the input file stem for the default output name.
pub const CLEANED_SUFFIX: &str = "_cleaned";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// `assets/sleep_journal.csv` becomes `assets/sleep_journal_cleaned.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sleep_journal".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    input.with_file_name(format!("{stem}{CLEANED_SUFFIX}.{extension}"))
}

/// Write records to `path`, replacing any existing file.
pub fn write_cleaned_journal(path: &Path, records: &[ResolvedRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_cleaned_journal_to(file, records, path)?;
    info!(path = %path.display(), rows = records.len(), "cleaned journal written");
    Ok(())
}

/// Write records to any writer. `target` is only used in errors.
pub fn write_cleaned_journal_to<W: Write>(
    writer: W,
    records: &[ResolvedRecord],
    target: &Path,
) -> Result<()> {
    let csv_error = |e: csv::Error| OutputError::CsvWrite {
        path: target.to_path_buf(),
        message: e.to_string(),
    };
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CLEANED_HEADERS).map_err(csv_error)?;
    for record in records {
        let date = record.date.to_string();
        let times = &record.times;
        writer
            .write_record([
                date.as_str(),
                times.onset.as_deref().unwrap_or_default(),
                times.wakeup.as_deref().unwrap_or_default(),
                times.duration.as_deref().unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|e| OutputError::FileWrite {
        path: target.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
