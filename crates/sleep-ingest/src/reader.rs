//! CSV reading for journal files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info};

use sleep_model::{DateField, RawRecord, SleepTimes};

use crate::columns::{DURATION_COLUMN, JournalColumns, ONSET_COLUMN, WAKEUP_COLUMN};
use crate::error::{IngestError, Result};

/// Read a journal file into tagged raw records, in file order.
pub fn read_journal(path: &Path) -> Result<Vec<RawRecord>> {
    validate_encoding(path)?;
    let file = open(path)?;
    let records = read_journal_from_reader(file, path)?;
    info!(path = %path.display(), rows = records.len(), "journal read");
    Ok(records)
}

/// Read journal records from any reader. `source` is only used in errors.
pub fn read_journal_from_reader<R: Read>(reader: R, source: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| csv_error(source, &e))?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    let columns = JournalColumns::from_headers(&headers, source)?;
    debug!(?columns, "resolved journal columns");

    let mut records = Vec::new();
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|e| csv_error(source, &e))?;
        records.push(to_raw_record(&record, idx + 1, &columns, source)?);
    }
    Ok(records)
}

fn to_raw_record(
    record: &ByteRecord,
    row: usize,
    columns: &JournalColumns,
    source: &Path,
) -> Result<RawRecord> {
    // Header is line 1; the reader always tracks positions.
    let line = record.position().map_or(row as u64 + 1, csv::Position::line);
    let date = match text_cell(record, Some(columns.date)) {
        Ok(value) => DateField::classify(value.unwrap_or_default()),
        Err(()) => {
            return Err(IngestError::NonTextualDate {
                path: source.to_path_buf(),
                row,
                line,
            });
        }
    };
    let field = |index: Option<usize>, column: &'static str| {
        text_cell(record, index).map_err(|()| IngestError::NonTextualField {
            path: source.to_path_buf(),
            row,
            line,
            column,
        })
    };
    let times = SleepTimes::new(
        field(Some(columns.onset), ONSET_COLUMN)?,
        field(Some(columns.wakeup), WAKEUP_COLUMN)?,
        field(columns.duration, DURATION_COLUMN)?,
    );
    Ok(RawRecord::new(row, date, times).with_line(line))
}

/// Absent cells (ragged rows, missing column) are `Ok(None)`.
fn text_cell(record: &ByteRecord, index: Option<usize>) -> std::result::Result<Option<&str>, ()> {
    match index.and_then(|i| record.get(i)) {
        Some(bytes) => std::str::from_utf8(bytes).map(Some).map_err(|_| ()),
        None => Ok(None),
    }
}

fn csv_error(source: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: source.to_path_buf(),
        message: error.to_string(),
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reject UTF-16 files up front; a UTF-8 BOM is fine.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}
