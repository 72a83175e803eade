//! Error types for journal ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a journal.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Journal file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte order mark we cannot decode.
    #[error("unsupported encoding {encoding} in {path} (UTF-8 required)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === Cell Errors ===
    /// Date cell is not text.
    #[error("row {row} (line {line}) of {path}: date cell is not valid UTF-8 text")]
    NonTextualDate {
        path: PathBuf,
        row: usize,
        line: u64,
    },

    /// A time cell is not text.
    #[error("row {row} (line {line}) of {path}: {column} cell is not valid UTF-8 text")]
    NonTextualField {
        path: PathBuf,
        row: usize,
        line: u64,
        column: &'static str,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
