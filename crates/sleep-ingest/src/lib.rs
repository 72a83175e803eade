//! Sleep journal ingestion.
//!
//! Reads a journal CSV into an ordered list of [`RawRecord`]s. The date cell
//! of every row is tagged here, once, as missing, sentinel or text, so later
//! stages branch on [`DateField`] instead of re-inspecting raw values.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sleep_ingest::read_journal;
//!
//! let records = read_journal(Path::new("assets/sleep_journal.csv"))?;
//! ```
//!
//! [`RawRecord`]: sleep_model::RawRecord
//! [`DateField`]: sleep_model::DateField

mod columns;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Column Layout ===
pub use columns::JournalColumns;

// === CSV Reading ===
pub use reader::{read_journal, read_journal_from_reader, validate_encoding};
