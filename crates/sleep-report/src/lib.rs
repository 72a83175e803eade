//! Summary statistics over a cleaned sleep journal.
//!
//! Works on rows read back from a cleaned file, so every date is expected in
//! `DD/MM/YYYY` form. Rows that do not parse are reported, not fatal.

mod duration;
mod summary;

pub use duration::{format_minutes, parse_duration_minutes};
pub use summary::{
    DailyTotal, InvalidDate, JournalReport, ReportOptions, Session, build_report,
    parse_cleaned_date,
};
