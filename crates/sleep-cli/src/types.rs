use std::path::PathBuf;

use sleep_transform::CleanStats;

/// Outcome of a `clean` run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub start_year: i32,
    pub stats: CleanStats,
    pub resolved_rows: usize,
}
