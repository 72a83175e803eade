//! Error types for journal cleaning.

use thiserror::Error;

/// Fatal conditions that abort a cleaning run.
///
/// Every row's year depends on the rows before it, so none of these are
/// recoverable: the run produces no output instead of a best guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Date text does not split into a usable day/month[/year] shape.
    #[error("row {row}: malformed date '{raw}' (expected DD/MM, DD/MM/YY or DD/MM/YYYY)")]
    MalformedDateToken { row: usize, raw: String },

    /// Day or month is not a number in range.
    #[error("row {row}: invalid {component} in date '{raw}'")]
    InvalidDateComponent {
        row: usize,
        raw: String,
        component: &'static str,
    },

    /// A dateless row with sleep times, before any dated row.
    #[error("row {row}: continuation row has no earlier date to inherit")]
    OrphanContinuation { row: usize },

    /// Rolling into January would step past the largest representable year.
    #[error("row {row}: year after {year} is out of range")]
    YearOutOfRange { row: usize, year: i32 },
}

impl TransformError {
    /// Source row the error refers to.
    pub fn row(&self) -> usize {
        match self {
            TransformError::MalformedDateToken { row, .. }
            | TransformError::InvalidDateComponent { row, .. }
            | TransformError::OrphanContinuation { row }
            | TransformError::YearOutOfRange { row, .. } => *row,
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_token_message_shows_raw_text() {
        let err = TransformError::MalformedDateToken {
            row: 4,
            raw: "12".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "row 4: malformed date '12' (expected DD/MM, DD/MM/YY or DD/MM/YYYY)"
        );
        assert_eq!(err.row(), 4);
    }
}
