//! Monotonic year enforcement (pass 2).
//!
//! Years written explicitly in the journal are not trusted: spreadsheet
//! autocomplete is known to backdate them. This pass recomputes every year
//! from the month sequence alone, starting at the configured start year.

use tracing::debug;

use sleep_model::ResolvedRecord;

use crate::error::{Result, TransformError};

/// Year/month state of the rollover machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverState {
    pub year: i32,
    /// `None` until the first row has been seen.
    pub month: Option<u32>,
}

impl RolloverState {
    pub fn new(start_year: i32) -> Self {
        Self {
            year: start_year,
            month: None,
        }
    }

    /// State after a row with `month`.
    ///
    /// December to January adds one year. A journal that opens in January
    /// has crossed into the year after `start_year`, matching pass 1.
    /// `None` when the new year would overflow.
    #[must_use]
    pub fn advance(self, month: u32) -> Option<Self> {
        let rolls_over = month == 1 && matches!(self.month, None | Some(12));
        let year = if rolls_over {
            self.year.checked_add(1)?
        } else {
            self.year
        };
        Some(Self {
            year,
            month: Some(month),
        })
    }
}

/// Overwrite each record's year with the rollover machine's year.
///
/// Returns the number of records whose year changed.
pub fn enforce_monotonic_years(records: &mut [ResolvedRecord], start_year: i32) -> Result<usize> {
    let mut state = RolloverState::new(start_year);
    let mut corrected = 0;
    for record in records.iter_mut() {
        state = state
            .advance(record.date.month)
            .ok_or(TransformError::YearOutOfRange {
                row: record.row,
                year: state.year,
            })?;
        if record.date.year != state.year {
            debug!(
                row = record.row,
                from = record.date.year,
                to = state.year,
                "correcting year"
            );
            record.date = record.date.with_year(state.year);
            corrected += 1;
        }
    }
    Ok(corrected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleep_model::{JournalDate, SleepTimes};

    fn records(dates: &[(u32, u32, i32)]) -> Vec<ResolvedRecord> {
        dates
            .iter()
            .enumerate()
            .map(|(idx, &(day, month, year))| ResolvedRecord {
                row: idx + 1,
                date: JournalDate::new(day, month, year).expect("valid date"),
                times: SleepTimes::default(),
            })
            .collect()
    }

    fn years(records: &[ResolvedRecord]) -> Vec<i32> {
        records.iter().map(|r| r.date.year).collect()
    }

    #[test]
    fn december_to_january_adds_a_year() {
        let state = RolloverState::new(2023)
            .advance(12)
            .and_then(|s| s.advance(1));
        assert_eq!(
            state,
            Some(RolloverState {
                year: 2024,
                month: Some(1),
            })
        );
    }

    #[test]
    fn other_transitions_keep_the_year() {
        let state = RolloverState::new(2023)
            .advance(3)
            .and_then(|s| s.advance(11))
            .and_then(|s| s.advance(1))
            .expect("no overflow");
        assert_eq!(state.year, 2023);
    }

    #[test]
    fn opening_january_adds_a_year() {
        assert_eq!(RolloverState::new(2023).advance(1).map(|s| s.year), Some(2024));
    }

    #[test]
    fn rollover_past_the_last_year_fails() {
        assert_eq!(RolloverState::new(i32::MAX).advance(1), None);
        let mut rows = records(&[(31, 12, 2023), (1, 1, 2024)]);
        assert_eq!(
            enforce_monotonic_years(&mut rows, i32::MAX),
            Err(TransformError::YearOutOfRange {
                row: 2,
                year: i32::MAX,
            })
        );
    }

    #[test]
    fn backdated_years_are_corrected() {
        let mut rows = records(&[(30, 12, 2023), (2, 1, 2023), (3, 1, 2024), (4, 2, 2022)]);
        let corrected = enforce_monotonic_years(&mut rows, 2023).unwrap();
        assert_eq!(years(&rows), vec![2023, 2024, 2024, 2024]);
        assert_eq!(corrected, 2);
    }

    #[test]
    fn explicit_first_year_yields_to_start_year() {
        let mut rows = records(&[(5, 3, 2021)]);
        assert_eq!(enforce_monotonic_years(&mut rows, 2023), Ok(1));
        assert_eq!(years(&rows), vec![2023]);
    }
}
