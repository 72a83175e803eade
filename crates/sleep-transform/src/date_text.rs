//! Splitting journal date text into day, month and optional year.

use sleep_model::JournalDate;

use crate::error::{Result, TransformError};

/// Shape of a date cell after splitting on `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateText {
    /// `DD/MM`: the year must be inferred from row order.
    DayMonth { day: u32, month: u32 },
    /// `DD/MM/YY`, expanded to the 2000s.
    ShortYear(JournalDate),
    /// `DD/MM/YYYY`, taken as written.
    FullYear(JournalDate),
}

/// Parse the text of a date cell from source row `row`.
pub fn parse_date_text(text: &str, row: usize) -> Result<DateText> {
    let malformed = || TransformError::MalformedDateToken {
        row,
        raw: text.to_string(),
    };
    let tokens: Vec<&str> = text.split('/').map(str::trim).collect();
    match tokens.as_slice() {
        [day, month] => {
            let (day, month) = day_month(day, month, text, row)?;
            Ok(DateText::DayMonth { day, month })
        }
        [day, month, year] => {
            let (day, month) = day_month(day, month, text, row)?;
            let short = match year.len() {
                2 => true,
                4 => false,
                _ => return Err(malformed()),
            };
            let digits = number(year).ok_or_else(|| invalid(text, row, "year"))?;
            let year = if short { 2000 + digits } else { digits };
            let year = i32::try_from(year).map_err(|_| invalid(text, row, "year"))?;
            let date = JournalDate::new(day, month, year).ok_or_else(malformed)?;
            Ok(if short {
                DateText::ShortYear(date)
            } else {
                DateText::FullYear(date)
            })
        }
        _ => Err(malformed()),
    }
}

fn day_month(day: &str, month: &str, text: &str, row: usize) -> Result<(u32, u32)> {
    let day = number(day)
        .filter(|d| (1..=31).contains(d))
        .ok_or_else(|| invalid(text, row, "day"))?;
    let month = number(month)
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| invalid(text, row, "month"))?;
    Ok((day, month))
}

/// Plain ASCII digits only; no sign, no inner whitespace.
fn number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn invalid(text: &str, row: usize, component: &'static str) -> TransformError {
    TransformError::InvalidDateComponent {
        row,
        raw: text.to_string(),
        component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> JournalDate {
        JournalDate::new(day, month, year).expect("valid date")
    }

    #[test]
    fn day_month_has_no_year() {
        assert_eq!(
            parse_date_text("3/4", 1),
            Ok(DateText::DayMonth { day: 3, month: 4 })
        );
    }

    #[test]
    fn two_digit_year_is_expanded() {
        assert_eq!(
            parse_date_text("15/01/24", 1),
            Ok(DateText::ShortYear(date(15, 1, 2024)))
        );
        assert_eq!(
            parse_date_text("01/06/00", 1),
            Ok(DateText::ShortYear(date(1, 6, 2000)))
        );
    }

    #[test]
    fn four_digit_year_is_kept() {
        assert_eq!(
            parse_date_text("05/03/2023", 1),
            Ok(DateText::FullYear(date(5, 3, 2023)))
        );
    }

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(
            parse_date_text(" 05 / 03 ", 1),
            Ok(DateText::DayMonth { day: 5, month: 3 })
        );
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        for text in ["12", "1/2/3/4", "1-2-2023"] {
            assert!(
                matches!(
                    parse_date_text(text, 7),
                    Err(TransformError::MalformedDateToken { row: 7, .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn odd_year_length_is_malformed() {
        for text in ["01/02/3", "01/02/023", "01/02/"] {
            assert!(
                matches!(
                    parse_date_text(text, 1),
                    Err(TransformError::MalformedDateToken { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn out_of_range_components_are_invalid() {
        assert!(matches!(
            parse_date_text("32/01", 2),
            Err(TransformError::InvalidDateComponent {
                component: "day",
                ..
            })
        ));
        assert!(matches!(
            parse_date_text("01/13/2023", 2),
            Err(TransformError::InvalidDateComponent {
                component: "month",
                ..
            })
        ));
        assert!(matches!(
            parse_date_text("aa/01", 2),
            Err(TransformError::InvalidDateComponent {
                component: "day",
                ..
            })
        ));
        assert!(matches!(
            parse_date_text("01/01/2x", 2),
            Err(TransformError::InvalidDateComponent {
                component: "year",
                ..
            })
        ));
    }
}
