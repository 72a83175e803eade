/// Minutes in an `HH:MM` cell. Hours may exceed 23 for long sessions.
pub fn parse_duration_minutes(value: &str) -> Option<u32> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || !digits(minutes) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

/// `465` renders as `7h 45m`.
pub fn format_minutes(minutes: u64) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(parse_duration_minutes("07:45"), Some(465));
        assert_eq!(parse_duration_minutes("0:05"), Some(5));
        assert_eq!(parse_duration_minutes("26:00"), Some(1560));
    }

    #[test]
    fn rejects_malformed_durations() {
        for value in ["", "7", "07:60", "a:10", "07:", ":30", "-1:00"] {
            assert_eq!(parse_duration_minutes(value), None, "{value}");
        }
    }

    #[test]
    fn formats_minutes() {
        assert_eq!(format_minutes(465), "7h 45m");
        assert_eq!(format_minutes(5), "0h 05m");
    }
}
