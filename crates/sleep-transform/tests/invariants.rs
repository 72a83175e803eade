//! Property tests for the year invariants of a cleaned journal.

use proptest::prelude::*;

use sleep_model::{DateField, RawRecord, SleepTimes};
use sleep_transform::clean_journal;

#[derive(Debug, Clone)]
enum Entry {
    DayMonth(u32, u32),
    ShortYear(u32, u32, u32),
    FullYear(u32, u32, u32),
    Continuation,
    Sentinel,
    DeadDay,
}

fn entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        6 => (1u32..=28, 1u32..=12).prop_map(|(d, m)| Entry::DayMonth(d, m)),
        1 => (1u32..=28, 1u32..=12, 0u32..=99).prop_map(|(d, m, y)| Entry::ShortYear(d, m, y)),
        1 => (1u32..=28, 1u32..=12, 1990u32..=2099).prop_map(|(d, m, y)| Entry::FullYear(d, m, y)),
        1 => Just(Entry::Continuation),
        1 => Just(Entry::Sentinel),
        1 => Just(Entry::DeadDay),
    ]
}

fn to_records(entries: &[Entry]) -> Vec<RawRecord> {
    let sleep = || SleepTimes::new(Some("23:00"), Some("07:00"), Some("08:00"));
    // A dated first row so continuations always have something to inherit.
    std::iter::once(RawRecord::new(1, DateField::classify("15/06"), sleep()))
        .chain(entries.iter().enumerate().map(|(idx, entry)| {
            let row = idx + 2;
            match entry {
                Entry::DayMonth(d, m) => {
                    RawRecord::new(row, DateField::classify(&format!("{d}/{m}")), sleep())
                }
                Entry::ShortYear(d, m, y) => RawRecord::new(
                    row,
                    DateField::classify(&format!("{d:02}/{m:02}/{y:02}")),
                    sleep(),
                ),
                Entry::FullYear(d, m, y) => {
                    RawRecord::new(row, DateField::classify(&format!("{d}/{m}/{y}")), sleep())
                }
                Entry::Continuation => RawRecord::new(row, DateField::Missing, sleep()),
                Entry::Sentinel => RawRecord::new(row, DateField::Sentinel, SleepTimes::default()),
                Entry::DeadDay => RawRecord::new(
                    row,
                    DateField::Missing,
                    SleepTimes::new(None, None, Some("00:00")),
                ),
            }
        }))
        .collect()
}

proptest! {
    #[test]
    fn years_never_decrease(entries in prop::collection::vec(entry(), 0..80), start in 2000i32..2050) {
        let cleaned = clean_journal(to_records(&entries), start).expect("clean journal");
        prop_assert_eq!(cleaned.records[0].date.year, start);
        for pair in cleaned.records.windows(2) {
            let (earlier, later) = (pair[0].date, pair[1].date);
            if earlier.month == 12 && later.month == 1 {
                prop_assert_eq!(later.year, earlier.year + 1);
            } else {
                prop_assert_eq!(later.year, earlier.year);
            }
        }
    }

    #[test]
    fn dropped_rows_never_reach_the_output(entries in prop::collection::vec(entry(), 0..80)) {
        let cleaned = clean_journal(to_records(&entries), 2023).expect("clean journal");
        for record in &cleaned.records {
            if record.row >= 2 {
                let entry = &entries[record.row - 2];
                prop_assert!(!matches!(entry, Entry::Sentinel | Entry::DeadDay));
            }
        }
        let dropped = entries
            .iter()
            .filter(|e| matches!(e, Entry::Sentinel | Entry::DeadDay))
            .count();
        prop_assert_eq!(cleaned.records.len(), entries.len() + 1 - dropped);
        prop_assert!(cleaned.records.windows(2).all(|w| w[0].row < w[1].row));
    }

    #[test]
    fn continuations_copy_the_preceding_date(entries in prop::collection::vec(entry(), 0..80)) {
        let cleaned = clean_journal(to_records(&entries), 2023).expect("clean journal");
        for pair in cleaned.records.windows(2) {
            if matches!(entries[pair[1].row - 2], Entry::Continuation) {
                prop_assert_eq!(pair[1].date, pair[0].date);
            }
        }
    }

    #[test]
    fn short_years_expand_into_two_thousands(d in 1u32..=28, m in 2u32..=12, y in 0u32..=99) {
        let text = format!("{d:02}/{m:02}/{y:02}");
        let parsed = sleep_transform::parse_date_text(&text, 1).expect("parse date");
        let expected = sleep_model::JournalDate::new(d, m, 2000 + y as i32).expect("valid date");
        prop_assert_eq!(parsed, sleep_transform::DateText::ShortYear(expected));
    }
}
