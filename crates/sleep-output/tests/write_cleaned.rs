use std::fs;
use std::path::Path;

use sleep_model::{JournalDate, ResolvedRecord, SleepTimes};
use sleep_output::{write_cleaned_journal, write_cleaned_journal_to};

fn record(row: usize, day: u32, month: u32, year: i32, times: SleepTimes) -> ResolvedRecord {
    ResolvedRecord {
        row,
        date: JournalDate::new(day, month, year).expect("valid date"),
        times,
    }
}

fn sample() -> Vec<ResolvedRecord> {
    vec![
        record(
            1,
            31,
            12,
            2023,
            SleepTimes::new(Some("23:40"), Some("07:10"), Some("07:30")),
        ),
        record(
            2,
            31,
            12,
            2023,
            SleepTimes::new(Some("13:00"), Some("14:00"), None),
        ),
        record(
            4,
            1,
            1,
            2024,
            SleepTimes::new(None, Some("06:55"), Some("06:05")),
        ),
    ]
}

#[test]
fn serializes_zero_padded_dates() {
    let mut buffer = Vec::new();
    write_cleaned_journal_to(&mut buffer, &sample(), Path::new("memory")).expect("write csv");
    let csv = String::from_utf8(buffer).expect("utf-8 output");
    insta::assert_snapshot!(csv.trim_end(), @r"
    Date,Onset,Wakeup,Duration
    31/12/2023,23:40,07:10,07:30
    31/12/2023,13:00,14:00,
    01/01/2024,,06:55,06:05
    ");
}

#[test]
fn writes_file_and_replaces_previous_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sleep_journal_cleaned.csv");
    fs::write(&path, "stale").expect("write stale file");

    write_cleaned_journal(&path, &sample()[..1]).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(
        contents,
        "Date,Onset,Wakeup,Duration\n31/12/2023,23:40,07:10,07:30\n"
    );
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent").join("out.csv");
    let err = write_cleaned_journal(&path, &sample()).unwrap_err();
    assert!(err.to_string().starts_with("failed to create"));
}
