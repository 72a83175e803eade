use std::fs;

use sleep_ingest::{IngestError, read_journal};
use sleep_model::DateField;

#[test]
fn reads_journal_file_in_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sleep_journal.csv");
    fs::write(
        &path,
        "\u{feff}Date,Onset,Wakeup,Duration\n30/12,23:40,07:10,07:30\n02/01,00:15,08:00,07:45\n15/01/24,22:50,06:40,07:50\n",
    )
    .expect("write journal");

    let records = read_journal(&path).expect("read journal");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, DateField::Text("30/12".to_string()));
    assert_eq!(records[2].date, DateField::Text("15/01/24".to_string()));
    assert_eq!(records[1].times.duration.as_deref(), Some("07:45"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_journal(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn utf16_file_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("utf16.csv");
    fs::write(&path, [0xFF, 0xFE, b'D', 0x00]).expect("write journal");
    let err = read_journal(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}

#[test]
fn missing_date_column_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_date.csv");
    fs::write(&path, "Day,Onset,Wakeup\n01/01,22:00,06:00\n").expect("write journal");
    let err = read_journal(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("required column 'Date' not found in {}", path.display())
    );
}
