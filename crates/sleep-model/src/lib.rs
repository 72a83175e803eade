//! Record types shared across the sleep journal pipeline.

pub mod date;
pub mod record;

pub use date::{DateField, JournalDate, SENTINEL};
pub use record::{RawRecord, ResolvedRecord, SleepTimes};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_record_serializes() {
        let record = ResolvedRecord {
            row: 3,
            date: JournalDate::new(2, 2, 2024).expect("valid date"),
            times: SleepTimes::new(Some("23:10"), Some("07:05"), Some("07:55")),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ResolvedRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
