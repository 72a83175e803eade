use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use sleep_model::{DateField, RawRecord};

use crate::duration::parse_duration_minutes;

/// Thresholds and window used by [`build_report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Number of calendar days, ending at the latest date, in the recent window.
    pub recent_days: u32,
    /// Single episodes longer than this are listed.
    pub long_session_hours: f64,
    /// Days whose total exceeds this are listed.
    pub long_day_hours: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            recent_days: 7,
            long_session_hours: 10.0,
            long_day_hours: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidDate {
    pub row: usize,
    pub value: String,
}

/// One sleep episode (one journal row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub row: usize,
    pub date: NaiveDate,
    pub minutes: u32,
}

/// All episodes recorded against one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    /// Sum of the day's episodes; wider than a single session's minutes.
    pub minutes: u64,
    pub episodes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JournalReport {
    pub entries: usize,
    pub invalid_dates: Vec<InvalidDate>,
    /// Rows with a valid date but no usable duration.
    pub unparsed_durations: usize,
    /// Per-day totals in date order.
    pub daily: Vec<DailyTotal>,
    pub multi_episode_days: usize,
    /// Longest first.
    pub long_sessions: Vec<Session>,
    /// Longest first.
    pub long_days: Vec<DailyTotal>,
    pub average_daily_minutes: Option<f64>,
    /// Per-day totals for the recent window, in date order.
    pub recent: Vec<DailyTotal>,
}

/// Parse a cleaned `DD/MM/YYYY` date.
pub fn parse_cleaned_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").ok()
}

pub fn build_report(records: &[RawRecord], options: &ReportOptions) -> JournalReport {
    let mut report = JournalReport {
        entries: records.len(),
        ..JournalReport::default()
    };
    let mut sessions = Vec::new();

    for record in records {
        let Some(date) = record.date.as_text().and_then(parse_cleaned_date) else {
            report.invalid_dates.push(InvalidDate {
                row: record.row,
                value: describe(&record.date),
            });
            continue;
        };
        match record.times.duration.as_deref().and_then(parse_duration_minutes) {
            Some(minutes) => sessions.push(Session {
                row: record.row,
                date,
                minutes,
            }),
            None => {
                debug!(row = record.row, "skipping row without a usable duration");
                report.unparsed_durations += 1;
            }
        }
    }

    let mut by_day: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();
    for session in &sessions {
        let total = by_day.entry(session.date).or_insert(DailyTotal {
            date: session.date,
            minutes: 0,
            episodes: 0,
        });
        total.minutes += u64::from(session.minutes);
        total.episodes += 1;
    }
    report.daily = by_day.into_values().collect();
    report.multi_episode_days = report.daily.iter().filter(|d| d.episodes > 1).count();

    let session_limit = hours_to_minutes(options.long_session_hours);
    report.long_sessions = sessions
        .into_iter()
        .filter(|s| f64::from(s.minutes) > session_limit)
        .collect();
    report
        .long_sessions
        .sort_by(|a, b| b.minutes.cmp(&a.minutes).then(a.row.cmp(&b.row)));

    let day_limit = hours_to_minutes(options.long_day_hours);
    report.long_days = report
        .daily
        .iter()
        .filter(|d| d.minutes as f64 > day_limit)
        .cloned()
        .collect();
    report
        .long_days
        .sort_by(|a, b| b.minutes.cmp(&a.minutes).then(a.date.cmp(&b.date)));

    if !report.daily.is_empty() {
        let total: u64 = report.daily.iter().map(|d| d.minutes).sum();
        report.average_daily_minutes = Some(total as f64 / report.daily.len() as f64);
    }

    report.recent = recent_window(&report.daily, options.recent_days);
    report
}

fn recent_window(daily: &[DailyTotal], days: u32) -> Vec<DailyTotal> {
    let Some(last) = daily.last().map(|d| d.date) else {
        return Vec::new();
    };
    if days == 0 {
        return Vec::new();
    }
    let first = last
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .unwrap_or(NaiveDate::MIN);
    daily.iter().filter(|d| d.date >= first).cloned().collect()
}

fn hours_to_minutes(hours: f64) -> f64 {
    hours * 60.0
}

fn describe(field: &DateField) -> String {
    match field {
        DateField::Missing => String::new(),
        DateField::Sentinel => sleep_model::SENTINEL.to_string(),
        DateField::Text(text) => text.clone(),
    }
}
