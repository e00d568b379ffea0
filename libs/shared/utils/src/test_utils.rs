use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use shared_config::AppConfig;

use crate::notification::{Notifier, Severity};

/// Anchor date shared by fixtures so tests never depend on the wall clock.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).expect("valid fixture date")
}

/// Combines a date with an "HH:MM" literal. Panics on malformed input; fixtures only.
pub fn at(date: NaiveDate, hh_mm: &str) -> NaiveDateTime {
    let time = NaiveTime::parse_from_str(hh_mm, "%H:%M").expect("fixture time must be HH:MM");
    date.and_time(time)
}

pub struct TestConfig {
    pub server_port: u16,
    pub appointment_duration_minutes: i64,
    pub anchor: NaiveDate,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            server_port: 0,
            appointment_duration_minutes: 30,
            anchor: anchor_date(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_port: self.server_port,
            appointment_duration_minutes: self.appointment_duration_minutes,
            sample_data_anchor_date: self.anchor,
            ..AppConfig::default()
        }
    }
}

/// Notifier that keeps every toast in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((severity, message.to_string()));
        }
    }
}
