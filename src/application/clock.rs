// src/application/clock.rs
use chrono::{Local, NaiveDate, SecondsFormat, Utc};

/// Source of "now" for timestamping new records and for the calendar-day
/// rollover check of the usage meter.
///
/// Both the read and the write path of a consumer must go through the same
/// clock, otherwise the quota can drift by a day around midnight.
pub trait Clock {
    /// The caller's current local calendar day.
    fn today(&self) -> NaiveDate;

    /// ISO-8601 timestamp for newly created records.
    fn now_iso(&self) -> String;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
