// src/domain/usage.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-day scoped counter for chat requests.
///
/// Persists as `{"date": "YYYY-MM-DD", "count": n}`. The count only ever
/// applies to the stored `date`; a record from a prior day reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsageState {
    pub date: NaiveDate,
    pub count: u32,
}

impl DailyUsageState {
    /// A fresh day with nothing consumed yet.
    pub fn fresh(date: NaiveDate) -> Self {
        Self { date, count: 0 }
    }

    /// Requests left under `quota`, never negative.
    pub fn remaining(&self, quota: u32) -> u32 {
        quota.saturating_sub(self.count)
    }
}
