mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use helpers::TestDataDir;
use wellpal::application::{StorageSlot, UsageMeter};
use wellpal::constants::{DAILY_QUOTA, USAGE_SLOT_KEY};
use wellpal::util::testing::FixedClock;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_increments_within_one_day_when_querying_then_remaining_counts_down_to_zero() -> Result<()>
{
    // Arrange
    let data_dir = TestDataDir::new()?;
    let clock = FixedClock::new(day(2025, 6, 1));
    let mut meter = UsageMeter::with_clock(data_dir.open_store()?, clock);

    // Act & Assert - strict countdown, gate flips exactly at zero
    for used in 1..=DAILY_QUOTA {
        assert!(meter.can_make_request());
        let state = meter.increment();
        assert_eq!(state.count, used);
        assert_eq!(meter.remaining(), DAILY_QUOTA - used);
    }
    assert!(!meter.can_make_request());
    Ok(())
}

#[test]
fn given_counter_persisted_when_reopening_store_then_count_survives() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    let clock = FixedClock::new(day(2025, 6, 1));
    let mut meter = UsageMeter::with_clock(data_dir.open_store()?, clock.clone());
    meter.increment();
    meter.increment();

    // Act - a fresh meter over the same directory, as a reloaded app would
    let reopened = UsageMeter::with_clock(data_dir.open_store()?, clock);

    // Assert
    assert_eq!(reopened.state().count, 2);
    assert_eq!(reopened.remaining(), DAILY_QUOTA - 2);
    Ok(())
}

#[test]
fn given_quota_exhausted_yesterday_when_asking_today_then_full_quota_is_back() -> Result<()> {
    // Arrange - yesterday's counter maxed out
    let data_dir = TestDataDir::new()?;
    let mut store = data_dir.open_store()?;
    store.write(USAGE_SLOT_KEY, r#"{"date":"2025-05-31","count":10}"#)?;

    // Act
    let meter = UsageMeter::with_clock(data_dir.open_store()?, FixedClock::new(day(2025, 6, 1)));

    // Assert
    assert!(meter.can_make_request());
    assert_eq!(meter.remaining(), DAILY_QUOTA);
    Ok(())
}

#[test]
fn given_stale_stored_day_when_querying_then_slot_file_is_not_rewritten() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    let mut store = data_dir.open_store()?;
    let stored = r#"{"date":"2025-05-31","count":10}"#;
    store.write(USAGE_SLOT_KEY, stored)?;

    // Act - read-only queries must not persist the rollover
    let meter = UsageMeter::with_clock(data_dir.open_store()?, FixedClock::new(day(2025, 6, 1)));
    let _ = meter.state();
    let _ = meter.remaining();
    let _ = meter.can_make_request();

    // Assert
    let raw = std::fs::read_to_string(data_dir.slot_file(USAGE_SLOT_KEY))?;
    assert_eq!(raw, stored);
    Ok(())
}

#[test]
fn given_unwritten_usage_slot_when_querying_then_no_file_appears() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    let meter = UsageMeter::with_clock(data_dir.open_store()?, FixedClock::new(day(2025, 6, 1)));

    // Act
    let _ = meter.remaining();

    // Assert
    assert!(!data_dir.slot_file(USAGE_SLOT_KEY).exists());
    Ok(())
}

#[test]
fn given_increment_after_rollover_when_inspecting_slot_then_new_day_is_persisted() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    let mut store = data_dir.open_store()?;
    store.write(USAGE_SLOT_KEY, r#"{"date":"2025-05-31","count":10}"#)?;
    let mut meter =
        UsageMeter::with_clock(data_dir.open_store()?, FixedClock::new(day(2025, 6, 1)));

    // Act
    let state = meter.increment();

    // Assert
    assert_eq!(state.date, day(2025, 6, 1));
    assert_eq!(state.count, 1);
    let raw = std::fs::read_to_string(data_dir.slot_file(USAGE_SLOT_KEY))?;
    assert_eq!(raw, r#"{"date":"2025-06-01","count":1}"#);
    Ok(())
}
