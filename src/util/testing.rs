// src/util/testing.rs

use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Clock, StorageSlot};
use crate::domain::DomainError;

/// Shared in-memory slot store for testing services that depend on
/// [`StorageSlot`].
///
/// Backs the photobook and usage meter with a plain map and can simulate an
/// unavailable storage backend (disabled storage, exceeded quota) for either
/// direction, eliminating the need for each test file to define its own mock.
///
/// # Examples
///
/// ```
/// use wellpal::util::testing::MockSlotStore;
///
/// let store = MockSlotStore::builder()
///     .with_slot("wellpal_daily_usage_v1", r#"{"date":"2025-06-01","count":3}"#)
///     .with_write_failure()
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct MockSlotStore {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockSlotStore {
    pub fn builder() -> MockSlotStoreBuilder {
        MockSlotStoreBuilder::new()
    }

    /// Raw contents of a slot, for assertions on what was persisted.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl StorageSlot for MockSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::StorageError(
                "simulated read failure".to_string(),
            ));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::StorageError(
                "simulated write failure".to_string(),
            ));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Builder for MockSlotStore
///
/// Provides a fluent interface for configuring mock behavior.
#[derive(Debug, Default)]
pub struct MockSlotStoreBuilder {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockSlotStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw persisted contents.
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every read fail as if the backend were unavailable.
    pub fn with_read_failure(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail as if the backend were unavailable.
    pub fn with_write_failure(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MockSlotStore {
        MockSlotStore {
            slots: self.slots,
            fail_reads: self.fail_reads,
            fail_writes: self.fail_writes,
        }
    }
}

/// Clock pinned to a fixed calendar day, for rollover tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: NaiveDate,
    now_iso: String,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            now_iso: format!("{today}T12:00:00.000Z"),
            today,
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_iso(&self) -> String {
        self.now_iso.clone()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
