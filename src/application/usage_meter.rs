// src/application/usage_meter.rs
use crate::application::{Clock, StorageSlot, SystemClock};
use crate::constants::{DAILY_QUOTA, USAGE_SLOT_KEY};
use crate::domain::{DailyUsageState, DomainError};
use tracing::{debug, instrument, warn};

/// Soft daily quota on chat requests, enforced without server coordination.
///
/// The counter is scoped to the local calendar day: a stored record from a
/// prior day reads as zero. Read paths never persist the rollover; only
/// `increment` writes.
pub struct UsageMeter<S: StorageSlot, C: Clock = SystemClock> {
    store: S,
    clock: C,
    quota: u32,
}

impl<S: StorageSlot> UsageMeter<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: StorageSlot, C: Clock> UsageMeter<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            quota: DAILY_QUOTA,
        }
    }

    pub fn with_quota(mut self, quota: u32) -> Self {
        self.quota = quota;
        self
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// Today's usage as recorded. Corrupt or missing state reads as a fresh
    /// day with nothing consumed.
    pub fn state(&self) -> DailyUsageState {
        let today = self.clock.today();

        let raw = match self.store.read(USAGE_SLOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DailyUsageState::fresh(today),
            Err(e) => {
                warn!(error = %e, "Usage slot unreadable, treating as fresh day");
                return DailyUsageState::fresh(today);
            }
        };

        match serde_json::from_str::<DailyUsageState>(&raw) {
            Ok(state) if state.date == today => state,
            Ok(stale) => {
                debug!(stored = %stale.date, %today, "Stored usage is from another day");
                DailyUsageState::fresh(today)
            }
            Err(e) => {
                warn!(error = %e, "Usage slot corrupt, treating as fresh day");
                DailyUsageState::fresh(today)
            }
        }
    }

    /// Whether another chat request fits into today's quota.
    pub fn can_make_request(&self) -> bool {
        self.remaining() > 0
    }

    /// Requests left for today, never negative.
    pub fn remaining(&self) -> u32 {
        self.state().remaining(self.quota)
    }

    /// Record one request against today's quota and return the new state.
    ///
    /// Rolls the counter over to today first when the stored day differs.
    /// Persisting is best-effort; the incremented state is returned either
    /// way.
    #[instrument(level = "debug", skip(self))]
    pub fn increment(&mut self) -> DailyUsageState {
        let mut state = self.state();
        state.count += 1;

        match serde_json::to_string(&state) {
            Ok(json) => {
                if let Err(e) = self.store.write(USAGE_SLOT_KEY, &json) {
                    warn!(error = %e, "Failed to persist usage counter");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize usage counter"),
        }

        debug!(date = %state.date, count = state.count, "Recorded chat request");
        state
    }

    /// The check-then-record pairing every chat send goes through: fails with
    /// `QuotaExhausted` when nothing remains, records one request otherwise.
    pub fn try_consume(&mut self) -> Result<DailyUsageState, DomainError> {
        if !self.can_make_request() {
            return Err(DomainError::QuotaExhausted(self.quota));
        }
        Ok(self.increment())
    }
}
