// src/application/photobook.rs
use crate::application::{Clock, StorageSlot, SystemClock};
use crate::constants::PHOTOBOOK_SLOT_KEY;
use crate::domain::{NewPostcard, PostcardEntry};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Use-case service for the postcard photobook.
///
/// Persistence is best-effort: reads degrade to an empty collection and
/// writes degrade to an in-memory result, so the surrounding UI stays usable
/// when the underlying storage is unavailable. Nothing here returns an error
/// to the caller.
pub struct Photobook<S: StorageSlot, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: StorageSlot> Photobook<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
        }
    }
}

impl<S: StorageSlot, C: Clock> Photobook<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Load the full collection, newest first.
    ///
    /// A missing slot, an unreadable backend or corrupt JSON all yield the
    /// empty collection.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self) -> Vec<PostcardEntry> {
        let raw = match self.store.read(PHOTOBOOK_SLOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Photobook slot unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<PostcardEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Photobook slot corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Create a new entry and persist it at the front of the collection.
    ///
    /// The created entry is returned even when the write fails, so the caller
    /// can still display it for the current session.
    #[instrument(level = "debug", skip(self, input))]
    pub fn add(&mut self, input: NewPostcard) -> PostcardEntry {
        let entry = PostcardEntry {
            id: Uuid::new_v4().to_string(),
            date_iso: self.clock.now_iso(),
            image_data_url: input.image_data_url,
            note: input.note,
            mood: input.mood,
            location: input.location,
        };

        let mut entries = self.load();
        entries.insert(0, entry.clone());
        self.write_back(&entries);

        debug!(id = %entry.id, "Added postcard");
        entry
    }

    /// Remove the entry with `id`. Unknown ids are a no-op, not an error.
    /// Returns whether an entry was removed.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &str) -> bool {
        let entries = self.load();
        let before = entries.len();
        let remaining: Vec<PostcardEntry> =
            entries.into_iter().filter(|e| e.id != id).collect();

        if remaining.len() == before {
            debug!(id, "No postcard with this id");
            return false;
        }

        self.write_back(&remaining);
        debug!(id, "Deleted postcard");
        true
    }

    fn write_back(&mut self, entries: &[PostcardEntry]) {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize photobook");
                return;
            }
        };

        if let Err(e) = self.store.write(PHOTOBOOK_SLOT_KEY, &json) {
            warn!(error = %e, "Failed to persist photobook, keeping in-memory result");
        }
    }
}
