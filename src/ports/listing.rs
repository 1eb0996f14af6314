// src/ports/listing.rs
use crate::domain::PostcardEntry;
use crate::util::text::{first_line, truncate_chars};

/// Maximum characters of note preview shown per listing line.
const NOTE_PREVIEW_CHARS: usize = 48;

/// Renders photobook entries for the terminal.
///
/// One line per entry: id, creation day, mood, location and a note preview.
/// Empty mood/location render as a dash so columns stay scannable.
#[derive(Debug, Default)]
pub struct ListingPresenter;

impl ListingPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_line(&self, entry: &PostcardEntry) -> String {
        let day = entry.date_iso.get(..10).unwrap_or(&entry.date_iso);
        let mood = if entry.mood.is_empty() { "-" } else { &entry.mood };
        let location = if entry.location.is_empty() {
            "-"
        } else {
            &entry.location
        };
        let preview = truncate_chars(first_line(&entry.note), NOTE_PREVIEW_CHARS);

        format!("{}  {}  {}  {}  {}", entry.id, day, mood, location, preview)
    }

    pub fn render(&self, entries: &[PostcardEntry]) -> String {
        if entries.is_empty() {
            return "No postcards saved yet.".to_string();
        }
        entries
            .iter()
            .map(|entry| self.render_line(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
