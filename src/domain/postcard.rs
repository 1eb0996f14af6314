// src/domain/postcard.rs
use serde::{Deserialize, Serialize};

/// A single saved mood-journal record: photo, note, mood tag and location.
///
/// Field names mirror the persisted JSON layout (camelCase, `dateISO`), which
/// is also what earlier app builds wrote into the photobook slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcardEntry {
    pub id: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub image_data_url: String,
    pub note: String,
    pub mood: String,
    pub location: String,
}

impl PostcardEntry {
    /// Case-insensitive substring match over note, mood and location.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.note.to_lowercase().contains(&query)
            || self.mood.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
    }
}

/// Fields supplied by the editor when a new postcard is saved. The image is
/// opaque to the store: a base64 data URI or an external reference.
#[derive(Debug, Clone, Default)]
pub struct NewPostcard {
    pub image_data_url: String,
    pub note: String,
    pub mood: String,
    pub location: String,
}
