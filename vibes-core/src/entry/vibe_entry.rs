use super::{Mood, TagSet};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Identifier assigned by the backend. Numeric ids are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

/// A journal entry ("vibe"): a song, how it made the user feel and what they wrote.
///
/// Entries are read-only once mapped from the backend payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub song_title: String,
    pub artist: String,
    /// Playable audio reference.
    pub link: Option<String>,
    /// Cover art URL.
    pub image: Option<String>,
    pub journal_text: String,
    pub mood: Option<Mood>,
    pub tags: TagSet,
    /// The comma-joined tag string exactly as the backend sent it.
    pub raw_tags: String,
    pub date: DateTime<Local>,
}

/// Properties to create a new entry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub song_title: String,
    pub artist: String,
    pub link: Option<String>,
    pub journal_text: String,
    pub mood: Option<Mood>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_entry_serializes_with_backend_field_names() {
        let entry = NewEntry {
            song_title: "Essence".into(),
            artist: "Wizkid".into(),
            link: None,
            journal_text: "Summer".into(),
            mood: Some(Mood::Happy),
            tags: vec!["afro".into(), "chill".into()],
            image: Some("https://img/cover.jpg".into()),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "songTitle": "Essence",
                "artist": "Wizkid",
                "link": null,
                "journalText": "Summer",
                "mood": "happy",
                "tags": ["afro", "chill"],
                "image": "https://img/cover.jpg",
            })
        );
    }

    #[test]
    fn entry_id_displays_raw_text() {
        let id = EntryId::from("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }
}
