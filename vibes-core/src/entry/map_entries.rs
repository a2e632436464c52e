//! Mapping layer between the backend's JSON records and [`Entry`].
//!
//! The backend is loose about its payloads: ids can be numbers or strings,
//! field names come in snake_case or camelCase, and tags are a single
//! comma-joined string. Everything is normalized here so the organizer only
//! ever sees well-formed entries.
use super::dates::parse_entry_date;
use super::{Entry, EntryId, Mood, TagSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// An id as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for EntryId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => EntryId(n.to_string()),
            RawId::Text(s) => EntryId(s),
        }
    }
}

/// Tags as they appear on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    Joined(String),
    List(Vec<String>),
}

/// An entry record exactly as the backend returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub id: Option<RawId>,
    #[serde(alias = "songTitle")]
    pub song_title: Option<String>,
    pub artist: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    #[serde(alias = "journalText")]
    pub journal_text: Option<String>,
    pub mood: Option<String>,
    pub tags: Option<RawTags>,
    pub date: Option<String>,
}

/// Why a backend record could not become an [`Entry`].
#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("entry has no id")]
    MissingId,
    #[error("entry {id} has no date")]
    MissingDate { id: EntryId },
    #[error("entry {id} has an unreadable date '{value}'")]
    InvalidDate { id: EntryId, value: String },
}

/// Entries that mapped cleanly plus the records that were skipped.
#[derive(Debug, Default)]
pub struct EntriesResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<EntryError>,
}

impl TryFrom<RawEntry> for Entry {
    type Error = EntryError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let id: EntryId = raw.id.ok_or(EntryError::MissingId)?.into();
        let value = raw
            .date
            .ok_or_else(|| EntryError::MissingDate { id: id.clone() })?;
        let date = parse_entry_date(&value).ok_or_else(|| EntryError::InvalidDate {
            id: id.clone(),
            value: value.clone(),
        })?;

        let mood = raw.mood.as_deref().and_then(|m| {
            let mood = Mood::from_api(m);
            if mood.is_none() && !m.trim().is_empty() {
                debug!(entry = %id, mood = m, "ignoring unknown mood");
            }
            mood
        });

        let (tags, raw_tags) = match raw.tags {
            Some(RawTags::Joined(joined)) => (TagSet::parse(&joined), joined),
            Some(RawTags::List(list)) => (list.iter().collect::<TagSet>(), list.join(",")),
            None => (TagSet::default(), String::new()),
        };

        Ok(Entry {
            id,
            song_title: raw.song_title.unwrap_or_default(),
            artist: raw.artist.unwrap_or_default(),
            link: raw.link.filter(|l| !l.trim().is_empty()),
            image: raw.image.filter(|i| !i.trim().is_empty()),
            journal_text: raw.journal_text.unwrap_or_default(),
            mood,
            tags,
            raw_tags,
            date,
        })
    }
}

/// Maps a batch of backend records.
///
/// Records that cannot be mapped are skipped and reported in
/// [`EntriesResult::errors`]; the rest keep their original order.
pub fn map_entries(raw: Vec<RawEntry>) -> EntriesResult {
    let mut result = EntriesResult::default();
    for record in raw {
        match Entry::try_from(record) {
            Ok(entry) => result.entries.push(entry),
            Err(error) => {
                warn!(%error, "skipping malformed entry");
                result.errors.push(error);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_snake_case_record() {
        let entry = Entry::try_from(raw(json!({
            "id": 7,
            "song_title": "Nights",
            "artist": "Frank Ocean",
            "link": "https://p.scdn.co/nights.mp3",
            "image": "",
            "journal_text": "late drive",
            "mood": "sad",
            "tags": "rnb, Chill",
            "date": "2024-03-15T20:00:00"
        })))
        .unwrap();

        assert_eq!(entry.id, EntryId::from("7"));
        assert_eq!(entry.song_title, "Nights");
        assert_eq!(entry.mood, Some(Mood::Sad));
        assert!(entry.tags.contains("chill"));
        assert!(entry.tags.contains("rnb"));
        assert_eq!(entry.raw_tags, "rnb, Chill");
        assert_eq!(entry.image, None);
    }

    #[test]
    fn maps_camel_case_record_with_tag_list() {
        let entry = Entry::try_from(raw(json!({
            "id": "abc",
            "songTitle": "Essence",
            "artist": "Wizkid",
            "journalText": "",
            "mood": "",
            "tags": ["afro", "chill"],
            "date": "2024-07-01"
        })))
        .unwrap();

        assert_eq!(entry.song_title, "Essence");
        assert_eq!(entry.mood, None);
        assert_eq!(entry.raw_tags, "afro,chill");
        assert_eq!(entry.tags.len(), 2);
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = Entry::try_from(raw(json!({ "date": "2024-01-01" }))).unwrap_err();
        assert_eq!(err, EntryError::MissingId);
    }

    #[test]
    fn bad_dates_are_reported_with_the_entry_id() {
        let err = Entry::try_from(raw(json!({ "id": 1 }))).unwrap_err();
        assert_eq!(err, EntryError::MissingDate { id: EntryId::from("1") });

        let err = Entry::try_from(raw(json!({ "id": 2, "date": "soon" }))).unwrap_err();
        assert_eq!(
            err,
            EntryError::InvalidDate {
                id: EntryId::from("2"),
                value: "soon".into()
            }
        );
    }

    #[test]
    fn map_entries_skips_and_reports_malformed_records() {
        let result = map_entries(vec![
            raw(json!({ "id": 1, "date": "2024-01-01", "song_title": "A" })),
            raw(json!({ "id": 2, "date": "not a date" })),
            raw(json!({ "id": 3, "date": "2024-02-01", "song_title": "C" })),
        ]);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].song_title, "A");
        assert_eq!(result.entries[1].song_title, "C");
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(result.errors[0], EntryError::InvalidDate { .. }));
    }
}
