use crate::Config;
use crate::entry::{Entry, EntryId, Mood, TagSet, parse_entry_date};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_dir: PathBuf) -> Config {
    Config {
        session_file: data_dir.join("session.json"),
        ..Config::default()
    }
}

/// Builds an entry the way the mapping layer would, from a `YYYY-MM-DD` date
/// and a comma-joined tag string.
pub fn mk_entry(
    id: &str,
    title: &str,
    artist: &str,
    date: &str,
    mood: Option<Mood>,
    tags: &str,
) -> Entry {
    Entry {
        id: EntryId::from(id),
        song_title: title.to_string(),
        artist: artist.to_string(),
        link: None,
        image: None,
        journal_text: String::new(),
        mood,
        tags: TagSet::parse(tags),
        raw_tags: tags.to_string(),
        date: parse_entry_date(date).expect("valid test date"),
    }
}
