use serde_json::json;
use vibes_core::entry::{EntryError, RawEntry, map_entries};
use vibes_core::organizer::{GroupOrder, MoodFilter, Organizer, SortKey, TagFilter};
use vibes_core::{EntryId, Mood};

fn backend_payload() -> Vec<RawEntry> {
    serde_json::from_value(json!([
        { "id": 1, "song_title": "Redbone", "artist": "Childish Gambino",
          "journal_text": "late drive", "mood": "happy", "tags": "chill, Night",
          "date": "2024-03-02" },
        { "id": 2, "song_title": "Motion Sickness", "artist": "Phoebe Bridgers",
          "mood": "sad", "tags": ["indie", "night"], "date": "2024-03-20T21:15:00Z" },
        { "id": 3, "song_title": "Electric Feel", "artist": "MGMT",
          "mood": "HAPPY", "tags": "", "date": "2024-02-11" },
        { "id": "4", "song_title": "Nowhere", "artist": "Nobody" },
        { "id": 5, "song_title": "Bad Date", "artist": "X", "date": "someday" },
        { "id": 6, "song_title": "Holocene", "artist": "Bon Iver",
          "mood": "melancholic", "date": "2023-12-31T10:00:00" }
    ]))
    .unwrap()
}

#[test]
fn malformed_records_are_reported_not_fatal() {
    let result = map_entries(backend_payload());
    assert_eq!(result.entries.len(), 4);
    assert_eq!(
        result.errors,
        vec![
            EntryError::MissingDate { id: EntryId::from("4") },
            EntryError::InvalidDate {
                id: EntryId::from("5"),
                value: "someday".into()
            },
        ]
    );
    let holocene = result.entries.iter().find(|e| e.id == EntryId::from("6")).unwrap();
    assert_eq!(holocene.mood, None);
}

#[test]
fn mapped_entries_organize_into_months() {
    let result = map_entries(backend_payload());
    let organizer = Organizer::new(MoodFilter::All, TagFilter::All, SortKey::Newest);
    let groups = organizer.organize(&result.entries);

    assert_eq!(groups.labels(), vec!["March 2024", "February 2024", "December 2023"]);
    let march = groups.get("March 2024").unwrap();
    let titles: Vec<_> = march.entries.iter().map(|e| e.song_title.as_str()).collect();
    assert_eq!(titles, vec!["Motion Sickness", "Redbone"]);
    assert_eq!(groups.total_entries(), 4);
}

#[test]
fn filters_combine_across_wire_tag_shapes() {
    let result = map_entries(backend_payload());
    let night: TagFilter = "NIGHT".parse().unwrap();

    let organizer = Organizer::new(MoodFilter::All, night.clone(), SortKey::Oldest);
    let groups = organizer.organize(&result.entries);
    let ids: Vec<_> = groups.iter_entries().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let organizer = Organizer::new(MoodFilter::Only(Mood::Happy), night, SortKey::Oldest);
    let groups = organizer.organize(&result.entries);
    let ids: Vec<_> = groups.iter_entries().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn title_sort_with_calendar_group_order() {
    let result = map_entries(backend_payload());
    let organizer = Organizer::new(MoodFilter::All, TagFilter::All, SortKey::Title)
        .with_group_order(GroupOrder::OldestFirst);
    let groups = organizer.organize(&result.entries);
    assert_eq!(groups.labels(), vec!["December 2023", "February 2024", "March 2024"]);
    let march: Vec<_> = groups
        .get("March 2024")
        .unwrap()
        .entries
        .iter()
        .map(|e| e.song_title.as_str())
        .collect();
    assert_eq!(march, vec!["Motion Sickness", "Redbone"]);
}
