//! Filters, sorts and groups entries into month buckets for display.
use super::collate::locale_compare;
use super::filters::{GroupOrder, MoodFilter, SortKey, TagFilter, TagMatch};
use crate::entry::{Entry, month_key, month_label};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Entries sharing a calendar month, e.g. `March 2024`.
#[derive(Debug, PartialEq)]
pub struct MonthGroup<'a> {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub entries: Vec<&'a Entry>,
}

/// The organized view: month groups, each holding entries in sort order.
#[derive(Debug, Default, PartialEq)]
pub struct EntryGroups<'a> {
    pub groups: Vec<MonthGroup<'a>>,
}

impl<'a> EntryGroups<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of entries across all groups.
    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&MonthGroup<'a>> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// All entries in display order.
    pub fn iter_entries(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.groups.iter().flat_map(|g| g.entries.iter().copied())
    }
}

/// Organizes entries with a fixed set of filter and ordering choices.
#[derive(Debug, Clone, Default)]
pub struct Organizer {
    pub mood: MoodFilter,
    pub tag: TagFilter,
    pub sort: SortKey,
    pub tag_match: TagMatch,
    pub group_order: GroupOrder,
}

impl Organizer {
    pub fn new(mood: MoodFilter, tag: TagFilter, sort: SortKey) -> Self {
        Self {
            mood,
            tag,
            sort,
            ..Default::default()
        }
    }

    pub fn with_tag_match(mut self, tag_match: TagMatch) -> Self {
        self.tag_match = tag_match;
        self
    }

    pub fn with_group_order(mut self, group_order: GroupOrder) -> Self {
        self.group_order = group_order;
        self
    }

    /// Applies the filters, sorts what is left and buckets it by month.
    ///
    /// - Every entry that passes the filters lands in exactly one group.
    /// - Within a group, entries keep the global sort order.
    /// - The sort is stable: entries that compare equal keep their input order.
    /// - No input, or nothing passing the filters, gives an empty result.
    pub fn organize<'a>(&self, entries: &'a [Entry]) -> EntryGroups<'a> {
        let mut filtered: Vec<&'a Entry> = entries
            .iter()
            .filter(|e| self.mood.matches(e))
            .filter(|e| self.tag.matches(e, self.tag_match))
            .collect();

        filtered.sort_by(|a, b| compare(self.sort, a, b));

        let mut groups = group_by_month(filtered);
        match self.group_order {
            GroupOrder::FirstSeen => {}
            GroupOrder::NewestFirst => {
                groups.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)))
            }
            GroupOrder::OldestFirst => {
                groups.sort_by(|a, b| (a.year, a.month).cmp(&(b.year, b.month)))
            }
        }
        EntryGroups { groups }
    }
}

/// Organizes entries with exact tag matching and first-seen group order.
pub fn organize<'a>(
    entries: &'a [Entry],
    mood: &MoodFilter,
    tag: &TagFilter,
    sort: SortKey,
) -> EntryGroups<'a> {
    Organizer::new(*mood, tag.clone(), sort).organize(entries)
}

fn compare(sort: SortKey, a: &Entry, b: &Entry) -> Ordering {
    match sort {
        SortKey::Newest => b.date.cmp(&a.date),
        SortKey::Oldest => a.date.cmp(&b.date),
        SortKey::Title => locale_compare(&a.song_title, &b.song_title),
        SortKey::Artist => locale_compare(&a.artist, &b.artist),
    }
}

fn group_by_month(sorted: Vec<&Entry>) -> Vec<MonthGroup<'_>> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut index: HashMap<(i32, u32), usize> = HashMap::new();

    for entry in sorted {
        let key = month_key(&entry.date);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(MonthGroup {
                label: month_label(&entry.date),
                year: key.0,
                month: key.1,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }
    groups
}
