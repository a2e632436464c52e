mod collate;
mod filters;
mod organize;

pub use collate::locale_compare;
pub use filters::{ALL, GroupOrder, MoodFilter, ParseFilterError, SortKey, TagFilter, TagMatch};
pub use organize::{EntryGroups, MonthGroup, Organizer, organize};
