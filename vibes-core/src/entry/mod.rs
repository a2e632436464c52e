mod dates;
mod map_entries;
mod mood;
mod tags;
mod vibe_entry;

pub use dates::{month_key, month_label, parse_entry_date};
pub use map_entries::{EntriesResult, EntryError, RawEntry, RawId, RawTags, map_entries};
pub use mood::Mood;
pub use tags::TagSet;
pub use vibe_entry::{Entry, EntryId, NewEntry};
