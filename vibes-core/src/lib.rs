pub mod api;
pub mod color;
pub mod config;
pub mod entry;
pub mod organizer;
pub mod session;

#[cfg(test)]
pub(crate) mod tests;

pub use api::{ApiClient, ApiError};
pub use color::{ColorBoard, ColorExtractor, ColorResult};
pub use config::Config;
pub use entry::{Entry, EntryId, Mood, NewEntry, TagSet};
pub use organizer::{EntryGroups, MonthGroup, Organizer, SortKey};
pub use session::{Session, SessionStore};
