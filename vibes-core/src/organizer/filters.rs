use crate::entry::{Entry, Mood, TagSet};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Sentinel accepted by the mood and tag filters to disable them.
pub const ALL: &str = "all";

#[derive(Debug, Error, PartialEq)]
pub enum ParseFilterError {
    #[error("unknown mood '{0}', expected one of: all, happy, neutral, sad")]
    UnknownMood(String),
    #[error("tag filter cannot be empty, use 'all' to disable it")]
    EmptyTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            MoodFilter::All => true,
            MoodFilter::Only(mood) => entry.mood == Some(*mood),
        }
    }
}

impl FromStr for MoodFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(MoodFilter::All);
        }
        s.parse::<Mood>()
            .map(MoodFilter::Only)
            .map_err(|_| ParseFilterError::UnknownMood(s.to_string()))
    }
}

impl fmt::Display for MoodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodFilter::All => f.write_str(ALL),
            MoodFilter::Only(mood) => write!(f, "{mood}"),
        }
    }
}

/// How a tag filter is compared against an entry's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TagMatch {
    /// The normalized tag must be one of the entry's tags.
    #[default]
    Exact,
    /// The filter text, as typed, only needs to appear somewhere in the raw
    /// comma-joined tag string, so `rap` also matches `trap`. Case-sensitive.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    /// `normalized` is compared with the tag set, `raw` is the trimmed input
    /// searched in the raw tag string.
    Tag { normalized: String, raw: String },
}

impl TagFilter {
    pub fn matches(&self, entry: &Entry, policy: TagMatch) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag { normalized, raw } => match policy {
                TagMatch::Exact => entry.tags.contains(normalized),
                TagMatch::Substring => entry.raw_tags.contains(raw.as_str()),
            },
        }
    }
}

impl FromStr for TagFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(TagFilter::All);
        }
        TagSet::normalize(s)
            .map(|normalized| TagFilter::Tag {
                normalized,
                raw: s.to_string(),
            })
            .ok_or(ParseFilterError::EmptyTag)
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str(ALL),
            TagFilter::Tag { raw, .. } => f.write_str(raw),
        }
    }
}

/// Order of entries in the organized view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    /// Date, most recent first.
    #[default]
    Newest,
    /// Date, oldest first.
    Oldest,
    /// Song title A-Z.
    Title,
    /// Artist A-Z.
    Artist,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest to Oldest",
            SortKey::Oldest => "Oldest to Newest",
            SortKey::Title => "Song Title A-Z",
            SortKey::Artist => "Artist A-Z",
        }
    }
}

/// Order of the month groups themselves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GroupOrder {
    /// Groups appear in the order their first entry shows up under the applied sort.
    #[default]
    FirstSeen,
    /// Latest calendar month first, whatever the entry sort.
    NewestFirst,
    /// Earliest calendar month first.
    OldestFirst,
}
