use serde::Serialize;
use std::collections::BTreeSet;

/// Normalized tags of an entry.
///
/// The backend stores tags as a single comma-joined string (`"chill, Rap,lofi"`).
/// A `TagSet` holds them split, trimmed and lowercased, without empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Splits a comma-joined tag string.
    pub fn parse(joined: &str) -> Self {
        Self::from_iter(joined.split(','))
    }

    /// Lowercases and trims a single tag. Returns `None` for blank input.
    pub fn normalize(tag: &str) -> Option<String> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        match Self::normalize(tag) {
            Some(tag) => self.0.contains(&tag),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TagSet(
            iter.into_iter()
                .filter_map(|tag| Self::normalize(tag.as_ref()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_trims_and_lowercases() {
        let tags = TagSet::parse(" Chill,rap , LOFI");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["chill", "lofi", "rap"]);
    }

    #[test]
    fn parse_drops_empty_segments_and_duplicates() {
        let tags = TagSet::parse("jazz,, ,Jazz,");
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("jazz"));
    }

    #[test]
    fn contains_is_exact_membership() {
        let tags = TagSet::parse("trap,indie");
        assert!(tags.contains("Trap"));
        assert!(!tags.contains("rap"));
        assert!(!tags.contains(""));
    }

    #[test]
    fn empty_string_gives_empty_set() {
        assert!(TagSet::parse("").is_empty());
    }
}
