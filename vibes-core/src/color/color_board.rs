use super::color_result::ColorResult;
use super::extractor::ColorExtractor;
use super::image_source::ImageSource;
use crate::entry::EntryId;
use futures::StreamExt;
use std::collections::HashMap;
use tracing::debug;

/// Accent colors for the items shown in one view.
///
/// Colors are memoized per image URL for as long as the board lives, so a
/// cover shared by several items is only decoded once. Drop the board when the
/// view goes away.
#[derive(Debug, Default)]
pub struct ColorBoard {
    by_reference: HashMap<String, ColorResult>,
    by_item: HashMap<EntryId, ColorResult>,
}

impl ColorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &EntryId) -> Option<&ColorResult> {
        self.by_item.get(id)
    }

    /// Color for an item, or the fallback while it is still unknown.
    pub fn get_or_fallback(&self, id: &EntryId) -> ColorResult {
        self.get(id).cloned().unwrap_or_else(ColorResult::fallback)
    }

    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }

    /// Resolves colors for `(id, image reference)` pairs.
    ///
    /// `on_color` is called once per item as soon as its color is known:
    /// immediately for references already on the board, otherwise in
    /// whatever order the extractions complete.
    pub async fn fill<S, I, F>(&mut self, extractor: &ColorExtractor<S>, items: I, mut on_color: F)
    where
        S: ImageSource,
        I: IntoIterator<Item = (EntryId, String)>,
        F: FnMut(&EntryId, &ColorResult),
    {
        let mut waiting: HashMap<String, Vec<EntryId>> = HashMap::new();
        for (id, reference) in items {
            if let Some(color) = self.by_reference.get(&reference).cloned() {
                debug!(%id, reference, "color already on the board");
                on_color(&id, &color);
                self.by_item.insert(id, color);
            } else {
                waiting.entry(reference).or_default().push(id);
            }
        }

        let references: Vec<String> = waiting.keys().cloned().collect();
        let mut results = std::pin::pin!(extractor.extract_all(references));
        while let Some((reference, color)) = results.next().await {
            for id in waiting.remove(&reference).unwrap_or_default() {
                on_color(&id, &color);
                self.by_item.insert(id, color.clone());
            }
            self.by_reference.insert(reference, color);
        }
    }
}
