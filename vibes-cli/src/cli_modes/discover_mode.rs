use super::{CliModeResult, Context};
use anyhow::Result;
use std::collections::HashMap;
use vibes_core::api::Suggestion;
use vibes_core::{ColorBoard, EntryId};

pub async fn search_mode(ctx: &Context, query: &[String]) -> Result<CliModeResult> {
    let query = query.join(" ");
    let query = query.trim();
    if query.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }
    let client = ctx.client()?;
    let tracks = ctx.checked(client.search_tracks(query).await)?;
    if tracks.is_empty() {
        ctx.renderer
            .print_info(&format!("No songs found for '{query}'."));
    } else {
        ctx.renderer.print_tracks(&tracks);
    }
    Ok(CliModeResult::Finish)
}

/// Prints each suggestion as soon as its cover color is known.
pub async fn suggestions_mode(ctx: &Context) -> Result<CliModeResult> {
    let client = ctx.client()?;
    let suggestions = ctx.checked(client.recommendations().await)?;
    if suggestions.is_empty() {
        ctx.renderer
            .print_info("No suggestions yet. Log a few vibes first.");
        return Ok(CliModeResult::Finish);
    }
    if !ctx.renderer.use_color() {
        for suggestion in &suggestions {
            ctx.renderer.print_suggestion(suggestion, None);
        }
        return Ok(CliModeResult::Finish);
    }

    let by_id: HashMap<EntryId, &Suggestion> =
        suggestions.iter().map(|s| (s.entry_id(), s)).collect();
    let items: Vec<(EntryId, String)> = suggestions
        .iter()
        .filter_map(|s| s.image.clone().map(|image| (s.entry_id(), image)))
        .collect();

    let extractor = ctx.extractor()?;
    let mut board = ColorBoard::new();
    board
        .fill(&extractor, items, |id, color| {
            if let Some(suggestion) = by_id.get(id) {
                ctx.renderer.print_suggestion(suggestion, Some(color));
            }
        })
        .await;
    for suggestion in suggestions.iter().filter(|s| s.image.is_none()) {
        ctx.renderer
            .print_suggestion(suggestion, Some(&board.get_or_fallback(&suggestion.entry_id())));
    }
    Ok(CliModeResult::Finish)
}
