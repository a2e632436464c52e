use super::{CliModeResult, Context};
use crate::cli::{ListArgs, Style};
use anyhow::Result;
use vibes_core::entry::Entry;
use vibes_core::{ColorBoard, EntryId, Organizer, SortKey};

pub async fn list_mode(ctx: &mut Context, args: &ListArgs) -> Result<CliModeResult> {
    let client = ctx.client()?;
    let result = ctx.checked(client.list_entries().await)?;

    let sort = args.sort.unwrap_or(ctx.config.default_sort);
    let organizer = Organizer::new(
        args.mood.unwrap_or_default(),
        args.tag.clone().unwrap_or_default(),
        sort,
    )
    .with_tag_match(ctx.config.tag_match)
    .with_group_order(args.group_order.unwrap_or(ctx.config.group_order));
    let groups = organizer.organize(&result.entries);

    if args.count {
        ctx.renderer
            .print_info(&format!("{} entries found.", groups.total_entries()));
    } else if groups.is_empty() {
        let message = if result.entries.is_empty() {
            "No entries yet. Log one with `vibes add`."
        } else {
            "No entries match these filters."
        };
        ctx.renderer.print_info(message);
    } else {
        let colors = accent_colors(ctx, groups.iter_entries()).await?;
        ctx.renderer.set_short_mode(args.style == Style::Short);
        ctx.renderer
            .print_info(&list_header(groups.total_entries(), sort));
        ctx.renderer.print_groups(&groups, &colors);
    }
    ctx.renderer.print_entry_errors(&result.errors);
    Ok(CliModeResult::Finish)
}

pub async fn show_mode(ctx: &Context, id: &str) -> Result<CliModeResult> {
    let client = ctx.client()?;
    let entry = ctx.checked(client.get_entry(&EntryId::from(id.trim())).await)?;
    let colors = accent_colors(ctx, std::iter::once(&entry)).await?;
    ctx.renderer
        .print_entry(&entry, Some(&colors.get_or_fallback(&entry.id)));
    Ok(CliModeResult::Finish)
}

fn list_header(count: usize, sort: SortKey) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("{count} {noun}, sorted {}", sort.label())
}

/// Cover colors for the entries that have one. Skipped without colored output.
async fn accent_colors<'a>(
    ctx: &Context,
    entries: impl Iterator<Item = &'a Entry>,
) -> Result<ColorBoard> {
    let mut board = ColorBoard::new();
    if !ctx.renderer.use_color() {
        return Ok(board);
    }
    let items: Vec<(EntryId, String)> = entries
        .filter_map(|e| e.image.clone().map(|image| (e.id.clone(), image)))
        .collect();
    if items.is_empty() {
        return Ok(board);
    }
    let extractor = ctx.extractor()?;
    board.fill(&extractor, items, |_, _| {}).await;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_count_and_sort() {
        assert_eq!(list_header(1, SortKey::Title), "1 entry, sorted Song Title A-Z");
        assert_eq!(list_header(3, SortKey::Newest), "3 entries, sorted Newest to Oldest");
    }
}
