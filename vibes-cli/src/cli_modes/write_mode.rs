use super::input_utils::{confirm, create_editor_buffer, resolve_editor};
use super::{CliModeResult, Context};
use crate::cli::AddArgs;
use anyhow::Result;
use vibes_core::{EntryId, NewEntry, TagSet};

pub async fn add_mode(ctx: &Context, args: &AddArgs) -> Result<CliModeResult> {
    let text = if args.text.is_empty() {
        create_editor_buffer(&resolve_editor())?
    } else {
        args.text.join(" ")
    };
    let journal_text = text.trim();
    if journal_text.is_empty() {
        ctx.renderer
            .print_info("No entry to save, because no text was received.");
        return Ok(CliModeResult::NothingToDo);
    }

    let entry = new_entry(args, journal_text);
    let client = ctx.client()?;
    ctx.checked(client.create_entry(&entry).await)?;
    ctx.renderer.print_info(&format!(
        "Logged {} by {}.",
        entry.song_title, entry.artist
    ));
    Ok(CliModeResult::Finish)
}

pub async fn delete_mode(ctx: &Context, id: &str, yes: bool) -> Result<CliModeResult> {
    let id = EntryId::from(id.trim());
    if !yes && !confirm(&format!("Delete entry {id}?"))? {
        ctx.renderer.print_info("Nothing deleted.");
        return Ok(CliModeResult::NothingToDo);
    }
    let client = ctx.client()?;
    ctx.checked(client.delete_entry(&id).await)?;
    ctx.renderer.print_info(&format!("Deleted entry {id}."));
    Ok(CliModeResult::Finish)
}

fn new_entry(args: &AddArgs, journal_text: &str) -> NewEntry {
    let tags = TagSet::parse(args.tags.as_deref().unwrap_or_default());
    NewEntry {
        song_title: args.title.trim().to_string(),
        artist: args.artist.trim().to_string(),
        link: non_blank(args.link.as_deref()),
        journal_text: journal_text.to_string(),
        mood: args.mood,
        tags: tags.iter().map(str::to_string).collect(),
        image: non_blank(args.image.as_deref()),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibes_core::Mood;

    fn args() -> AddArgs {
        AddArgs {
            title: " Redbone ".into(),
            artist: "Childish Gambino".into(),
            link: Some("  ".into()),
            image: Some("https://img/redbone.jpg".into()),
            mood: Some(Mood::Happy),
            tags: Some("Night, chill,,night".into()),
            text: Vec::new(),
        }
    }

    #[test]
    fn new_entry_normalizes_inputs() {
        let entry = new_entry(&args(), "late drive");
        assert_eq!(entry.song_title, "Redbone");
        assert_eq!(entry.link, None);
        assert_eq!(entry.image.as_deref(), Some("https://img/redbone.jpg"));
        assert_eq!(entry.tags, vec!["chill", "night"]);
        assert_eq!(entry.mood, Some(Mood::Happy));
    }

    #[test]
    fn missing_tags_send_an_empty_list() {
        let entry = new_entry(
            &AddArgs {
                tags: None,
                ..args()
            },
            "x",
        );
        assert!(entry.tags.is_empty());
    }
}
