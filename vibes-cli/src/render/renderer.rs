use super::theme::Groove;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};
use vibes_core::api::{Suggestion, Track};
use vibes_core::entry::EntryError;
use vibes_core::{ColorBoard, ColorResult, Entry, EntryGroups, TagSet};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Groove::default_groove_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%B %-d, %Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn use_color(&self) -> bool {
        self.opts.use_color
    }

    pub fn set_short_mode(&mut self, short_mode: bool) {
        self.opts.short_mode = short_mode;
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            println!("{}", message);
        }
    }

    /// One line per entry: date, mood, title, artist and tags.
    pub fn print_entry_line(&self, entry: &Entry, accent: Option<&ColorResult>) {
        let mut date = entry.date.format(&self.opts.date_format).to_string();
        let mood = entry.mood.map(|m| m.emoji()).unwrap_or(" ");
        let mut title = entry.song_title.trim().to_string();
        let mut artist = entry.artist.trim().to_string();
        let tags = self.tag_list(&entry.tags);
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            title = title.with(Color::Yellow).to_string();
            artist = artist.with(Groove::MUTED).to_string();
        }
        println!(
            "{}{} {} {} - {} {}",
            self.swatch(accent),
            date,
            mood,
            title,
            artist,
            tags
        );
    }

    /// Month groups, each with its entries in display order.
    pub fn print_groups(&self, groups: &EntryGroups, colors: &ColorBoard) {
        for (i, group) in groups.groups.iter().enumerate() {
            if i > 0 {
                println!();
            }
            let heading = format!("# {} ({})", group.label, group.entries.len());
            if self.opts.use_color {
                self.print_md(&heading);
            } else {
                println!("{heading}");
            }
            for entry in &group.entries {
                let accent = colors.get_or_fallback(&entry.id);
                if self.opts.short_mode {
                    self.print_entry_line(entry, Some(&accent));
                } else {
                    self.print_entry(entry, Some(&accent));
                }
            }
        }
    }

    /// Full entry: title, metadata, journal text, tags and link.
    pub fn print_entry(&self, entry: &Entry, accent: Option<&ColorResult>) {
        let title = format!("{} - {}", entry.song_title.trim(), entry.artist.trim());
        let date = entry.date.format(&self.opts.date_format).to_string();
        let mood = entry.mood.map(|m| m.label());

        if self.opts.use_color {
            println!("{}{}", self.swatch(accent), title.bold().with(Groove::YELLOW));
            let mut meta = date.with(Color::Cyan).to_string();
            if let (Some(mood), Some(m)) = (mood, entry.mood) {
                meta = format!("{meta}  {}", mood.with(Groove::mood_color(m)));
            }
            println!("{meta}  {}", format!("#{}", entry.id).with(Groove::MUTED));
        } else {
            println!("{title}");
            match mood {
                Some(mood) => println!("{date}  {mood}  #{}", entry.id),
                None => println!("{date}  #{}", entry.id),
            }
        }

        let text = entry.journal_text.trim_end();
        if !text.trim().is_empty() {
            if self.opts.use_color {
                self.print_md(text);
            } else {
                println!("{text}");
            }
        }
        if !entry.tags.is_empty() {
            println!("{}", self.tag_list(&entry.tags));
        }
        if let Some(link) = &entry.link {
            println!("{link}");
        }
        if self.opts.use_color {
            self.print_md("---");
        } else {
            println!("---");
        }
    }

    pub fn print_tracks(&self, tracks: &[Track]) {
        for track in tracks {
            let mut title = track.title.trim().to_string();
            let mut artist = track.artist.trim().to_string();
            if self.opts.use_color {
                title = title.with(Color::Yellow).to_string();
                artist = artist.with(Groove::MUTED).to_string();
            }
            match &track.spotify_url {
                Some(url) => println!("{title} - {artist}  {url}"),
                None => println!("{title} - {artist}"),
            }
        }
    }

    pub fn print_suggestion(&self, suggestion: &Suggestion, accent: Option<&ColorResult>) {
        let mut title = suggestion.title.trim().to_string();
        let mut artist = suggestion.artist.trim().to_string();
        let mut reason = suggestion.reason.trim().to_string();
        if self.opts.use_color {
            title = title.with(Color::Yellow).to_string();
            artist = artist.with(Groove::MUTED).to_string();
            reason = reason.italic().to_string();
        }
        if suggestion.reason.trim().is_empty() {
            println!("{}{} - {}", self.swatch(accent), title, artist);
        } else {
            println!("{}{} - {}  {}", self.swatch(accent), title, artist, reason);
        }
    }

    pub fn print_entry_errors(&self, errors: &[EntryError]) {
        if errors.is_empty() {
            return;
        }
        if self.opts.use_color {
            self.print_md("\n# Skipped entries:");
            for error in errors {
                self.print_md(&format!("* {error}"));
            }
        } else {
            print!("{}", plain_entry_errors(errors));
        }
    }

    /// A colored dot in the entry's accent color, empty without colors.
    fn swatch(&self, accent: Option<&ColorResult>) -> String {
        if !self.opts.use_color {
            return String::new();
        }
        match accent.and_then(ColorResult::to_rgb) {
            Some(rgb) => format!(
                "{} ",
                "●".with(Color::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                })
            ),
            None => String::new(),
        }
    }

    fn tag_list(&self, tags: &TagSet) -> String {
        if tags.is_empty() {
            return String::new();
        }
        let values: Vec<String> = if self.opts.use_color {
            tags.iter().map(colorize_value).collect()
        } else {
            tags.iter().map(str::to_string).collect()
        };
        format!("[{}]", values.join(" - "))
    }
}

fn plain_entry_errors(errors: &[EntryError]) -> String {
    let mut out = String::from("\nSkipped entries:\n");
    for error in errors {
        out.push_str(&format!("* {error}\n"));
    }
    out
}

fn colorize_value(val: &str) -> String {
    let palette = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::DarkYellow,
        Color::DarkCyan,
    ];
    format!("{}", val.with(palette[stable_index(val, palette.len())]))
}

/// FNV-1a, so a tag keeps its color between runs.
fn stable_index(s: &str, modulo: usize) -> usize {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        h ^= *b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    (h as usize) % modulo
}
