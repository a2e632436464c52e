use crate::render::ColorMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use vibes_core::Mood;
use vibes_core::organizer::{GroupOrder, MoodFilter, SortKey, TagFilter};

/// vibes: a journal of the songs that matched your mood
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// What to do. Lists your entries when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates an account on the backend.
    Register {
        #[arg(long, short)]
        username: String,
        #[arg(long, short)]
        email: String,
        /// Asked for on the terminal when not given.
        #[arg(long, env = "VIBES_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Logs in and stores the session for later commands.
    Login {
        #[arg(long, short)]
        email: String,
        /// Asked for on the terminal when not given.
        #[arg(long, env = "VIBES_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forgets the stored session.
    Logout,
    /// Lists your entries grouped by month.
    List(ListArgs),
    /// Shows a single entry with its cover color.
    Show { id: String },
    /// Logs a new vibe. Opens your $EDITOR for the journal text when none is given.
    Add(AddArgs),
    /// Deletes an entry.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Searches songs to log (e.g., `vibes search bohemian rhapsody`).
    Search {
        #[arg(required = true, num_args(1..))]
        query: Vec<String>,
    },
    /// Songs recommended from your past moods.
    Suggestions,
    /// Prints the accent color of an image URL or file as JSON.
    Color { image: String },
    /// Prints where configuration and session files live.
    Paths,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only entries with this mood: all, happy, neutral or sad.
    #[arg(long, short)]
    pub mood: Option<MoodFilter>,
    /// Only entries carrying this tag (e.g., `vibes list --tag chill`).
    #[arg(long, short)]
    pub tag: Option<TagFilter>,
    /// newest, oldest, title or artist. Defaults to the configured sort.
    #[arg(long)]
    pub sort: Option<SortKey>,
    /// first-seen, newest-first or oldest-first.
    #[arg(long)]
    pub group_order: Option<GroupOrder>,
    /// Output style: "long" or "short". Short style only shows one line per entry.
    #[arg(long, short, value_enum, env = "VIBES_STYLE", default_value_t = Style::Long)]
    pub style: Style,
    /// Prints the count of found entries.
    #[arg(long)]
    pub count: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, short)]
    pub title: String,
    #[arg(long, short)]
    pub artist: String,
    /// Link to the song on a streaming service.
    #[arg(long, short)]
    pub link: Option<String>,
    /// Album art URL.
    #[arg(long, short)]
    pub image: Option<String>,
    /// happy, neutral or sad.
    #[arg(long, short)]
    pub mood: Option<Mood>,
    /// Comma separated tags (e.g., `--tags chill,night drive`).
    #[arg(long)]
    pub tags: Option<String>,
    /// Journal text (e.g., `vibes add -t Redbone -a "Childish Gambino" late drive home`).
    #[arg()]
    pub text: Vec<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Style {
    #[default]
    Long,
    Short,
}
