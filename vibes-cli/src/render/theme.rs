use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};
use vibes_core::Mood;

/// Dark palette built around the streaming green used for fallback accents.
pub struct Groove;

impl Groove {
    pub fn default_groove_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Groove::FG);
        skin.bold.set_fg(Groove::FG);
        skin.italic.set_fg(Groove::MUTED);

        // Month headings.
        skin.headers[0].set_fg(Groove::GREEN);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        // Entry titles.
        skin.headers[1].set_fg(Groove::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.table.set_fg(Groove::PURPLE);
        skin.bullet.set_fg(Groove::GREEN);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Groove::MUTED);
        skin.inline_code.set_fg(Groove::CYAN);
        skin.inline_code.set_bg(Groove::BG);

        skin
    }

    pub fn mood_color(mood: Mood) -> Color {
        match mood {
            Mood::Happy => Groove::YELLOW,
            Mood::Neutral => Groove::BLUE,
            Mood::Sad => Groove::PURPLE,
        }
    }

    pub const BG: Color = Color::Rgb {
        r: 0x19,
        g: 0x14,
        b: 0x14,
    }; // #191414
    pub const FG: Color = Color::Rgb {
        r: 0xE6,
        g: 0xE6,
        b: 0xE6,
    }; // #E6E6E6
    pub const MUTED: Color = Color::Rgb {
        r: 0xB3,
        g: 0xB3,
        b: 0xB3,
    }; // #B3B3B3
    pub const GREEN: Color = Color::Rgb {
        r: 0x1D,
        g: 0xB9,
        b: 0x54,
    }; // #1DB954
    pub const YELLOW: Color = Color::Rgb {
        r: 0xF5,
        g: 0xC5,
        b: 0x18,
    }; // #F5C518
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
    pub const PURPLE: Color = Color::Rgb {
        r: 0xB4,
        g: 0x9C,
        b: 0xE6,
    }; // #B49CE6
    pub const CYAN: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    }; // #56B6C2
}
