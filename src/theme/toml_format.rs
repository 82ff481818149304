// TOML theme format
//
// Every theme spells out each page color; nothing is derived from a palette.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub page: PageColors,
    pub nav: NavColors,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Body text and section chrome
#[derive(Debug, Clone, Deserialize)]
pub struct PageColors {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    /// Headings, the typed name, the first stat
    pub accent: String,
    /// Second stat and secondary highlights
    pub accent_alt: String,
    /// Tag chips and card fills
    pub surface: String,
    pub border: String,
}

/// Navigation bar, dropdown and progress bar
#[derive(Debug, Clone, Deserialize)]
pub struct NavColors {
    pub bar: String,
    pub item: String,
    pub active: String,
    pub active_fg: String,
    pub progress: String,
}

impl TomlTheme {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    ///
    /// Supports `#RRGGBB`, `ansi:0`-`ansi:15`, and `ansi:fg`/`ansi:bg` for the
    /// terminal's own defaults.
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
    }
}
