// Theme system for the terminal page
//
// Theme loading priority:
// 1. User TOML themes from ~/.config/folio/themes/*.toml
// 2. Built-in themes
// 3. Hardcoded fallback

mod builtin;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use std::path::PathBuf;

pub const DEFAULT_THEME: &str = "Violet Dark";

/// Resolved theme ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // ─── Page ────────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub surface: Color,
    pub border: Color,

    // ─── Navigation ──────────────────────────────────────────
    pub nav_bar: Color,
    pub nav_item: Color,
    pub nav_active: Color,
    pub nav_active_fg: Color,
    pub progress: Color,
}

impl Theme {
    /// Load theme by name, falling back to the default theme
    pub fn by_name(name: &str) -> Self {
        if let Some(theme) = Self::load_user(name) {
            return theme;
        }
        if let Some(theme) = Self::load_builtin(name) {
            return theme;
        }
        tracing::warn!(theme = name, "unknown theme, using {}", DEFAULT_THEME);
        Self::load_builtin(DEFAULT_THEME).unwrap_or_else(Self::hardcoded_default)
    }

    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("folio").join("themes"))
    }

    fn load_user(name: &str) -> Option<Self> {
        let dir = Self::themes_dir()?;
        for file_name in [name.to_string(), name.replace(' ', "_")] {
            let path = dir.join(format!("{}.toml", file_name));
            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            match TomlTheme::parse(&contents) {
                Ok(theme) => return Some(Self::from_toml(theme)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring invalid theme file")
                }
            }
        }
        None
    }

    fn load_builtin(name: &str) -> Option<Self> {
        let normalized = name.replace('_', " ");
        builtin::BUILTIN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(&normalized))
            .and_then(|t| TomlTheme::parse(t.content).ok())
            .map(Self::from_toml)
    }

    fn from_toml(toml: TomlTheme) -> Self {
        tracing::debug!(
            theme = %toml.meta.name,
            author = toml.meta.author.as_deref().unwrap_or("unknown"),
            "theme loaded"
        );
        let parse = TomlTheme::parse_color;
        Self {
            name: toml.meta.name.clone(),
            background: parse(&toml.page.background),
            foreground: parse(&toml.page.foreground),
            muted: parse(&toml.page.muted),
            accent: parse(&toml.page.accent),
            accent_alt: parse(&toml.page.accent_alt),
            surface: parse(&toml.page.surface),
            border: parse(&toml.page.border),
            nav_bar: parse(&toml.nav.bar),
            nav_item: parse(&toml.nav.item),
            nav_active: parse(&toml.nav.active),
            nav_active_fg: parse(&toml.nav.active_fg),
            progress: parse(&toml.nav.progress),
        }
    }

    /// Used only if the built-in TOML fails to parse
    fn hardcoded_default() -> Self {
        Self {
            name: "Fallback".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            accent: Color::LightMagenta,
            accent_alt: Color::Magenta,
            surface: Color::DarkGray,
            border: Color::DarkGray,
            nav_bar: Color::Reset,
            nav_item: Color::Gray,
            nav_active: Color::Magenta,
            nav_active_fg: Color::White,
            progress: Color::Magenta,
        }
    }

    /// Names of the built-in themes
    pub fn list_builtin() -> Vec<&'static str> {
        builtin::BUILTIN_THEMES.iter().map(|t| t.name).collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for name in Theme::list_builtin() {
            let theme = Theme::load_builtin(name).expect(name);
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn builtin_lookup_ignores_case_and_underscores() {
        assert!(Theme::load_builtin("violet_light").is_some());
        assert!(Theme::load_builtin("TERMINAL").is_some());
        assert!(Theme::load_builtin("Solarized").is_none());
    }

    #[test]
    fn default_theme_has_purple_progress() {
        let theme = Theme::load_builtin(DEFAULT_THEME).unwrap();
        assert_eq!(theme.progress, Color::Rgb(0x7C, 0x3A, 0xED));
    }
}
