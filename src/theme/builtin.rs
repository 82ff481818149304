//! Themes compiled into the binary
//!
//! User themes in ~/.config/folio/themes/ with the same name take precedence.

pub struct BuiltinTheme {
    pub name: &'static str,
    pub content: &'static str,
}

pub const VIOLET_DARK: &str = r##"[meta]
name = "Violet Dark"
author = "folio"

[page]
background = "#16131F"
foreground = "#E7E3F1"
muted = "#9A93AD"
accent = "#A78BFA"
accent_alt = "#F472B6"
surface = "#2A2438"
border = "#3B3350"

[nav]
bar = "#1E1A2B"
item = "#C9C2DC"
active = "#7C3AED"
active_fg = "#FFFFFF"
progress = "#7C3AED"
"##;

pub const VIOLET_LIGHT: &str = r##"[meta]
name = "Violet Light"
author = "folio"

[page]
background = "#FAFAFB"
foreground = "#111827"
muted = "#4B5563"
accent = "#7C3AED"
accent_alt = "#DB2777"
surface = "#F3F4F6"
border = "#E5E7EB"

[nav]
bar = "#FFFFFF"
item = "#374151"
active = "#7C3AED"
active_fg = "#FFFFFF"
progress = "#7C3AED"
"##;

pub const TERMINAL: &str = r##"[meta]
name = "Terminal"
author = "folio"

[page]
background = "ansi:bg"
foreground = "ansi:fg"
muted = "ansi:8"
accent = "ansi:13"
accent_alt = "ansi:5"
surface = "ansi:8"
border = "ansi:8"

[nav]
bar = "ansi:bg"
item = "ansi:7"
active = "ansi:5"
active_fg = "ansi:15"
progress = "ansi:5"
"##;

pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        name: "Violet Dark",
        content: VIOLET_DARK,
    },
    BuiltinTheme {
        name: "Violet Light",
        content: VIOLET_LIGHT,
    },
    BuiltinTheme {
        name: "Terminal",
        content: TERMINAL,
    },
];
