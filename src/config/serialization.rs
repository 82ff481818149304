//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: Violet Dark, Violet Light, Terminal
theme = "{theme}"

# Page content file (TOML). Built-in content is used when unset.
{content_path}
# Terminal cell size in logical pixels; breakpoints and offsets are in pixels
cell_width_px = {cell_w:?}
cell_height_px = {cell_h:?}

# Animation frame interval
frame_interval_ms = {frame_ms}

# Navigation bar behaviour
[navigation]
# Scroll distance before the bar hides (down) or reappears (up)
hide_threshold = {hide:?}
# Gap kept between the bar and a section reached from the menu
scroll_padding = {padding:?}
# Offset used by the "View Projects" / "Contact Me" buttons
cta_offset = {cta:?}
# Layout switches: desktop at or above, tablet at or above, mobile below
desktop_breakpoint = {desktop:?}
tablet_breakpoint = {tablet:?}
# Active-section detection: region of the viewport that counts, and the
# visibility ratios that trigger a re-check
root_margin = "{root_margin}"
thresholds = {thresholds:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the in-app log view or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            content_path = self
                .content_path
                .as_ref()
                .map(|p| format!("content_path = \"{}\"\n", p.display()))
                .unwrap_or_else(|| "# content_path = \"~/portfolio.toml\"\n".to_string()),
            cell_w = self.cell_width_px,
            cell_h = self.cell_height_px,
            frame_ms = self.frame_interval_ms,
            hide = self.navigation.hide_threshold,
            padding = self.navigation.scroll_padding,
            cta = self.navigation.cta_offset,
            desktop = self.navigation.desktop_breakpoint,
            tablet = self.navigation.tablet_breakpoint,
            root_margin = self.navigation.root_margin,
            thresholds = self.navigation.thresholds,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
