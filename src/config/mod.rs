//! Configuration for the portfolio host
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

use crate::theme::DEFAULT_THEME;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod navigation;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use navigation::{FileNavigation, NavigationConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Violet Dark", "Violet Light", "Terminal"
    pub theme: String,

    /// Optional TOML file replacing the built-in page content
    pub content_path: Option<PathBuf>,

    /// Logical pixels per terminal column
    pub cell_width_px: f64,

    /// Logical pixels per terminal row
    pub cell_height_px: f64,

    /// Animation frame interval
    pub frame_interval_ms: u64,

    /// Scroll tracking, scroll-spy and layout tunables
    pub navigation: NavigationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            content_path: None,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            frame_interval_ms: 16,
            navigation: NavigationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub content_path: Option<String>,
    pub cell_width_px: Option<f64>,
    pub cell_height_px: Option<f64>,
    pub frame_interval_ms: Option<u64>,

    /// Optional [navigation] section
    pub navigation: Option<FileNavigation>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be read or parsed.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Numbers written as strings (use 100.0, not \"100\")");
                    eprintln!("    - Malformed array syntax in thresholds");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `folio config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::from_file_config(Self::load_file_config())
    }

    pub(crate) fn from_file_config(file: FileConfig) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = std::env::var("FOLIO_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Content file: env > file > built-in
        let content_path = std::env::var("FOLIO_CONTENT")
            .ok()
            .or(file.content_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        // Cell geometry: file > default, must stay positive
        let cell_width_px = file
            .cell_width_px
            .filter(|v| *v > 0.0)
            .unwrap_or(defaults.cell_width_px);
        let cell_height_px = file
            .cell_height_px
            .filter(|v| *v > 0.0)
            .unwrap_or(defaults.cell_height_px);

        let frame_interval_ms = file
            .frame_interval_ms
            .filter(|v| *v > 0)
            .unwrap_or(defaults.frame_interval_ms);

        Self {
            theme,
            content_path,
            cell_width_px,
            cell_height_px,
            frame_interval_ms,
            navigation: NavigationConfig::from_file(file.navigation),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
