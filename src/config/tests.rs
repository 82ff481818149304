//! Configuration tests
//!
//! The default template must parse back into the file layer and produce the
//! same effective values, so a freshly written config never changes behaviour.

use super::*;
use crate::nav::{Breakpoints, NavConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.cell_width_px, Some(8.0));
    assert_eq!(file.frame_interval_ms, Some(16));

    let navigation = NavigationConfig::from_file(file.navigation);
    assert_eq!(navigation, NavigationConfig::default());

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_with_content_path() {
    let mut config = Config::default();
    config.content_path = Some(PathBuf::from("/srv/me/portfolio.toml"));
    config.navigation.thresholds = vec![0.1, 0.9];

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(file.content_path.as_deref(), Some("/srv/me/portfolio.toml"));
    assert_eq!(
        file.navigation.and_then(|n| n.thresholds),
        Some(vec![0.1, 0.9])
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Layering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
cell_height_px = 20.0

[navigation]
hide_threshold = 150.0
"#,
    )
    .unwrap();
    let config = Config::from_file_config(file);

    assert_eq!(config.cell_height_px, 20.0);
    assert_eq!(config.cell_width_px, 8.0);
    assert_eq!(config.navigation.hide_threshold, 150.0);
    assert_eq!(config.navigation.scroll_padding, 20.0);
    assert_eq!(config.navigation.root_margin, "-20% 0px -60% 0px");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_non_positive_geometry_is_ignored() {
    let file: FileConfig = toml::from_str("cell_width_px = 0.0\nframe_interval_ms = 0").unwrap();
    let config = Config::from_file_config(file);
    assert_eq!(config.cell_width_px, 8.0);
    assert_eq!(config.frame_interval_ms, 16);
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_default_navigation_matches_controller_defaults() {
    let nav = NavigationConfig::default().to_nav_config().unwrap();
    assert_eq!(nav, NavConfig::default());
}

#[test]
fn test_navigation_rejects_bad_values() {
    let mut navigation = NavigationConfig::default();
    navigation.root_margin = "twenty percent".to_string();
    assert!(navigation.to_nav_config().is_err());

    let mut navigation = NavigationConfig::default();
    navigation.tablet_breakpoint = 2000.0;
    assert!(navigation.to_nav_config().is_err());
}

#[test]
fn test_navigation_custom_breakpoints() {
    let file: FileNavigation = toml::from_str(
        r#"
desktop_breakpoint = 1280.0
tablet_breakpoint = 640.0
thresholds = [1.0, 0.5]
"#,
    )
    .unwrap();
    let nav = NavigationConfig::from_file(Some(file)).to_nav_config().unwrap();
    assert_eq!(
        nav.breakpoints,
        Breakpoints {
            desktop: 1280.0,
            tablet: 640.0
        }
    );
    assert_eq!(nav.observer.thresholds, vec![0.5, 1.0]);
}
