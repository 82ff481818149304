//! Navigation tunables: hide threshold, anchor offsets, breakpoints, scroll-spy

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::host::{ObserverOptions, RootMargin};
use crate::nav::{
    Breakpoints, NavConfig, CTA_OFFSET, HIDE_THRESHOLD, SCROLL_PADDING, SECTION_ROOT_MARGIN,
    SECTION_THRESHOLDS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Scroll distance before the bar hides or reappears
    pub hide_threshold: f64,
    /// Gap between the bar and an activated section
    pub scroll_padding: f64,
    /// Offset used by the hero buttons
    pub cta_offset: f64,
    pub desktop_breakpoint: f64,
    pub tablet_breakpoint: f64,
    /// CSS margin shorthand applied to the scroll-spy root
    pub root_margin: String,
    pub thresholds: Vec<f64>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        let breakpoints = Breakpoints::default();
        Self {
            hide_threshold: HIDE_THRESHOLD,
            scroll_padding: SCROLL_PADDING,
            cta_offset: CTA_OFFSET,
            desktop_breakpoint: breakpoints.desktop,
            tablet_breakpoint: breakpoints.tablet,
            root_margin: SECTION_ROOT_MARGIN.to_string(),
            thresholds: SECTION_THRESHOLDS.to_vec(),
        }
    }
}

/// Navigation settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileNavigation {
    pub hide_threshold: Option<f64>,
    pub scroll_padding: Option<f64>,
    pub cta_offset: Option<f64>,
    pub desktop_breakpoint: Option<f64>,
    pub tablet_breakpoint: Option<f64>,
    pub root_margin: Option<String>,
    pub thresholds: Option<Vec<f64>>,
}

impl NavigationConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileNavigation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            hide_threshold: file.hide_threshold.unwrap_or(defaults.hide_threshold),
            scroll_padding: file.scroll_padding.unwrap_or(defaults.scroll_padding),
            cta_offset: file.cta_offset.unwrap_or(defaults.cta_offset),
            desktop_breakpoint: file
                .desktop_breakpoint
                .unwrap_or(defaults.desktop_breakpoint),
            tablet_breakpoint: file.tablet_breakpoint.unwrap_or(defaults.tablet_breakpoint),
            root_margin: file.root_margin.unwrap_or(defaults.root_margin),
            thresholds: file
                .thresholds
                .filter(|t| !t.is_empty())
                .unwrap_or(defaults.thresholds),
        }
    }

    /// Validate and convert into controller settings
    pub fn to_nav_config(&self) -> Result<NavConfig> {
        if self.tablet_breakpoint > self.desktop_breakpoint {
            bail!(
                "tablet_breakpoint ({}) is above desktop_breakpoint ({})",
                self.tablet_breakpoint,
                self.desktop_breakpoint
            );
        }
        if self.hide_threshold < 0.0 {
            bail!("hide_threshold must not be negative");
        }

        let root_margin = RootMargin::parse(&self.root_margin)
            .with_context(|| "invalid [navigation] root_margin".to_string())?;

        Ok(NavConfig {
            hide_threshold: self.hide_threshold,
            scroll_padding: self.scroll_padding,
            cta_offset: self.cta_offset,
            breakpoints: Breakpoints {
                desktop: self.desktop_breakpoint,
                tablet: self.tablet_breakpoint,
            },
            observer: ObserverOptions::new(root_margin, &self.thresholds),
        })
    }
}
