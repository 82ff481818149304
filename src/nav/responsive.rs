//! Responsive mode switch for navigation layout decisions.
//!
//! Single source of truth for width thresholds - render code asks for the
//! mode instead of comparing widths itself.

use super::Subscriber;
use crate::host::{EventKind, ListenerId, Listeners};

/// Width thresholds in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// At or above: desktop layout
    pub desktop: f64,
    /// At or above (and below `desktop`): tablet layout
    pub tablet: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            desktop: 1024.0,
            tablet: 768.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    /// >= 1024: full horizontal bar with labels
    #[default]
    Desktop,
    /// 768-1023: compact wrapped bar
    Tablet,
    /// < 768: toggle button with dropdown menu
    Mobile,
}

impl ViewportMode {
    pub fn from_width(width: f64, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.desktop {
            ViewportMode::Desktop
        } else if width >= breakpoints.tablet {
            ViewportMode::Tablet
        } else {
            ViewportMode::Mobile
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportMode::Desktop => "desktop",
            ViewportMode::Tablet => "tablet",
            ViewportMode::Mobile => "mobile",
        }
    }
}

#[derive(Debug)]
pub struct ResponsiveSwitch {
    breakpoints: Breakpoints,
    mode: ViewportMode,
    listener: Option<ListenerId>,
}

impl ResponsiveSwitch {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            mode: ViewportMode::default(),
            listener: None,
        }
    }

    /// Evaluate the initial width and subscribe to resizes
    pub fn mount(&mut self, width: f64, listeners: &mut Listeners<Subscriber>) {
        self.on_resize(width);
        if self.listener.is_none() {
            self.listener = Some(listeners.subscribe(EventKind::Resize, Subscriber::Viewport));
        }
    }

    /// Returns true when the mode changed
    pub fn on_resize(&mut self, width: f64) -> bool {
        let mode = ViewportMode::from_width(width, &self.breakpoints);
        if mode == self.mode {
            return false;
        }
        tracing::debug!(width, from = self.mode.as_str(), to = mode.as_str(), "viewport mode");
        self.mode = mode;
        true
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn teardown(&mut self, listeners: &mut Listeners<Subscriber>) {
        if let Some(id) = self.listener.take() {
            listeners.unsubscribe(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        let bp = Breakpoints::default();
        assert_eq!(ViewportMode::from_width(1440.0, &bp), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(1024.0, &bp), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(1023.0, &bp), ViewportMode::Tablet);
        assert_eq!(ViewportMode::from_width(768.0, &bp), ViewportMode::Tablet);
        assert_eq!(ViewportMode::from_width(767.0, &bp), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(0.0, &bp), ViewportMode::Mobile);
    }

    #[test]
    fn only_mobile_is_mobile() {
        assert!(!ViewportMode::Desktop.is_mobile());
        assert!(!ViewportMode::Tablet.is_mobile());
        assert!(ViewportMode::Mobile.is_mobile());
    }

    #[test]
    fn resize_reports_mode_changes_only() {
        let mut listeners = Listeners::new();
        let mut switch = ResponsiveSwitch::new(Breakpoints::default());
        switch.mount(1200.0, &mut listeners);
        assert_eq!(switch.mode(), ViewportMode::Desktop);
        assert_eq!(listeners.count(EventKind::Resize), 1);

        assert!(!switch.on_resize(1100.0));
        assert!(switch.on_resize(900.0));
        assert_eq!(switch.mode(), ViewportMode::Tablet);
        assert!(switch.on_resize(500.0));
        assert_eq!(switch.mode(), ViewportMode::Mobile);

        switch.teardown(&mut listeners);
        assert!(listeners.is_empty());
    }

    #[test]
    fn custom_breakpoints() {
        let bp = Breakpoints {
            desktop: 120.0,
            tablet: 80.0,
        };
        assert_eq!(ViewportMode::from_width(100.0, &bp), ViewportMode::Tablet);
    }
}
