//! Anchor activation and smooth scrolling

use crate::host::{Document, ScrollBehavior};

/// Gap kept between the nav bar and the target's top edge
pub const SCROLL_PADDING: f64 = 20.0;

/// Fixed offset used by the hero call-to-action buttons
pub const CTA_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Smooth scroll requested to `top`
    Scrolled { top: f64 },
    /// In-page anchor whose element does not exist
    MissingTarget,
    /// Not a fragment link; default handling applies
    NotInPage,
}

impl Activation {
    /// Whether default navigation was suppressed
    pub fn handled(&self) -> bool {
        !matches!(self, Activation::NotInPage)
    }
}

/// Scroll so the target's top edge lands `offset` below the viewport top
pub fn scroll_to_section(id: &str, offset: f64, document: &mut dyn Document) -> Option<f64> {
    let Some(bounds) = document.element_bounds(id) else {
        tracing::debug!(section = id, "scroll target not in document");
        return None;
    };
    let top = bounds.top - offset;
    document.scroll_to(top, ScrollBehavior::Smooth);
    Some(top)
}

/// Activate a navigation anchor with the bar currently `bar_height` tall
pub fn activate(
    anchor: &str,
    bar_height: f64,
    padding: f64,
    document: &mut dyn Document,
) -> Activation {
    let Some(id) = anchor.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return Activation::NotInPage;
    };
    match scroll_to_section(id, bar_height + padding, document) {
        Some(top) => Activation::Scrolled { top },
        None => Activation::MissingTarget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::FakeDocument;

    fn page() -> FakeDocument {
        FakeDocument::new(1200.0, 800.0)
            .with_section("top", 0.0, 900.0)
            .with_section("projects", 900.0, 1200.0)
            .with_section("experience", 2100.0, 1000.0)
    }

    #[test]
    fn scrolls_below_the_bar() {
        let mut doc = page();
        let outcome = activate("#experience", 64.0, SCROLL_PADDING, &mut doc);
        assert_eq!(outcome, Activation::Scrolled { top: 2016.0 });
        assert_eq!(doc.scroll_requests, vec![(2016.0, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let mut doc = page();
        let outcome = activate("#contact", 64.0, SCROLL_PADDING, &mut doc);
        assert_eq!(outcome, Activation::MissingTarget);
        assert!(outcome.handled());
        assert!(doc.scroll_requests.is_empty());
    }

    #[test]
    fn external_links_fall_through() {
        let mut doc = page();
        for anchor in ["https://example.com", "#", "mailto:me@example.com"] {
            let outcome = activate(anchor, 64.0, SCROLL_PADDING, &mut doc);
            assert!(!outcome.handled());
        }
        assert!(doc.scroll_requests.is_empty());
    }

    #[test]
    fn cta_uses_fixed_offset() {
        let mut doc = page();
        assert_eq!(scroll_to_section("projects", CTA_OFFSET, &mut doc), Some(820.0));
        assert_eq!(scroll_to_section("contact", CTA_OFFSET, &mut doc), None);
        assert_eq!(doc.scroll_requests.len(), 1);
    }
}
