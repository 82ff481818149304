//! Intersection observation
//!
//! Computes how much of each observed element overlaps a root region derived
//! from the viewport, and reports an entry whenever an element crosses one of
//! the configured ratio thresholds or starts/stops intersecting. The very
//! first computation for a target always reports.
//!
//! Only the vertical axis is modelled: sections span the full page width, so
//! horizontal margins are parsed but do not affect ratios.

use super::document::{Bounds, Document};
use anyhow::{bail, Context, Result};

/// One margin component: absolute or relative to the root size
#[derive(Debug, Clone, Copy, PartialEq)]
enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    fn parse(token: &str) -> Result<Self> {
        if let Some(num) = token.strip_suffix('%') {
            let value: f64 = num
                .parse()
                .with_context(|| format!("invalid percentage '{}'", token))?;
            return Ok(Length::Percent(value));
        }
        if let Some(num) = token.strip_suffix("px") {
            let value: f64 = num
                .parse()
                .with_context(|| format!("invalid pixel length '{}'", token))?;
            return Ok(Length::Px(value));
        }
        // A bare zero is the only unitless length CSS accepts
        match token.parse::<f64>() {
            Ok(v) if v == 0.0 => Ok(Length::Px(0.0)),
            _ => bail!("length '{}' needs a px or % unit", token),
        }
    }

    fn resolve(&self, basis: f64) -> f64 {
        match self {
            Length::Px(v) => *v,
            Length::Percent(p) => basis * p / 100.0,
        }
    }
}

/// Root margin in CSS shorthand order (top, right, bottom, left)
///
/// Negative values shrink the root.
#[derive(Debug, Clone, PartialEq)]
pub struct RootMargin {
    top: Length,
    right: Length,
    bottom: Length,
    left: Length,
}

impl RootMargin {
    /// Parse a 1-4 value CSS margin shorthand, e.g. `-20% 0px -60% 0px`
    pub fn parse(input: &str) -> Result<Self> {
        let parts = input
            .split_whitespace()
            .map(Length::parse)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid root margin '{}'", input))?;

        let (top, right, bottom, left) = match parts.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => bail!("root margin '{}' must have 1 to 4 values", input),
        };

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    pub fn zero() -> Self {
        Self {
            top: Length::Px(0.0),
            right: Length::Px(0.0),
            bottom: Length::Px(0.0),
            left: Length::Px(0.0),
        }
    }

    /// Root region for a viewport at `scroll_y` of height `height`,
    /// as (top, bottom) in document coordinates
    fn root_span(&self, scroll_y: f64, height: f64) -> (f64, f64) {
        let top = scroll_y - self.top.resolve(height);
        let bottom = scroll_y + height + self.bottom.resolve(height);
        (top, bottom)
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::zero()
    }
}

/// Observer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: RootMargin,
    /// Ratio thresholds; sorted and clamped to [0, 1] on construction
    pub thresholds: Vec<f64>,
}

impl ObserverOptions {
    pub fn new(root_margin: RootMargin, thresholds: &[f64]) -> Self {
        let mut thresholds: Vec<f64> = thresholds.iter().map(|t| t.clamp(0.0, 1.0)).collect();
        thresholds.sort_by(|a, b| a.total_cmp(b));
        thresholds.dedup();
        if thresholds.is_empty() {
            thresholds.push(0.0);
        }
        Self {
            root_margin,
            thresholds,
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::new(RootMargin::zero(), &[0.0])
    }
}

/// A single visibility report for one target
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
    /// Visible fraction of the target's height, 0.0 to 1.0
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
            ratio,
        }
    }
}

/// Last reported state of a target: None when not intersecting, otherwise
/// how many thresholds the ratio has reached
type Observation = Option<usize>;

#[derive(Debug)]
struct Target {
    id: String,
    last: Option<Observation>,
}

/// Tracks a set of element ids against a document
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    targets: Vec<Target>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
        }
    }

    /// Start observing an element id; observing twice is a no-op
    pub fn observe(&mut self, id: &str) {
        if self.targets.iter().any(|t| t.id == id) {
            return;
        }
        self.targets.push(Target {
            id: id.to_string(),
            last: None,
        });
    }

    /// Stop observing everything
    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    #[cfg(test)]
    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.id.as_str())
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Compute current intersections and return entries for every target
    /// whose threshold bucket or intersecting state changed
    pub fn take_records(&mut self, document: &dyn Document) -> Vec<IntersectionEntry> {
        let viewport = document.viewport();
        let root = self
            .options
            .root_margin
            .root_span(document.scroll_y(), viewport.height);

        let mut records = Vec::new();
        for target in &mut self.targets {
            let (is_intersecting, ratio) = match document.element_bounds(&target.id) {
                Some(bounds) => intersect(bounds, root),
                // Element left the document
                None => (false, 0.0),
            };

            let observation = if is_intersecting {
                Some(
                    self.options
                        .thresholds
                        .iter()
                        .filter(|t| ratio >= **t)
                        .count(),
                )
            } else {
                None
            };

            if target.last != Some(observation) {
                target.last = Some(observation);
                records.push(IntersectionEntry::new(
                    target.id.clone(),
                    is_intersecting,
                    ratio,
                ));
            }
        }
        records
    }
}

/// Overlap of `bounds` with the root span as (intersecting, ratio)
fn intersect(bounds: Bounds, (root_top, root_bottom): (f64, f64)) -> (bool, f64) {
    if root_bottom <= root_top {
        return (false, 0.0);
    }

    if bounds.height <= 0.0 {
        let inside = bounds.top >= root_top && bounds.top <= root_bottom;
        return (inside, if inside { 1.0 } else { 0.0 });
    }

    let overlap = bounds.bottom().min(root_bottom) - bounds.top.max(root_top);
    if overlap <= 0.0 {
        (false, 0.0)
    } else {
        (true, (overlap / bounds.height).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::FakeDocument;

    fn section_options() -> ObserverOptions {
        ObserverOptions::new(
            RootMargin::parse("-20% 0px -60% 0px").unwrap(),
            &[0.25, 0.5, 0.75, 1.0],
        )
    }

    #[test]
    fn parses_shorthand_forms() {
        let four = RootMargin::parse("-20% 0px -60% 0px").unwrap();
        assert_eq!(four.top, Length::Percent(-20.0));
        assert_eq!(four.bottom, Length::Percent(-60.0));
        assert_eq!(four.left, Length::Px(0.0));

        let one = RootMargin::parse("10px").unwrap();
        assert_eq!(one.top, Length::Px(10.0));
        assert_eq!(one.left, Length::Px(10.0));

        let two = RootMargin::parse("5% 0").unwrap();
        assert_eq!(two.bottom, Length::Percent(5.0));
        assert_eq!(two.right, Length::Px(0.0));

        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.left, Length::Px(2.0));
        assert_eq!(three.bottom, Length::Px(3.0));
    }

    #[test]
    fn rejects_bad_margins() {
        assert!(RootMargin::parse("").is_err());
        assert!(RootMargin::parse("10").is_err());
        assert!(RootMargin::parse("abc%").is_err());
        assert!(RootMargin::parse("1px 1px 1px 1px 1px").is_err());
    }

    #[test]
    fn negative_margins_narrow_the_root_band() {
        let margin = RootMargin::parse("-20% 0px -60% 0px").unwrap();
        // 1000 tall viewport scrolled to 500: band is 700..900
        assert_eq!(margin.root_span(500.0, 1000.0), (700.0, 900.0));
    }

    #[test]
    fn thresholds_are_sorted_and_clamped() {
        let options = ObserverOptions::new(RootMargin::zero(), &[1.5, 0.5, -1.0, 0.5]);
        assert_eq!(options.thresholds, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn first_computation_reports_every_target() {
        let doc = FakeDocument::new(1200.0, 1000.0)
            .with_section("top", 0.0, 600.0)
            .with_section("contact", 3000.0, 600.0);
        let mut observer = IntersectionObserver::new(section_options());
        observer.observe("top");
        observer.observe("contact");

        let records = observer.take_records(&doc);
        assert_eq!(records.len(), 2);
        // Band is 200..400: all 200 of top's 600 px are inside it
        assert!(records[0].is_intersecting);
        assert!((records[0].ratio - 200.0 / 600.0).abs() < 1e-9);
        assert!(!records[1].is_intersecting);

        // Nothing moved, nothing to report
        assert!(observer.take_records(&doc).is_empty());
    }

    #[test]
    fn reports_only_on_threshold_crossings() {
        let mut doc = FakeDocument::new(1200.0, 1000.0).with_section("projects", 1000.0, 200.0);
        let mut observer = IntersectionObserver::new(section_options());
        observer.observe("projects");
        observer.take_records(&doc);

        // Scrolled to 900 the band is 1100..1300: 100 of 200 px visible
        doc.set_scroll(900.0);
        let records = observer.take_records(&doc);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_intersecting);
        assert!((records[0].ratio - 0.5).abs() < 1e-9);

        // Small move within the same bucket: 0.66, still between 0.5 and 0.75
        doc.set_scroll(890.0);
        assert!(observer.take_records(&doc).is_empty());

        // Band 1050..1250 covers 150 of 200 px: reaches 0.75
        doc.set_scroll(850.0);
        assert_eq!(observer.take_records(&doc).len(), 1);

        // Leaves the band entirely
        doc.set_scroll(0.0);
        let records = observer.take_records(&doc);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
    }

    #[test]
    fn removed_elements_report_not_intersecting() {
        let mut doc = FakeDocument::new(1200.0, 1000.0).with_section("top", 0.0, 600.0);
        let mut observer = IntersectionObserver::new(section_options());
        observer.observe("top");
        observer.take_records(&doc);

        doc.remove_section("top");
        let records = observer.take_records(&doc);
        assert_eq!(records, vec![IntersectionEntry::new("top", false, 0.0)]);
    }

    #[test]
    fn disconnect_clears_targets() {
        let mut observer = IntersectionObserver::new(section_options());
        observer.observe("a");
        observer.observe("a");
        observer.observe("b");
        assert_eq!(observer.observed().collect::<Vec<_>>(), vec!["a", "b"]);

        observer.disconnect();
        assert!(!observer.is_observing());
    }
}
