// Terminal-hosted page document
//
// The page is a single tall column of rows. Controllers see it in logical
// pixels: every row is `cell.height_px` tall and every column
// `cell.width_px` wide, so breakpoints and offsets keep their web meaning.
//
// Any change of scroll position, whether from the wheel, an instant jump or a
// smooth-scroll animation step, raises the `scrolled` flag; the host turns
// that into a scroll event on its next tick.

use crate::host::{Bounds, Document, ScrollBehavior, Viewport};
use std::time::Duration;

/// Length of a smooth scroll animation
pub const SMOOTH_SCROLL: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width_px: f64,
    pub height_px: f64,
}

impl CellSize {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// A block of rows with an optional element id
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Option<&'static str>,
    pub rows: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    id: &'static str,
    top: u16,
    rows: u16,
}

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: f64,
    to: f64,
    started: Duration,
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug)]
pub struct Page {
    cell: CellSize,
    cols: u16,
    rows: u16,
    spans: Vec<Span>,
    content_rows: u32,
    scroll_y: f64,
    overflow: String,
    animation: Option<SmoothScroll>,
    clock: Duration,
    scrolled: bool,
}

impl Page {
    pub fn new(cell: CellSize, cols: u16, rows: u16) -> Self {
        Self {
            cell,
            cols,
            rows,
            spans: Vec::new(),
            content_rows: 0,
            scroll_y: 0.0,
            overflow: String::new(),
            animation: None,
            clock: Duration::ZERO,
            scrolled: false,
        }
    }

    pub fn cell(&self) -> CellSize {
        self.cell
    }

    /// Replace the block layout; returns true if anything moved
    pub fn set_layout(&mut self, blocks: &[Block]) -> bool {
        let mut spans = Vec::new();
        let mut top: u32 = 0;
        for block in blocks {
            if let Some(id) = block.id {
                spans.push(Span {
                    id,
                    top: top.min(u16::MAX as u32) as u16,
                    rows: block.rows,
                });
            }
            top += block.rows as u32;
        }

        if spans == self.spans && top == self.content_rows {
            return false;
        }
        self.spans = spans;
        self.content_rows = top;
        self.set_scroll(self.scroll_y);
        true
    }

    pub fn set_viewport(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.set_scroll(self.scroll_y);
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// First visible content row
    pub fn scroll_row(&self) -> u16 {
        (self.scroll_y / self.cell.height_px)
            .round()
            .clamp(0.0, u16::MAX as f64) as u16
    }

    pub fn max_scroll(&self) -> f64 {
        let total = self.content_rows as f64 * self.cell.height_px;
        (total - self.rows as f64 * self.cell.height_px).max(0.0)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.overflow == "hidden"
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// User scroll by whole rows; blocked while the body is locked
    pub fn wheel(&mut self, delta_rows: i32) -> bool {
        if self.is_scroll_locked() {
            return false;
        }
        self.animation = None;
        let before = self.scroll_y;
        self.set_scroll(self.scroll_y + delta_rows as f64 * self.cell.height_px);
        self.scroll_y != before
    }

    /// Advance the smooth scroll animation to `clock`
    pub fn advance(&mut self, clock: Duration) {
        self.clock = clock;
        let Some(anim) = self.animation else {
            return;
        };
        let elapsed = clock.saturating_sub(anim.started);
        let t = (elapsed.as_secs_f64() / SMOOTH_SCROLL.as_secs_f64()).min(1.0);
        self.set_scroll(anim.from + (anim.to - anim.from) * ease_in_out_cubic(t));
        if t >= 1.0 {
            self.animation = None;
        }
    }

    /// Whether the scroll position changed since the last call
    pub fn take_scrolled(&mut self) -> bool {
        std::mem::take(&mut self.scrolled)
    }

    fn set_scroll(&mut self, y: f64) {
        let y = y.clamp(0.0, self.max_scroll());
        if (y - self.scroll_y).abs() > f64::EPSILON {
            self.scroll_y = y;
            self.scrolled = true;
        }
    }
}

impl Document for Page {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.cols as f64 * self.cell.width_px,
            self.rows as f64 * self.cell.height_px,
        )
    }

    fn scroll_height(&self) -> f64 {
        (self.content_rows as f64 * self.cell.height_px).max(self.viewport().height)
    }

    fn element_bounds(&self, id: &str) -> Option<Bounds> {
        self.spans.iter().find(|s| s.id == id).map(|s| {
            Bounds::new(
                s.top as f64 * self.cell.height_px,
                s.rows as f64 * self.cell.height_px,
            )
        })
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let target = top.clamp(0.0, self.max_scroll());
        match behavior {
            ScrollBehavior::Instant => {
                self.animation = None;
                self.set_scroll(target);
            }
            ScrollBehavior::Smooth => {
                if (target - self.scroll_y).abs() < 0.5 {
                    self.animation = None;
                    return;
                }
                self.animation = Some(SmoothScroll {
                    from: self.scroll_y,
                    to: target,
                    started: self.clock,
                });
            }
        }
    }

    fn body_overflow(&self) -> &str {
        &self.overflow
    }

    fn set_body_overflow(&mut self, value: &str) {
        self.overflow = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let mut page = Page::new(CellSize::new(8.0, 16.0), 100, 40);
        page.set_layout(&[
            Block {
                id: Some("top"),
                rows: 30,
            },
            Block {
                id: Some("projects"),
                rows: 50,
            },
            Block { id: None, rows: 20 },
        ]);
        page
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn viewport_and_bounds_are_in_pixels() {
        let page = page();
        assert_eq!(page.viewport(), Viewport::new(800.0, 640.0));
        assert_eq!(page.scroll_height(), 1600.0);
        assert_eq!(page.element_bounds("projects"), Some(Bounds::new(480.0, 800.0)));
        assert_eq!(page.element_bounds("contact"), None);
        assert_eq!(page.max_scroll(), 960.0);
    }

    #[test]
    fn wheel_moves_by_rows_and_clamps() {
        let mut page = page();
        assert!(page.wheel(3));
        assert_eq!(page.scroll_y(), 48.0);
        assert_eq!(page.scroll_row(), 3);
        assert!(page.take_scrolled());
        assert!(!page.take_scrolled());

        page.wheel(1000);
        assert_eq!(page.scroll_y(), 960.0);
        assert!(!page.wheel(1));
        page.wheel(-1000);
        assert_eq!(page.scroll_y(), 0.0);
    }

    #[test]
    fn locked_body_ignores_wheel() {
        let mut page = page();
        page.set_body_overflow("hidden");
        assert!(!page.wheel(5));
        assert_eq!(page.scroll_y(), 0.0);

        // Programmatic scrolling still works
        page.scroll_to(100.0, ScrollBehavior::Instant);
        assert_eq!(page.scroll_y(), 100.0);
    }

    #[test]
    fn smooth_scroll_eases_to_target() {
        let mut page = page();
        page.advance(ms(1000));
        page.scroll_to(400.0, ScrollBehavior::Smooth);
        assert!(page.is_animating());
        assert_eq!(page.scroll_y(), 0.0);

        page.advance(ms(1200));
        let midway = page.scroll_y();
        assert!(midway > 0.0 && midway < 400.0, "{}", midway);
        assert!(page.take_scrolled());

        page.advance(ms(1400));
        assert_eq!(page.scroll_y(), 400.0);
        assert!(!page.is_animating());
    }

    #[test]
    fn smooth_scroll_target_is_clamped() {
        let mut page = page();
        page.scroll_to(-80.0, ScrollBehavior::Smooth);
        assert!(!page.is_animating());

        page.scroll_to(5000.0, ScrollBehavior::Smooth);
        page.advance(SMOOTH_SCROLL);
        assert_eq!(page.scroll_y(), 960.0);
    }

    #[test]
    fn wheel_cancels_animation() {
        let mut page = page();
        page.scroll_to(800.0, ScrollBehavior::Smooth);
        page.advance(ms(100));
        page.wheel(-1);
        assert!(!page.is_animating());
    }

    #[test]
    fn shrinking_content_clamps_scroll() {
        let mut page = page();
        page.scroll_to(960.0, ScrollBehavior::Instant);
        page.take_scrolled();

        assert!(page.set_layout(&[Block {
            id: Some("top"),
            rows: 50
        }]));
        assert_eq!(page.scroll_y(), 160.0);
        assert!(page.take_scrolled());
        assert!(!page.set_layout(&[Block {
            id: Some("top"),
            rows: 50
        }]));
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }
}
