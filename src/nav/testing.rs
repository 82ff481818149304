// In-memory document for controller tests

use crate::host::{Bounds, Document, ScrollBehavior, Viewport};

#[derive(Debug, Clone)]
pub struct FakeDocument {
    viewport: Viewport,
    scroll_y: f64,
    sections: Vec<(String, Bounds)>,
    overflow: String,
    supports_observer: bool,
    /// Every scroll_to request, in order
    pub scroll_requests: Vec<(f64, ScrollBehavior)>,
}

impl FakeDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            scroll_y: 0.0,
            sections: Vec::new(),
            overflow: String::new(),
            supports_observer: true,
            scroll_requests: Vec::new(),
        }
    }

    pub fn with_section(mut self, id: &str, top: f64, height: f64) -> Self {
        self.sections.push((id.to_string(), Bounds::new(top, height)));
        self
    }

    pub fn with_overflow(mut self, value: &str) -> Self {
        self.overflow = value.to_string();
        self
    }

    pub fn without_observer(mut self) -> Self {
        self.supports_observer = false;
        self
    }

    pub fn remove_section(&mut self, id: &str) {
        self.sections.retain(|(s, _)| s != id);
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn set_width(&mut self, width: f64) {
        self.viewport.width = width;
    }
}

impl Document for FakeDocument {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_height(&self) -> f64 {
        self.sections
            .iter()
            .map(|(_, b)| b.bottom())
            .fold(self.viewport.height, f64::max)
    }

    fn element_bounds(&self, id: &str) -> Option<Bounds> {
        self.sections
            .iter()
            .find(|(s, _)| s == id)
            .map(|(_, b)| *b)
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push((top, behavior));
        let max = (self.scroll_height() - self.viewport.height).max(0.0);
        self.scroll_y = top.clamp(0.0, max);
    }

    fn body_overflow(&self) -> &str {
        &self.overflow
    }

    fn set_body_overflow(&mut self, value: &str) {
        self.overflow = value.to_string();
    }

    fn supports_intersection_observer(&self) -> bool {
        self.supports_observer
    }
}
