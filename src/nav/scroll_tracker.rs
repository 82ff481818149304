//! Scroll tracker: progress percentage and auto-hiding bar visibility
//!
//! Scroll events only record the latest sample. The first event after a commit
//! requests an animation frame; events arriving while that frame is pending
//! just overwrite the sample, so there is at most one commit per frame and it
//! always uses the most recent position.
//!
//! Visibility uses hysteresis against the last *committed* offset: nothing
//! changes until the page has moved more than `threshold` units since then.
//! Oscillating just under the threshold therefore never flips the bar.

use super::Subscriber;
use crate::host::{Document, EventKind, FrameHandle, FrameScheduler, ListenerId, Listeners};

/// Default hide/show distance
pub const HIDE_THRESHOLD: f64 = 100.0;

/// Environment values sampled on a scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    /// Total document height
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            scroll_height,
            viewport_height,
        }
    }

    pub fn from_document(document: &dyn Document) -> Self {
        Self::new(
            document.scroll_y(),
            document.scroll_height(),
            document.viewport().height,
        )
    }

    /// Scrollable distance; 1 when the page does not scroll at all
    pub fn scrollable_height(&self) -> f64 {
        let height = self.scroll_height - self.viewport_height;
        if height <= 0.0 {
            1.0
        } else {
            height
        }
    }

    /// Scroll progress in percent, clamped to 0..=100
    pub fn progress_percent(&self) -> f64 {
        (self.scroll_y / self.scrollable_height() * 100.0).clamp(0.0, 100.0)
    }
}

/// Committed scroll-derived state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Offset at the last visibility commit
    pub last_known_scroll_y: f64,
    pub progress_percent: f64,
    pub bar_visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_known_scroll_y: 0.0,
            progress_percent: 0.0,
            bar_visible: true,
        }
    }
}

#[derive(Debug)]
pub struct ScrollTracker {
    state: ScrollState,
    threshold: f64,
    latest: Option<ScrollSample>,
    pending: Option<FrameHandle>,
    listener: Option<ListenerId>,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: ScrollState::default(),
            threshold,
            latest: None,
            pending: None,
            listener: None,
        }
    }

    /// Subscribe to scroll events
    pub fn mount(&mut self, listeners: &mut Listeners<Subscriber>) {
        if self.listener.is_none() {
            self.listener = Some(listeners.subscribe(EventKind::Scroll, Subscriber::ScrollTracker));
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a sample and make sure a frame is scheduled
    pub fn on_scroll(
        &mut self,
        sample: ScrollSample,
        frames: &mut impl FrameScheduler<Subscriber>,
    ) {
        self.latest = Some(sample);
        if self.pending.is_none() {
            self.pending = Some(frames.request_frame(Subscriber::ScrollTracker));
        }
    }

    /// Frame callback; returns true if the committed state changed
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            // Stale or foreign handle
            return false;
        }
        self.pending = None;

        match self.latest.take() {
            Some(sample) => self.commit(sample),
            None => false,
        }
    }

    fn commit(&mut self, sample: ScrollSample) -> bool {
        let before = self.state;
        let y = sample.scroll_y;

        self.state.progress_percent = sample.progress_percent();

        if (y - self.state.last_known_scroll_y).abs() > self.threshold {
            // Show when scrolling up or when near the top
            self.state.bar_visible = y < self.state.last_known_scroll_y || y < self.threshold;
            self.state.last_known_scroll_y = y;
            if self.state.bar_visible != before.bar_visible {
                tracing::trace!(scroll_y = y, visible = self.state.bar_visible, "nav bar visibility");
            }
        }

        self.state != before
    }

    /// Unsubscribe and drop any pending frame
    pub fn teardown(
        &mut self,
        listeners: &mut Listeners<Subscriber>,
        frames: &mut impl FrameScheduler<Subscriber>,
    ) {
        if let Some(id) = self.listener.take() {
            listeners.unsubscribe(id);
        }
        if let Some(handle) = self.pending.take() {
            frames.cancel_frame(handle);
        }
        self.latest = None;
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(HIDE_THRESHOLD)
    }
}
