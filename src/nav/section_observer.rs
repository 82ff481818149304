//! Scroll-spy: which section is active
//!
//! Intersection batches are merged into the latest entry per section, then a
//! recompute is deferred to the next animation frame. The active section is
//! the intersecting one with the highest ratio; on ties the earliest in
//! registration order wins. When nothing intersects the previous answer
//! stands.

use super::Subscriber;
use crate::host::{
    Document, FrameHandle, FrameScheduler, IntersectionEntry, IntersectionObserver,
    ObserverOptions,
};

/// Pick the active target from entries in registration order
///
/// Returns None when nothing in `entries` is intersecting.
pub fn pick_active(entries: &[IntersectionEntry]) -> Option<&str> {
    let mut best: Option<&IntersectionEntry> = None;
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        match best {
            Some(current) if entry.ratio <= current.ratio => {}
            _ => best = Some(entry),
        }
    }
    best.map(|e| e.target.as_str())
}

#[derive(Debug)]
pub struct SectionObserver {
    /// Observed section ids with their latest entry, in registration order
    sections: Vec<(String, Option<IntersectionEntry>)>,
    active: Option<String>,
    observer: Option<IntersectionObserver>,
    pending: Option<FrameHandle>,
    dirty: bool,
}

impl SectionObserver {
    /// Observe every id that exists in `document` right now
    ///
    /// Missing elements are skipped. A document without intersection support
    /// yields a disabled observer that never changes the active section.
    pub fn mount(
        ids: &[&str],
        initial: Option<&str>,
        options: ObserverOptions,
        document: &dyn Document,
    ) -> Self {
        let mut this = Self {
            sections: Vec::new(),
            active: initial.map(str::to_string),
            observer: None,
            pending: None,
            dirty: false,
        };

        if !document.supports_intersection_observer() {
            tracing::warn!("intersection observation unavailable, active-section highlighting disabled");
            return this;
        }

        let mut observer = IntersectionObserver::new(options);
        for id in ids {
            if document.element_bounds(id).is_none() {
                tracing::debug!(section = *id, "section not in document, not observed");
                continue;
            }
            observer.observe(id);
            this.sections.push((id.to_string(), None));
        }

        if this.sections.is_empty() {
            tracing::debug!("no sections to observe");
            return this;
        }

        this.observer = Some(observer);
        this
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.observer.is_some()
    }

    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(id, _)| id.as_str())
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Compute fresh intersection records and feed them in
    pub fn poll(
        &mut self,
        document: &dyn Document,
        frames: &mut impl FrameScheduler<Subscriber>,
    ) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        let records = observer.take_records(document);
        if !records.is_empty() {
            self.on_entries(records, frames);
        }
    }

    /// Merge a batch of entries and schedule a recompute
    pub fn on_entries(
        &mut self,
        batch: Vec<IntersectionEntry>,
        frames: &mut impl FrameScheduler<Subscriber>,
    ) {
        for entry in batch {
            if let Some(slot) = self.sections.iter_mut().find(|(id, _)| *id == entry.target) {
                slot.1 = Some(entry);
                self.dirty = true;
            }
        }

        if self.dirty && self.pending.is_none() {
            self.pending = Some(frames.request_frame(Subscriber::SectionObserver));
        }
    }

    /// Frame callback; returns true if the active section changed
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        if !std::mem::take(&mut self.dirty) {
            return false;
        }

        let entries: Vec<IntersectionEntry> = self
            .sections
            .iter()
            .filter_map(|(_, entry)| entry.clone())
            .collect();

        let Some(next) = pick_active(&entries) else {
            return false;
        };
        if self.active.as_deref() == Some(next) {
            return false;
        }

        tracing::debug!(section = next, "active section");
        self.active = Some(next.to_string());
        true
    }

    /// Disconnect the observer and cancel a pending recompute
    pub fn teardown(&mut self, frames: &mut impl FrameScheduler<Subscriber>) {
        if let Some(handle) = self.pending.take() {
            frames.cancel_frame(handle);
        }
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.dirty = false;
    }
}
