//! Mobile menu: open/close state, outside-press dismissal and scroll lock

use super::responsive::ViewportMode;
use super::Subscriber;
use crate::host::{Document, EventKind, HitBox, ListenerId, Listeners, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Body overflow lock
///
/// Remembers the exact value it replaced so release puts back whatever the
/// page had, not a hardcoded default.
#[derive(Debug, Default)]
pub struct ScrollLock {
    saved: Option<String>,
}

impl ScrollLock {
    pub fn is_engaged(&self) -> bool {
        self.saved.is_some()
    }

    pub fn engage(&mut self, document: &mut dyn Document) {
        if self.saved.is_some() {
            return;
        }
        self.saved = Some(document.body_overflow().to_string());
        document.set_body_overflow("hidden");
        tracing::trace!("scroll lock engaged");
    }

    pub fn release(&mut self, document: &mut dyn Document) {
        if let Some(prior) = self.saved.take() {
            document.set_body_overflow(&prior);
            tracing::trace!(restored = %prior, "scroll lock released");
        }
    }
}

#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
    toggle_box: Option<HitBox>,
    panel_box: Option<HitBox>,
    /// Outside-press listeners, present only while open
    listeners: Vec<ListenerId>,
    lock: ScrollLock,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    /// Hit regions of the toggle button and the dropdown panel
    ///
    /// Until both are known, outside presses are ignored.
    pub fn set_regions(&mut self, toggle: Option<HitBox>, panel: Option<HitBox>) {
        self.toggle_box = toggle;
        self.panel_box = panel;
    }

    pub fn toggle(&mut self, listeners: &mut Listeners<Subscriber>) {
        match self.state {
            MenuState::Closed => self.open(listeners),
            MenuState::Open => self.close(listeners),
        }
    }

    pub fn open(&mut self, listeners: &mut Listeners<Subscriber>) {
        if self.is_open() {
            return;
        }
        self.state = MenuState::Open;
        self.listeners = vec![
            listeners.subscribe(EventKind::PointerDown, Subscriber::Menu),
            listeners.subscribe(EventKind::TouchStart, Subscriber::Menu),
        ];
        tracing::debug!("menu opened");
    }

    /// Close the menu; closing a closed menu does nothing
    pub fn close(&mut self, listeners: &mut Listeners<Subscriber>) {
        if !self.is_open() {
            return;
        }
        self.state = MenuState::Closed;
        for id in self.listeners.drain(..) {
            listeners.unsubscribe(id);
        }
        tracing::debug!("menu closed");
    }

    /// Pointer or touch press while open; returns true if it closed the menu
    pub fn on_outside_pointer(
        &mut self,
        point: Point,
        listeners: &mut Listeners<Subscriber>,
    ) -> bool {
        if !self.is_open() {
            return false;
        }
        let (Some(toggle), Some(panel)) = (self.toggle_box, self.panel_box) else {
            return false;
        };
        if toggle.contains(point) || panel.contains(point) {
            return false;
        }
        self.close(listeners);
        true
    }

    /// Lock page scroll exactly while the menu is open in mobile mode
    pub fn sync_scroll_lock(&mut self, mode: ViewportMode, document: &mut dyn Document) {
        if self.is_open() && mode.is_mobile() {
            self.lock.engage(document);
        } else {
            self.lock.release(document);
        }
    }

    pub fn teardown(&mut self, listeners: &mut Listeners<Subscriber>, document: &mut dyn Document) {
        self.close(listeners);
        self.lock.release(document);
    }
}
