//! Scroll-reactive navigation
//!
//! Each controller owns its own state and talks to the page only through the
//! host services in [`crate::host`]. [`NavController`] mounts them together,
//! routes host events to whichever controller subscribed, and runs their
//! animation frames.

mod activation;
mod items;
mod menu;
mod responsive;
mod scroll_tracker;
mod section_observer;

#[cfg(test)]
pub(crate) mod testing;

pub use activation::{activate, scroll_to_section, Activation, CTA_OFFSET, SCROLL_PADDING};
pub use items::{find, section_ids, NavigationItem, NAV_ITEMS};
pub use menu::MenuController;
pub use responsive::{Breakpoints, ResponsiveSwitch, ViewportMode};
pub use scroll_tracker::{ScrollSample, ScrollState, ScrollTracker, HIDE_THRESHOLD};
pub use section_observer::SectionObserver;

use crate::host::{
    Document, FrameQueue, HitBox, HostEvent, Listeners, ObserverOptions, RootMargin,
};

/// Section observer root margin: top 20% and bottom 60% excluded
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

pub const SECTION_THRESHOLDS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Owner tag for frame requests and listener subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscriber {
    ScrollTracker,
    SectionObserver,
    Viewport,
    Menu,
}

/// Host services handed to the controllers for one call
pub struct HostContext<'a> {
    pub frames: &'a mut FrameQueue<Subscriber>,
    pub listeners: &'a mut Listeners<Subscriber>,
    pub document: &'a mut dyn Document,
}

/// Tunables for the navigation controllers
#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    pub hide_threshold: f64,
    pub scroll_padding: f64,
    pub cta_offset: f64,
    pub breakpoints: Breakpoints,
    pub observer: ObserverOptions,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hide_threshold: HIDE_THRESHOLD,
            scroll_padding: SCROLL_PADDING,
            cta_offset: CTA_OFFSET,
            breakpoints: Breakpoints::default(),
            observer: ObserverOptions::new(
                RootMargin::parse(SECTION_ROOT_MARGIN).unwrap_or_default(),
                &SECTION_THRESHOLDS,
            ),
        }
    }
}

#[derive(Debug)]
pub struct NavController {
    items: &'static [NavigationItem],
    config: NavConfig,
    scroll: ScrollTracker,
    sections: SectionObserver,
    viewport: ResponsiveSwitch,
    menu: MenuController,
    bar_height: f64,
}

impl NavController {
    /// Mount every controller against the page in `cx`
    pub fn mount(items: &'static [NavigationItem], config: NavConfig, cx: &mut HostContext) -> Self {
        let ids = section_ids(items);

        let mut viewport = ResponsiveSwitch::new(config.breakpoints);
        viewport.mount(cx.document.viewport().width, cx.listeners);

        let mut scroll = ScrollTracker::new(config.hide_threshold);
        scroll.mount(cx.listeners);
        // Initial progress for pages that load scrolled
        scroll.on_scroll(ScrollSample::from_document(&*cx.document), cx.frames);

        let sections = SectionObserver::mount(
            &ids,
            ids.first().copied(),
            config.observer.clone(),
            &*cx.document,
        );

        tracing::info!(
            mode = viewport.mode().as_str(),
            sections = sections.observed().count(),
            "navigation mounted"
        );

        let mut this = Self {
            items,
            config,
            scroll,
            sections,
            viewport,
            menu: MenuController::new(),
            bar_height: 0.0,
        };
        this.poll_intersections(cx);
        this
    }

    /// Route a host event to its subscribers; returns true if render state changed
    pub fn dispatch(&mut self, event: HostEvent, cx: &mut HostContext) -> bool {
        let mut changed = false;
        for subscriber in cx.listeners.subscribers(event.kind()) {
            match (subscriber, event) {
                (Subscriber::ScrollTracker, HostEvent::Scroll) => {
                    self.scroll
                        .on_scroll(ScrollSample::from_document(&*cx.document), cx.frames);
                }
                (Subscriber::Viewport, HostEvent::Resize { width, .. }) => {
                    if self.viewport.on_resize(width) {
                        self.menu.sync_scroll_lock(self.viewport.mode(), cx.document);
                        changed = true;
                    }
                }
                (Subscriber::Menu, HostEvent::PointerDown(point))
                | (Subscriber::Menu, HostEvent::TouchStart(point)) => {
                    if self.menu.on_outside_pointer(point, cx.listeners) {
                        self.menu.sync_scroll_lock(self.viewport.mode(), cx.document);
                        changed = true;
                    }
                }
                _ => {}
            }
        }
        changed
    }

    /// Run the frame callbacks that are due; returns true if render state changed
    pub fn on_animation_frame(&mut self, cx: &mut HostContext) -> bool {
        let mut changed = false;
        for (handle, owner) in cx.frames.begin_frame() {
            changed |= match owner {
                Subscriber::ScrollTracker => self.scroll.on_frame(handle),
                Subscriber::SectionObserver => self.sections.on_frame(handle),
                Subscriber::Viewport | Subscriber::Menu => false,
            };
        }
        changed
    }

    /// Deliver fresh intersection records to the section observer
    pub fn poll_intersections(&mut self, cx: &mut HostContext) {
        self.sections.poll(&*cx.document, cx.frames);
    }

    /// Navigation item selected by the user
    pub fn activate(&mut self, anchor: &str, cx: &mut HostContext) -> Activation {
        self.close_menu(cx);
        let outcome = activate(anchor, self.bar_height, self.config.scroll_padding, cx.document);
        tracing::debug!(anchor, ?outcome, "navigation activated");
        outcome
    }

    /// Hero call-to-action scroll; leaves the menu alone
    pub fn scroll_to_cta(&mut self, id: &str, cx: &mut HostContext) -> bool {
        scroll_to_section(id, self.config.cta_offset, cx.document).is_some()
    }

    pub fn toggle_menu(&mut self, cx: &mut HostContext) {
        self.menu.toggle(cx.listeners);
        self.menu.sync_scroll_lock(self.viewport.mode(), cx.document);
    }

    pub fn close_menu(&mut self, cx: &mut HostContext) {
        self.menu.close(cx.listeners);
        self.menu.sync_scroll_lock(self.viewport.mode(), cx.document);
    }

    /// Rendered height of the navigation bar, used for anchor offsets
    pub fn set_bar_height(&mut self, height: f64) {
        self.bar_height = height.max(0.0);
    }

    pub fn set_menu_regions(&mut self, toggle: Option<HitBox>, panel: Option<HitBox>) {
        self.menu.set_regions(toggle, panel);
    }

    pub fn items(&self) -> &'static [NavigationItem] {
        self.items
    }

    pub fn layout(&self) -> ViewportMode {
        self.viewport.mode()
    }

    /// Active section id, without the `#`
    pub fn active_section(&self) -> Option<&str> {
        self.sections.active()
    }

    pub fn active_item(&self) -> Option<NavigationItem> {
        self.active_section().and_then(|id| find(self.items, id))
    }

    pub fn is_active(&self, item: &NavigationItem) -> bool {
        item.section_id().is_some() && item.section_id() == self.active_section()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn bar_visible(&self) -> bool {
        self.scroll.state().bar_visible
    }

    pub fn progress_percent(&self) -> f64 {
        self.scroll.state().progress_percent
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu.is_scroll_locked()
    }

    /// Unsubscribe everything, cancel pending frames, release the scroll lock
    pub fn teardown(&mut self, cx: &mut HostContext) {
        self.scroll.teardown(cx.listeners, cx.frames);
        self.sections.teardown(cx.frames);
        self.viewport.teardown(cx.listeners);
        self.menu.teardown(cx.listeners, cx.document);
        tracing::debug!("navigation torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{EventKind, Point};
    use testing::FakeDocument;

    struct Host {
        frames: FrameQueue<Subscriber>,
        listeners: Listeners<Subscriber>,
        doc: FakeDocument,
    }

    impl Host {
        fn new(width: f64) -> Self {
            Self {
                frames: FrameQueue::new(),
                listeners: Listeners::new(),
                doc: FakeDocument::new(width, 1000.0)
                    .with_section("top", 0.0, 1000.0)
                    .with_section("experience", 1000.0, 1000.0)
                    .with_section("certifications", 2000.0, 1000.0)
                    .with_section("projects", 3000.0, 1000.0)
                    .with_section("contact", 4000.0, 1000.0),
            }
        }

        fn cx(&mut self) -> HostContext<'_> {
            HostContext {
                frames: &mut self.frames,
                listeners: &mut self.listeners,
                document: &mut self.doc,
            }
        }

        /// One host tick: event, frames, intersection poll, frames again
        fn scroll_to(&mut self, nav: &mut NavController, y: f64) {
            self.doc.set_scroll(y);
            nav.dispatch(HostEvent::Scroll, &mut self.cx());
            nav.on_animation_frame(&mut self.cx());
            nav.poll_intersections(&mut self.cx());
            nav.on_animation_frame(&mut self.cx());
        }
    }

    fn mount(host: &mut Host) -> NavController {
        let mut nav = NavController::mount(NAV_ITEMS, NavConfig::default(), &mut host.cx());
        nav.on_animation_frame(&mut host.cx());
        nav
    }

    #[test]
    fn mount_seeds_first_section_and_subscribes() {
        let mut host = Host::new(1200.0);
        let nav = mount(&mut host);
        assert_eq!(nav.layout(), ViewportMode::Desktop);
        assert_eq!(nav.active_section(), Some("top"));
        assert!(nav.bar_visible());
        assert_eq!(host.listeners.count(EventKind::Scroll), 1);
        assert_eq!(host.listeners.count(EventKind::Resize), 1);
        assert_eq!(host.listeners.count(EventKind::PointerDown), 0);
    }

    #[test]
    fn scrolling_updates_progress_visibility_and_section() {
        let mut host = Host::new(1200.0);
        let mut nav = mount(&mut host);

        host.scroll_to(&mut nav, 2000.0);
        assert_eq!(nav.progress_percent(), 50.0);
        assert!(!nav.bar_visible());
        assert_eq!(nav.active_section(), Some("certifications"));
        assert_eq!(nav.active_item().map(|i| i.label), Some("Certificates"));

        host.scroll_to(&mut nav, 1000.0);
        assert!(nav.bar_visible());
        assert_eq!(nav.active_section(), Some("experience"));
    }

    #[test]
    fn resize_changes_layout_only() {
        let mut host = Host::new(1200.0);
        let mut nav = mount(&mut host);
        host.scroll_to(&mut nav, 3000.0);
        nav.toggle_menu(&mut host.cx());
        let active = nav.active_section().map(str::to_string);

        host.doc.set_width(900.0);
        let changed = nav.dispatch(
            HostEvent::Resize {
                width: 900.0,
                height: 1000.0,
            },
            &mut host.cx(),
        );
        assert!(changed);
        assert_eq!(nav.layout(), ViewportMode::Tablet);
        assert_eq!(nav.active_section().map(str::to_string), active);
        assert!(nav.menu_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn mobile_menu_locks_and_outside_press_unlocks() {
        let mut host = Host::new(500.0);
        host.doc.set_body_overflow("scroll");
        let mut nav = mount(&mut host);
        nav.set_menu_regions(
            Some(HitBox::new(50.0, 0.0, 6.0, 3.0)),
            Some(HitBox::new(20.0, 3.0, 40.0, 10.0)),
        );

        nav.toggle_menu(&mut host.cx());
        assert!(nav.scroll_locked());
        assert_eq!(host.doc.body_overflow(), "hidden");

        nav.dispatch(HostEvent::PointerDown(Point::new(2.0, 40.0)), &mut host.cx());
        assert!(!nav.menu_open());
        assert_eq!(host.doc.body_overflow(), "scroll");
        assert_eq!(host.listeners.count(EventKind::PointerDown), 0);
    }

    #[test]
    fn touch_outside_menu_dismisses_like_a_press() {
        let mut host = Host::new(500.0);
        let mut nav = mount(&mut host);
        nav.set_menu_regions(
            Some(HitBox::new(50.0, 0.0, 6.0, 3.0)),
            Some(HitBox::new(20.0, 3.0, 40.0, 10.0)),
        );
        nav.toggle_menu(&mut host.cx());
        assert_eq!(host.listeners.count(EventKind::TouchStart), 1);

        // Inside the panel keeps it open
        assert!(!nav.dispatch(HostEvent::TouchStart(Point::new(30.0, 5.0)), &mut host.cx()));
        assert!(nav.menu_open());

        assert!(nav.dispatch(HostEvent::TouchStart(Point::new(0.0, 464.0)), &mut host.cx()));
        assert!(!nav.menu_open());
        assert!(!nav.scroll_locked());
        assert_eq!(host.doc.body_overflow(), "");
        assert_eq!(host.listeners.count(EventKind::TouchStart), 0);
        assert_eq!(host.listeners.count(EventKind::PointerDown), 0);
    }

    #[test]
    fn non_fragment_activation_still_closes_menu() {
        let mut host = Host::new(500.0);
        let mut nav = mount(&mut host);
        nav.toggle_menu(&mut host.cx());
        assert!(nav.scroll_locked());

        let outcome = nav.activate("https://example.com/resume.pdf", &mut host.cx());
        assert_eq!(outcome, Activation::NotInPage);
        assert!(!nav.menu_open());
        assert!(!nav.scroll_locked());
        assert!(host.doc.scroll_requests.is_empty());
    }

    #[test]
    fn activation_closes_menu_and_scrolls_below_bar() {
        let mut host = Host::new(500.0);
        let mut nav = mount(&mut host);
        nav.set_bar_height(60.0);
        nav.toggle_menu(&mut host.cx());

        let outcome = nav.activate("#projects", &mut host.cx());
        assert_eq!(outcome, Activation::Scrolled { top: 2920.0 });
        assert!(!nav.menu_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn cta_scroll_keeps_menu_state() {
        let mut host = Host::new(500.0);
        let mut nav = mount(&mut host);
        nav.toggle_menu(&mut host.cx());
        assert!(nav.scroll_to_cta("contact", &mut host.cx()));
        assert_eq!(host.doc.scroll_requests.last().map(|r| r.0), Some(3920.0));
        assert!(nav.menu_open());
    }

    #[test]
    fn teardown_leaves_nothing_behind() {
        let mut host = Host::new(500.0);
        host.doc.set_body_overflow("auto");
        let mut nav = mount(&mut host);
        nav.toggle_menu(&mut host.cx());
        host.doc.set_scroll(700.0);
        nav.dispatch(HostEvent::Scroll, &mut host.cx());

        nav.teardown(&mut host.cx());
        assert!(host.frames.is_idle());
        assert!(host.listeners.is_empty());
        assert_eq!(host.doc.body_overflow(), "auto");
    }
}
