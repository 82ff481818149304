// TUI application state
//
// The App owns the terminal page and every host service the navigation
// controllers need: the frame queue, the listener registry and the page
// document itself. Controllers only ever see those through a HostContext.
//
// One tick runs, in order: smooth-scroll step, scroll event dispatch, frame
// callbacks, intersection poll. Frames requested by the poll run next tick.

use super::components::nav_bar::{self, NavHitMap, BAR_ROWS};
use super::components::sections::{self, Cta, FooterFrame, HeroFrame, PageModel};
use super::components::Toast;
use super::modal::Modal;
use super::page::{CellSize, Page};
use crate::config::Config;
use crate::content::{random_below, CountUp, Portfolio, SessionStorage, Typewriter, ViewCounter};
use crate::host::{Document, FrameQueue, HitBox, HostEvent, Listeners, Point, ScrollBehavior};
use crate::logging::{LogBuffer, LogEntry};
use crate::nav::{Activation, HostContext, NavConfig, NavController, Subscriber, NAV_ITEMS};
use crate::theme::Theme;
use chrono::Datelike;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub portfolio: Portfolio,
    pub log_buffer: LogBuffer,

    /// The page document and host services
    pub page: Page,
    pub frames: FrameQueue<Subscriber>,
    pub listeners: Listeners<Subscriber>,
    pub nav: NavController,

    /// Regions of the last rendered navigation
    pub hits: NavHitMap,
    /// Hero buttons of the last rendered page
    pub ctas: Vec<Cta>,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub should_quit: bool,

    typewriter: Typewriter,
    stats: Vec<CountUp>,
    pub counter: ViewCounter,
    pub session: SessionStorage,
    year: i32,

    started: Instant,
    elapsed: Duration,
}

impl App {
    pub fn new(
        config: Config,
        nav_config: NavConfig,
        portfolio: Portfolio,
        theme: Theme,
        log_buffer: LogBuffer,
        (cols, rows): (u16, u16),
    ) -> Self {
        let cell = CellSize::new(config.cell_width_px, config.cell_height_px);
        let year = chrono::Local::now().year();

        let mut page = Page::new(cell, cols, rows);
        let model = sections::build(
            &portfolio,
            &theme,
            cols,
            &HeroFrame::default(),
            &FooterFrame { year, views: None },
        );
        page.set_layout(&model.blocks);
        page.take_scrolled();

        let mut frames = FrameQueue::new();
        let mut listeners = Listeners::new();
        let mut nav = NavController::mount(
            NAV_ITEMS,
            nav_config,
            &mut HostContext {
                frames: &mut frames,
                listeners: &mut listeners,
                document: &mut page,
            },
        );
        nav.set_bar_height(BAR_ROWS as f64 * cell.height_px);

        let typewriter = Typewriter::new(portfolio.owner.name.clone(), Typewriter::DEFAULT_SPEED);
        let stats = portfolio
            .stats
            .iter()
            .map(|s| CountUp::new(0, s.value, Duration::from_millis(s.duration_ms)))
            .collect();

        Self {
            config,
            theme,
            portfolio,
            log_buffer,
            page,
            frames,
            listeners,
            nav,
            hits: NavHitMap::default(),
            ctas: model.ctas,
            modal: None,
            toast: None,
            should_quit: false,
            typewriter,
            stats,
            counter: ViewCounter::new(),
            session: SessionStorage::new(),
            year,
            started: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Navigation controller plus the host services it runs against
    fn split(&mut self) -> (&mut NavController, HostContext<'_>) {
        (
            &mut self.nav,
            HostContext {
                frames: &mut self.frames,
                listeners: &mut self.listeners,
                document: &mut self.page,
            },
        )
    }

    // ─────────────────────────────────────────────────────────────
    // Frame loop
    // ─────────────────────────────────────────────────────────────

    pub fn on_tick(&mut self) -> bool {
        self.tick_at(self.started.elapsed())
    }

    /// Advance everything to `elapsed` since start; returns true if state changed
    pub fn tick_at(&mut self, elapsed: Duration) -> bool {
        self.elapsed = elapsed;
        self.page.advance(elapsed);

        let mut changed = false;
        if self.page.take_scrolled() {
            self.dispatch(HostEvent::Scroll);
            changed = true;
        }

        let (nav, mut cx) = self.split();
        changed |= nav.on_animation_frame(&mut cx);
        nav.poll_intersections(&mut cx);

        changed |= self.counter.poll(elapsed, &mut self.session, random_below);
        self.clear_expired_toast();
        changed
    }

    pub fn dispatch(&mut self, event: HostEvent) -> bool {
        let (nav, mut cx) = self.split();
        nav.dispatch(event, &mut cx)
    }

    // ─────────────────────────────────────────────────────────────
    // Rendering support
    // ─────────────────────────────────────────────────────────────

    pub fn hero_frame(&self) -> HeroFrame {
        HeroFrame {
            typed_chars: self.typewriter.visible(self.elapsed).chars().count(),
            typing: !self.typewriter.is_done(self.elapsed),
            stat_values: self.stats.iter().map(|s| s.value_at(self.elapsed)).collect(),
        }
    }

    pub fn footer_frame(&self) -> FooterFrame {
        FooterFrame {
            year: self.year,
            views: self.counter.count(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.portfolio.owner.short_name
    }

    /// Lay the page out for `width` columns and record its geometry
    pub fn build_page(&mut self, width: u16) -> PageModel {
        let model = sections::build(
            &self.portfolio,
            &self.theme,
            width,
            &self.hero_frame(),
            &self.footer_frame(),
        );
        if self.page.set_layout(&model.blocks) {
            tracing::debug!(rows = model.total_rows(), "page layout changed");
        }
        self.ctas = model.ctas.clone();
        model
    }

    /// Recompute navigation hit regions for `area` and publish them
    pub fn layout_nav(&mut self, area: Rect) {
        self.hits = if self.nav.bar_visible() || self.nav.menu_open() {
            nav_bar::layout(
                area,
                self.nav.layout(),
                self.nav.items(),
                self.brand(),
                self.nav.menu_open(),
            )
        } else {
            NavHitMap::default()
        };

        let cell = self.page.cell();
        let to_box = |r: Rect| {
            HitBox::new(
                r.x as f64 * cell.width_px,
                r.y as f64 * cell.height_px,
                r.width as f64 * cell.width_px,
                r.height as f64 * cell.height_px,
            )
        };
        self.nav
            .set_menu_regions(self.hits.toggle.map(to_box), self.hits.panel.map(to_box));
    }

    pub fn recent_logs(&self, n: usize) -> Vec<LogEntry> {
        self.log_buffer.tail(n)
    }

    // ─────────────────────────────────────────────────────────────
    // User actions
    // ─────────────────────────────────────────────────────────────

    /// Scroll by whole rows, as a wheel would
    pub fn scroll_rows(&mut self, delta: i32) -> bool {
        self.page.wheel(delta)
    }

    /// Scroll one screen, minus the bar
    pub fn scroll_pages(&mut self, pages: i32) -> bool {
        let step = self.page.rows().saturating_sub(BAR_ROWS).max(1) as i32;
        self.page.wheel(pages * step)
    }

    pub fn jump_to_top(&mut self) {
        if !self.page.is_scroll_locked() {
            self.page.scroll_to(0.0, ScrollBehavior::Smooth);
        }
    }

    pub fn jump_to_end(&mut self) {
        if !self.page.is_scroll_locked() {
            let end = self.page.max_scroll();
            self.page.scroll_to(end, ScrollBehavior::Smooth);
        }
    }

    /// Activate the `index`th navigation item
    pub fn activate_item(&mut self, index: usize) -> Option<Activation> {
        let item = self.nav.items().get(index).copied()?;
        Some(self.activate_anchor(item.anchor))
    }

    pub fn activate_anchor(&mut self, anchor: &str) -> Activation {
        let (nav, mut cx) = self.split();
        nav.activate(anchor, &mut cx)
    }

    pub fn scroll_to_cta(&mut self, target: &str) -> bool {
        let (nav, mut cx) = self.split();
        nav.scroll_to_cta(target, &mut cx)
    }

    /// Toggle the dropdown; only the mobile layout has one
    pub fn toggle_menu(&mut self) -> bool {
        if !self.nav.layout().is_mobile() {
            return false;
        }
        let (nav, mut cx) = self.split();
        nav.toggle_menu(&mut cx);
        true
    }

    pub fn close_menu(&mut self) {
        let (nav, mut cx) = self.split();
        nav.close_menu(&mut cx);
    }

    /// Left press at a terminal cell
    pub fn click(&mut self, col: u16, row: u16) {
        let point = self.cell_point(col, row);
        self.press(HostEvent::PointerDown(point), col, row);
    }

    /// Touch at a terminal cell; dismisses the menu the same way a press does
    pub fn tap(&mut self, col: u16, row: u16) {
        let point = self.cell_point(col, row);
        self.press(HostEvent::TouchStart(point), col, row);
    }

    fn cell_point(&self, col: u16, row: u16) -> Point {
        let cell = self.page.cell();
        Point::new(col as f64 * cell.width_px, row as f64 * cell.height_px)
    }

    fn press(&mut self, event: HostEvent, col: u16, row: u16) {
        // Outside-press listeners see the press before the click lands
        self.dispatch(event);

        if self.hits.on_toggle(col, row) {
            self.toggle_menu();
            return;
        }
        if let Some(anchor) = self.hits.item_at(col, row) {
            self.activate_anchor(anchor);
            return;
        }
        let on_nav = [self.hits.bar, self.hits.panel]
            .into_iter()
            .flatten()
            .any(|r| col >= r.x && col < r.right() && row >= r.y && row < r.bottom());
        if on_nav {
            return;
        }

        let content_row = row.saturating_add(self.page.scroll_row());
        if let Some(cta) = self.ctas.iter().find(|c| c.contains(col, content_row)).copied() {
            self.scroll_to_cta(cta.target);
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.page.set_viewport(cols, rows);
        self.build_page(cols);
        let viewport = self.page.viewport();
        self.dispatch(HostEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        });
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn teardown(&mut self) {
        let (nav, mut cx) = self.split();
        nav.teardown(&mut cx);
    }
}
