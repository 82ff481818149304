// Navigation bar component
//
// Three layouts from one item list:
// - Desktop: brand on the left, icon + label items on the right
// - Tablet: labels only, centered, no brand
// - Mobile: brand and a menu toggle; the item list drops down below the bar
//
// `layout` is pure so mouse handling and rendering agree on hit regions.

use crate::nav::{NavController, NavigationItem, ViewportMode};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Bar height in rows, borders included
pub const BAR_ROWS: u16 = 3;

const TOGGLE_WIDTH: u16 = 3;

/// Clickable regions of the rendered navigation, in terminal cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavHitMap {
    pub bar: Option<Rect>,
    pub items: Vec<(Rect, &'static str)>,
    pub toggle: Option<Rect>,
    pub panel: Option<Rect>,
}

impl NavHitMap {
    /// Anchor of the item under (col, row)
    pub fn item_at(&self, col: u16, row: u16) -> Option<&'static str> {
        self.items
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, anchor)| *anchor)
    }

    pub fn on_toggle(&self, col: u16, row: u16) -> bool {
        self.toggle.is_some_and(|r| contains(&r, col, row))
    }
}

fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

fn item_text(item: &NavigationItem, mode: ViewportMode) -> String {
    match mode {
        ViewportMode::Tablet => format!(" {} ", item.label),
        _ => format!(" {} {} ", item.icon.glyph(), item.label),
    }
}

fn brand_width(brand: &str) -> u16 {
    brand.width() as u16 + 2
}

/// `rect` clipped to `bounds`, or None when nothing of it is left
fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}

/// Compute hit regions for the bar placed at the top of `area`
///
/// A bar without an inner row gets no items, toggle or dropdown.
pub fn layout(
    area: Rect,
    mode: ViewportMode,
    items: &'static [NavigationItem],
    brand: &str,
    menu_open: bool,
) -> NavHitMap {
    let bar = Rect::new(area.x, area.y, area.width, BAR_ROWS.min(area.height));
    let row = bar.y + 1;
    let mut map = NavHitMap {
        bar: Some(bar),
        ..Default::default()
    };
    if bar.height < 2 {
        return map;
    }

    match mode {
        ViewportMode::Desktop | ViewportMode::Tablet => {
            let gap: u16 = if mode == ViewportMode::Desktop { 2 } else { 1 };
            let widths: Vec<u16> = items
                .iter()
                .map(|item| item_text(item, mode).width() as u16)
                .collect();
            let total = widths.iter().sum::<u16>() + gap * widths.len().saturating_sub(1) as u16;

            let mut x = if mode == ViewportMode::Desktop {
                let min = bar.x + 2 + brand_width(brand);
                bar.right().saturating_sub(total + 2).max(min)
            } else {
                bar.x + bar.width.saturating_sub(total) / 2
            };
            for (item, width) in items.iter().zip(widths) {
                if x >= bar.right() {
                    break;
                }
                let width = width.min(bar.right() - x);
                map.items.push((Rect::new(x, row, width, 1), item.anchor));
                x = x.saturating_add(width + gap);
            }
        }
        ViewportMode::Mobile => {
            if bar.width < TOGGLE_WIDTH + 2 {
                return map;
            }
            let toggle_x = bar.right() - (TOGGLE_WIDTH + 2);
            map.toggle = Some(Rect::new(toggle_x, row, TOGGLE_WIDTH, 1));

            if menu_open {
                let inner = items
                    .iter()
                    .map(|item| item_text(item, mode).width() as u16)
                    .max()
                    .unwrap_or(0)
                    + 2;
                let width = (inner + 2).min(area.width);
                let height = (items.len() as u16 + 2).min(area.height.saturating_sub(BAR_ROWS));
                let x = area.right().saturating_sub(width + 1).max(area.x);
                let panel = Rect::new(x, bar.bottom(), width, height);
                map.panel = Some(panel);

                for (i, item) in items.iter().enumerate() {
                    let y = panel.y + 1 + i as u16;
                    if y + 1 >= panel.bottom() {
                        break;
                    }
                    map.items
                        .push((Rect::new(panel.x + 1, y, panel.width.saturating_sub(2), 1), item.anchor));
                }
            }
        }
    }

    map
}

/// Render the bar and, when open, the dropdown panel
pub fn render(f: &mut Frame, map: &NavHitMap, nav: &NavController, brand: &str, theme: &Theme) {
    let screen = f.area();
    let Some(bar) = map.bar.and_then(|r| clip(r, screen)) else {
        return;
    };
    let mode = nav.layout();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.nav_bar));
    f.render_widget(Clear, bar);
    f.render_widget(block, bar);

    if bar.height < 2 {
        return;
    }

    if mode != ViewportMode::Tablet {
        let width = brand_width(brand).min(bar.width.saturating_sub(4));
        if let Some(brand_area) = clip(Rect::new(bar.x + 2, bar.y + 1, width, 1), screen) {
            let brand_line = Line::from(Span::styled(
                brand.to_string(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
            f.render_widget(Paragraph::new(brand_line), brand_area);
        }
    }

    if let Some(toggle) = map.toggle.and_then(|r| clip(r, screen)) {
        let glyph = if nav.menu_open() { " ✕ " } else { " ☰ " };
        let style = if nav.menu_open() {
            Style::default().fg(theme.nav_active_fg).bg(theme.nav_active)
        } else {
            Style::default().fg(theme.nav_item)
        };
        f.render_widget(Paragraph::new(Span::styled(glyph, style)), toggle);
    }

    if let Some(panel) = map.panel.and_then(|r| clip(r, screen)) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.nav_bar));
        f.render_widget(Clear, panel);
        f.render_widget(block, panel);
    }

    for (rect, anchor) in &map.items {
        let Some(rect) = clip(*rect, screen) else {
            continue;
        };
        let Some(item) = nav.items().iter().find(|i| i.anchor == *anchor) else {
            continue;
        };
        let style = if nav.is_active(item) {
            Style::default()
                .fg(theme.nav_active_fg)
                .bg(theme.nav_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.nav_item)
        };
        f.render_widget(Paragraph::new(Span::styled(item_text(item, mode), style)), rect);
    }
}
