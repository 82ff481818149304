//! Page scrollbar on the right edge
//!
//! Thumb color follows the reading progress color; nothing is drawn when the
//! whole page fits on screen.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollable row range for `total` content rows in a `viewport` rows tall
/// window, or None when nothing scrolls
pub fn scroll_range(total: usize, viewport: usize) -> Option<usize> {
    let range = total.saturating_sub(viewport);
    (range > 0).then_some(range)
}

/// Draw the bar for a page scrolled to `offset` rows
///
/// The top `skip` rows are left alone so the bar does not cut through the
/// navigation bar border.
pub fn render(f: &mut Frame, area: Rect, total: usize, offset: usize, skip: u16, theme: &Theme) {
    let Some(range) = scroll_range(total, area.height as usize) else {
        return;
    };
    let track = Rect::new(
        area.x,
        area.y + skip.min(area.height),
        area.width,
        area.height.saturating_sub(skip),
    );
    if track.height == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_style(Style::default().fg(theme.border))
        .thumb_style(Style::default().fg(theme.progress));
    let mut state = ScrollbarState::new(range).position(offset.min(range));

    f.render_stateful_widget(scrollbar, track, &mut state);
}
