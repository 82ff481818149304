// Reading progress bar
//
// A single row pinned to the top edge, drawn over the navigation bar border.

use crate::theme::Theme;
use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};

/// Cells filled for `percent` of `width`
pub fn filled_cells(width: u16, percent: f64) -> u16 {
    let fraction = (percent / 100.0).clamp(0.0, 1.0);
    (width as f64 * fraction).round() as u16
}

pub fn render(f: &mut Frame, area: Rect, percent: f64, theme: &Theme) {
    let filled = filled_cells(area.width, percent);
    if filled == 0 || area.height == 0 {
        return;
    }
    let bar = Rect::new(area.x, area.y, filled, 1);
    let text = Span::styled("━".repeat(filled as usize), Style::default().fg(theme.progress));
    f.render_widget(Paragraph::new(text), bar);
}
