//! Transient one-line notice
//!
//! Sits bottom-center above the footer, on top of everything else, and goes
//! away on its own.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

pub struct Toast {
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_ttl(message, TOAST_DURATION)
    }

    pub fn with_ttl(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }

    /// Box for the notice inside `area`: bordered, centered, one row up from
    /// the bottom edge, never wider than the area
    pub fn placement(&self, area: Rect) -> Rect {
        let width = (self.message.width() as u16 + 4).min(area.width);
        let height = 3u16.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.bottom().saturating_sub(height + 1).max(area.y);
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rect = self.placement(area);
        if rect.width < 3 || rect.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.progress))
            .style(Style::default().bg(theme.surface));
        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        f.render_widget(Clear, rect);
        f.render_widget(text, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_centered_above_bottom_edge() {
        let toast = Toast::new("Resume: link");
        let rect = toast.placement(Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(32, 20, 16, 3));
    }

    #[test]
    fn placement_fits_tiny_terminals() {
        let toast = Toast::new("a very long message that will not fit");
        let rect = toast.placement(Rect::new(0, 0, 20, 2));
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 2);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        assert!(Toast::with_ttl("x", Duration::ZERO).is_expired());
        assert!(!Toast::new("x").is_expired());
    }
}
