// Modal overlay rendering
//
// - Help modal: keyboard shortcuts and current navigation state
// - Logs modal: tail of the in-memory log buffer

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::components::format_number;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Log entries shown at once in the logs modal
const LOG_ROWS: usize = 16;

/// Label of the highlighted navigation item
fn section_label(app: &App) -> &'static str {
    app.nav.active_item().map(|item| item.label).unwrap_or("-")
}

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs { offset } => render_logs(f, app, *offset),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn frame_block<'a>(app: &App, title: &'a str, hint: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.accent))
        .title(title)
        .title_bottom(Line::from(hint).centered())
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent_alt);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let scroll = app.nav.scroll_state();
    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Scrolling", header_style)),
        kb("↑/↓, j/k", "Scroll one line"),
        kb("PgUp/PgDn", "Scroll one screen"),
        kb("Home/End", "Jump to top / bottom"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("1-5", "Go to section"),
        kb("p / c", "Projects / contact buttons"),
        kb("m", "Toggle menu (narrow terminals)"),
        kb("Esc", "Close menu"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("r", "Show resume link"),
        kb("l", "Recent logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Wheel", "Scroll the page"),
        kb("Click", "Nav items, menu, buttons"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Layout: ", desc_style),
            Span::styled(app.nav.layout().as_str(), key_style),
            Span::styled("  |  Section: ", desc_style),
            Span::styled(section_label(app), key_style),
        ]),
        Line::from(vec![
            Span::styled("  Progress: ", desc_style),
            Span::styled(format!("{:.0}%", scroll.progress_percent), key_style),
            Span::styled("  |  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(48, 30, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(frame_block(app, " Help ", " Press ? or Esc to close "));
    f.render_widget(paragraph, area);
}

/// Render the log tail, newest last
/// Module path without the crate name, e.g. `nav::menu`
fn short_target(target: &str) -> &str {
    target.strip_prefix("folio::").unwrap_or(target)
}

fn render_logs(f: &mut Frame, app: &App, offset: usize) {
    let total = app.log_buffer.len();
    let entries = app.recent_logs(LOG_ROWS + offset);
    let visible = entries.len().saturating_sub(offset);

    let mut lines: Vec<Line> = entries[..visible]
        .iter()
        .rev()
        .take(LOG_ROWS)
        .rev()
        .map(|entry| {
            let level_style = match entry.level {
                LogLevel::Error => Style::default().fg(app.theme.accent_alt),
                LogLevel::Warn => Style::default().fg(app.theme.accent),
                _ => Style::default().fg(app.theme.muted),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(format!("{:<5} ", entry.level.as_str()), level_style),
                Span::styled(
                    format!("{} ", short_target(&entry.target)),
                    Style::default().fg(app.theme.border),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(app.theme.foreground)),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::styled(" No log entries yet", Style::default().fg(app.theme.muted)));
    }

    let area = f.area();
    let area = centered_rect(area.width.saturating_sub(8).min(110), LOG_ROWS as u16 + 2, area);
    f.render_widget(Clear, area);

    let title = format!(" Logs ({}) ", format_number(total as u64));
    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.background))
        .block(frame_block(app, &title, " ↑/↓ scroll · l or Esc to close "));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_targets_drop_crate_name() {
        assert_eq!(short_target("folio::nav::menu"), "nav::menu");
        assert_eq!(short_target("folio"), "folio");
        assert_eq!(short_target("tokio::runtime"), "tokio::runtime");
    }
}
