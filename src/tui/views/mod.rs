// Views module - screen-level rendering logic
//
// The page fills the terminal. Overlays stack on top in this order:
// navigation bar, dropdown, progress bar, modal, toast.

mod modal;

use super::app::App;
use crate::tui::components::{nav_bar, progress_bar, scrollbar};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, area);

    // Page content, one column narrower for the scrollbar
    let model = app.build_page(area.width);
    let total = model.total_rows();
    let offset = app.page.scroll_row();
    let content = Rect::new(area.x, area.y, area.width.saturating_sub(1), area.height);
    f.render_widget(Paragraph::new(model.lines).scroll((offset, 0)), content);
    scrollbar::render(f, area, total, offset as usize, nav_bar::BAR_ROWS, &app.theme);

    app.layout_nav(area);
    nav_bar::render(f, &app.hits, &app.nav, app.brand(), &app.theme);
    progress_bar::render(f, area, app.nav.progress_percent(), &app.theme);

    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, area, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Portfolio;
    use crate::logging::LogBuffer;
    use crate::nav::NavConfig;
    use crate::theme::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn draw_through(cols: u16, rows: u16) {
        let mut app = App::new(
            Config::default(),
            NavConfig::default(),
            Portfolio::default(),
            Theme::default(),
            LogBuffer::new(),
            (cols, rows),
        );
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        app.toggle_menu();
        app.show_toast("Resume: link");
        for tick in 0..40u64 {
            app.tick_at(Duration::from_millis(tick * 16));
            match tick {
                5 => app.click(0, 0),
                10 => app.click(cols - 1, rows - 1),
                15 => app.tap(cols / 2, rows / 2),
                20 => {
                    app.scroll_rows(3);
                }
                25 => {
                    app.toggle_menu();
                }
                _ => {}
            }
            terminal.draw(|f| draw(f, &mut app)).unwrap();
        }
    }

    #[test]
    fn draws_on_single_row_terminals() {
        for cols in [1, 60, 100, 200] {
            draw_through(cols, 1);
        }
    }

    #[test]
    fn draws_on_tiny_terminals() {
        for (cols, rows) in [(2, 2), (5, 3), (20, 2), (200, 2), (4, 6)] {
            draw_through(cols, rows);
        }
    }

    #[test]
    fn mobile_dropdown_draws_inside_the_screen() {
        let mut app = App::new(
            Config::default(),
            NavConfig::default(),
            Portfolio::default(),
            Theme::default(),
            LogBuffer::new(),
            (60, 30),
        );
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        assert!(app.toggle_menu());
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let panel = app.hits.panel.unwrap();
        assert!(panel.right() <= 60 && panel.bottom() <= 30);
        assert_eq!(app.hits.toggle, Some(Rect::new(55, 1, 3, 1)));
    }
}
