// TUI module - the page rendered in a terminal
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, resize, frame ticks)
// - Rendering the page

pub mod app;
pub mod components;
pub mod input;
pub mod modal;
pub mod page;
pub mod views;

use crate::config::Config;
use crate::content::Portfolio;
use crate::logging::LogBuffer;
use crate::nav::NavConfig;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether or not the loop succeeded.
pub async fn run_tui(
    config: Config,
    nav_config: NavConfig,
    portfolio: Portfolio,
    theme: Theme,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(
        config,
        nav_config,
        portfolio,
        theme,
        log_buffer,
        (size.width, size.height),
    );

    let result = run_event_loop(&mut terminal, &mut app).await;
    app.teardown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Input and the frame ticker race in `tokio::select!`; whichever is ready
/// first is handled, then the page is redrawn.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut frame_interval =
        tokio::time::interval(Duration::from_millis(app.config.frame_interval_ms));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(5)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => input::handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => input::handle_mouse_event(app, mouse_event),
                        Ok(Event::Resize(cols, rows)) => app.resize(cols, rows),
                        Ok(_) => {}
                        Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
                    }
                }
            } => {}

            _ = frame_interval.tick() => {
                app.on_tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
