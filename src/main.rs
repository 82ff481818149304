// folio - a portfolio page with scroll-aware navigation, in the terminal
//
// Architecture:
// - Host (host/): document, frame scheduling, listeners, intersection observer
// - Navigation (nav/): scroll tracker, scroll-spy, responsive switch, menu
// - Content (content/): page text, typewriter and count-up, view counter
// - TUI (ratatui): renders the page and implements the host on a terminal
// - Simulate: the same app driven headlessly from a script

mod cli;
mod config;
mod content;
mod host;
mod logging;
mod nav;
mod simulate;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig, VERSION};
use content::Portfolio;
use logging::{LogBuffer, TuiLogLayer};
use nav::NavConfig;
use std::path::PathBuf;
use theme::Theme;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rolling JSON log writer, if file logging is enabled and the directory is usable
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix),
    };
    // Writes happen on a background thread
    Some(tracing_appender::non_blocking(appender))
}

/// Initialize tracing
///
/// With a log buffer (terminal page) events are captured in memory so they do
/// not garble the display; without one they go to stderr. File logging is
/// added on top of either. The returned guard must live until exit so the
/// file writer flushes.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: Option<&LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let buffer_layer = log_buffer.map(|buffer| TuiLogLayer::new(buffer.clone()));
    let stderr_layer = log_buffer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Everything the page needs besides the config itself
fn load_page(config: &Config) -> Result<(NavConfig, Portfolio, Theme)> {
    let nav_config = config
        .navigation
        .to_nav_config()
        .context("invalid [navigation] configuration")?;
    let portfolio = Portfolio::load(config.content_path.as_deref())?;
    let theme = Theme::by_name(&config.theme);
    Ok((nav_config, portfolio, theme))
}

async fn run_page() -> Result<()> {
    let config = Config::from_env();
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, Some(&log_buffer));

    let (nav_config, portfolio, theme) = load_page(&config)?;
    tracing::info!(version = VERSION, theme = %theme.name, "starting folio");

    tui::run_tui(config, nav_config, portfolio, theme, log_buffer).await
}

fn run_simulation(script: Option<PathBuf>, cols: u16, rows: u16) -> Result<()> {
    let config = Config::from_env();
    let _file_guard = init_tracing(&config, None);

    let (nav_config, portfolio, theme) = load_page(&config)?;
    let steps = simulate::load_script(script.as_deref())?;
    let sim = simulate::Simulation::new(config, nav_config, portfolio, theme, (cols, rows));
    simulate::run(sim, &steps, std::io::stdout().lock())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            cli::handle_config(show, reset, path);
            Ok(())
        }
        Some(Commands::Simulate { script, cols, rows }) => run_simulation(script, cols, rows),
        None => run_page().await,
    }
}
