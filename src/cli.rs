// CLI module - command-line argument parsing and handlers
//
// Provides subcommands besides the default terminal page:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Print the config file location
// - simulate: Replay a scripted session headlessly

use crate::config::{Config, VERSION};
use crate::theme::Theme;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// folio - a portfolio page with scroll-aware navigation, in your terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Portfolio page with scroll-aware navigation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Replay scripted input without a terminal and print JSON snapshots
    Simulate {
        /// JSON-lines script; the built-in walkthrough when omitted
        #[arg(long)]
        script: Option<PathBuf>,

        /// Terminal width in columns
        #[arg(long, default_value_t = 160)]
        cols: u16,

        /// Terminal height in rows
        #[arg(long, default_value_t = 40)]
        rows: u16,
    },
}

/// Handle config commands
pub fn handle_config(show: bool, reset: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: folio config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    match &config.content_path {
        Some(path) => println!("content_path = {:?}", path.display().to_string()),
        None => println!("# content_path = (built-in)"),
    }
    println!("cell_width_px = {:?}", config.cell_width_px);
    println!("cell_height_px = {:?}", config.cell_height_px);
    println!("frame_interval_ms = {}", config.frame_interval_ms);
    println!();
    let nav = &config.navigation;
    println!("[navigation]");
    println!("hide_threshold = {:?}", nav.hide_threshold);
    println!("scroll_padding = {:?}", nav.scroll_padding);
    println!("cta_offset = {:?}", nav.cta_offset);
    println!("desktop_breakpoint = {:?}", nav.desktop_breakpoint);
    println!("tablet_breakpoint = {:?}", nav.tablet_breakpoint);
    println!("root_margin = {:?}", nav.root_margin);
    println!("thresholds = {:?}", nav.thresholds);
    if let Err(e) = nav.to_nav_config() {
        println!("# invalid: {:#}", e);
    }
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    println!("# Built-in themes: {}", Theme::list_builtin().join(", "));
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simulate_flags() {
        let cli = Cli::try_parse_from(["folio", "simulate", "--cols", "60"]).unwrap();
        match cli.command {
            Some(Commands::Simulate { script, cols, rows }) => {
                assert!(script.is_none());
                assert_eq!(cols, 60);
                assert_eq!(rows, 40);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn no_subcommand_runs_the_page() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
    }
}
