// Headless simulation
//
// Drives the same App the terminal host uses, without a terminal. A script of
// steps (JSON lines) is replayed against a fixed frame clock and one JSON
// snapshot of the navigation state is printed per step.
//
// Script lines look like:
//   {"wheel": 20}
//   {"resize": {"cols": 60, "rows": 30}}
//   "toggle_menu"
//   {"click": {"col": 0, "row": 29}}
//   {"activate": "#projects"}
//   {"cta": "contact"}
//   {"wait_ms": 500}

use crate::config::Config;
use crate::content::Portfolio;
use crate::host::Document;
use crate::logging::LogBuffer;
use crate::nav::NavConfig;
use crate::theme::Theme;
use crate::tui::app::App;
use anyhow::{Context, Result};
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Wheel scroll by rows; negative scrolls up
    Wheel(i32),
    Resize { cols: u16, rows: u16 },
    ToggleMenu,
    /// Left press at a terminal cell
    Click { col: u16, row: u16 },
    /// Touch at a terminal cell
    Tap { col: u16, row: u16 },
    /// Navigation link target, e.g. `#projects`
    Activate(String),
    /// Hero button target section id
    Cta(String),
    /// Let frames run without input
    WaitMs(u64),
}

/// Navigation state after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub step: usize,
    pub at_ms: u64,
    pub action: String,
    pub scroll_y: f64,
    pub progress_percent: f64,
    pub bar_visible: bool,
    pub layout: &'static str,
    pub active_section: Option<String>,
    pub menu_open: bool,
    pub scroll_locked: bool,
    pub body_overflow: String,
}

/// Built-in walkthrough used when no script is given
pub fn default_script() -> Vec<Step> {
    vec![
        Step::WaitMs(200),
        Step::Wheel(20),
        Step::WaitMs(100),
        Step::Wheel(-10),
        Step::Activate("#projects".to_string()),
        Step::WaitMs(600),
        Step::Resize { cols: 60, rows: 30 },
        Step::ToggleMenu,
        Step::Wheel(5),
        Step::Click { col: 0, row: 29 },
        Step::Cta("contact".to_string()),
        Step::WaitMs(600),
        Step::Activate("#missing".to_string()),
    ]
}

/// Parse a JSON-lines script; blank lines and `//` comments are skipped
pub fn parse_script(contents: &str) -> Result<Vec<Step>> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with("//"))
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid step on line {}", i + 1))
        })
        .collect()
}

pub fn load_script(path: Option<&Path>) -> Result<Vec<Step>> {
    let Some(path) = path else {
        return Ok(default_script());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&contents).with_context(|| format!("in {}", path.display()))
}

/// Headless host: an App plus a deterministic frame clock
pub struct Simulation {
    app: App,
    clock: Duration,
    frame: Duration,
}

impl Simulation {
    pub fn new(
        config: Config,
        nav_config: NavConfig,
        portfolio: Portfolio,
        theme: Theme,
        size: (u16, u16),
    ) -> Self {
        let frame = Duration::from_millis(config.frame_interval_ms.max(1));
        let mut sim = Self {
            app: App::new(config, nav_config, portfolio, theme, LogBuffer::new(), size),
            clock: Duration::ZERO,
            frame,
        };
        sim.layout();
        sim.run_frames(2);
        sim
    }

    /// What a draw would do, minus the terminal
    fn layout(&mut self) {
        let (cols, rows) = (self.app.page.cols(), self.app.page.rows());
        self.app.build_page(cols);
        self.app.layout_nav(Rect::new(0, 0, cols, rows));
    }

    fn run_frames(&mut self, n: u64) {
        for _ in 0..n {
            self.clock += self.frame;
            self.app.tick_at(self.clock);
            self.layout();
        }
    }

    pub fn apply(&mut self, step: &Step) {
        match step {
            Step::Wheel(rows) => {
                if !self.app.scroll_rows(*rows) {
                    tracing::info!(rows, "wheel ignored");
                }
            }
            Step::Resize { cols, rows } => self.app.resize(*cols, *rows),
            Step::ToggleMenu => {
                if !self.app.toggle_menu() {
                    tracing::info!("no menu toggle in this layout");
                }
            }
            Step::Click { col, row } => self.app.click(*col, *row),
            Step::Tap { col, row } => self.app.tap(*col, *row),
            Step::Activate(anchor) => {
                let outcome = self.app.activate_anchor(anchor);
                if outcome.handled() {
                    tracing::info!(anchor = anchor.as_str(), ?outcome, "activate");
                } else {
                    tracing::info!(anchor = anchor.as_str(), "not an in-page link, left to the host");
                }
            }
            Step::Cta(target) => {
                self.app.scroll_to_cta(target);
            }
            Step::WaitMs(_) => {}
        }

        // Two frames settle scroll commits and scroll-spy recomputes
        let frames = match step {
            Step::WaitMs(ms) => (ms / self.frame.as_millis().max(1) as u64).max(1),
            _ => 2,
        };
        self.run_frames(frames);
    }

    pub fn snapshot(&self, step: usize, action: String) -> Snapshot {
        let nav = &self.app.nav;
        Snapshot {
            step,
            at_ms: self.clock.as_millis() as u64,
            action,
            scroll_y: self.app.page.scroll_y(),
            progress_percent: nav.progress_percent(),
            bar_visible: nav.bar_visible(),
            layout: nav.layout().as_str(),
            active_section: nav.active_section().map(str::to_string),
            menu_open: nav.menu_open(),
            scroll_locked: nav.scroll_locked(),
            body_overflow: self.app.page.body_overflow().to_string(),
        }
    }

    pub fn teardown(&mut self) {
        self.app.teardown();
    }
}

/// Replay `steps`, writing one JSON line per step to `out`
pub fn run(mut sim: Simulation, steps: &[Step], mut out: impl Write) -> Result<()> {
    tracing::info!(steps = steps.len(), "simulation started");

    let initial = sim.snapshot(0, "mount".to_string());
    writeln!(out, "{}", serde_json::to_string(&initial)?).context("failed to write snapshot")?;

    for (i, step) in steps.iter().enumerate() {
        sim.apply(step);
        let action = serde_json::to_string(step)?;
        let snapshot = sim.snapshot(i + 1, action);
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)
            .context("failed to write snapshot")?;
    }

    sim.teardown();
    tracing::info!("simulation finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(cols: u16, rows: u16) -> Simulation {
        Simulation::new(
            Config::default(),
            NavConfig::default(),
            Portfolio::default(),
            Theme::default(),
            (cols, rows),
        )
    }

    #[test]
    fn parses_script_lines() {
        let steps = parse_script(
            r##"
// open the menu on a phone-sized terminal
{"resize": {"cols": 50, "rows": 30}}
"toggle_menu"
{"activate": "#contact"}
{"wait_ms": 250}
"##,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Resize { cols: 50, rows: 30 },
                Step::ToggleMenu,
                Step::Activate("#contact".to_string()),
                Step::WaitMs(250),
            ]
        );
    }

    #[test]
    fn scripted_tap_dismisses_menu() {
        let steps = parse_script("\"toggle_menu\"\n{\"tap\": {\"col\": 0, \"row\": 29}}").unwrap();
        assert_eq!(steps[1], Step::Tap { col: 0, row: 29 });

        let mut sim = sim(60, 30);
        sim.apply(&steps[0]);
        assert!(sim.snapshot(1, String::new()).menu_open);
        sim.apply(&steps[1]);
        let after = sim.snapshot(2, String::new());
        assert!(!after.menu_open);
        assert!(!after.scroll_locked);
        assert_eq!(after.body_overflow, "");
    }

    #[test]
    fn bad_line_reports_its_number() {
        let err = parse_script("\"toggle_menu\"\n{\"jump\": 3}").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn default_script_walkthrough() {
        let mut out = Vec::new();
        run(sim(160, 24), &default_script(), &mut out).unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), default_script().len() + 1);

        assert_eq!(lines[0]["active_section"], "top");
        // Wheel down 20 rows hides the bar
        assert_eq!(lines[2]["bar_visible"], false);
        // Back up 10 rows shows it again
        assert_eq!(lines[4]["bar_visible"], true);
        // Projects reached after the smooth scroll
        assert_eq!(lines[6]["active_section"], "projects");
        // Narrow terminal, menu open, wheel blocked
        assert_eq!(lines[7]["layout"], "mobile");
        assert_eq!(lines[8]["scroll_locked"], true);
        assert_eq!(lines[8]["body_overflow"], "hidden");
        assert_eq!(lines[9]["scroll_y"], lines[8]["scroll_y"]);
        // Outside click closes and restores overflow
        assert_eq!(lines[10]["menu_open"], false);
        assert_eq!(lines[10]["body_overflow"], "");
        // Missing anchor changes nothing
        assert_eq!(lines[13]["scroll_y"], lines[12]["scroll_y"]);
    }
}
