// Page content renderer
//
// Lays the whole page out as one column of lines. Every block records its
// row count so the page document can report element bounds, and the hero
// call-to-action buttons record where they landed for mouse hits.
//
// Row counts depend only on content and width, never on animation progress,
// so typing and counting never reflow the page.

use super::formatters::{format_number, reveal_lines, wrap_text};
use crate::content::Portfolio;
use crate::theme::Theme;
use crate::tui::page::Block;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Left margin in columns
const MARGIN: usize = 2;

/// Blank rows above the hero so the bar never covers it
const HERO_CLEARANCE: usize = 4;

/// Animated hero values for one frame
#[derive(Debug, Clone, Default)]
pub struct HeroFrame {
    /// Characters of the name typed so far
    pub typed_chars: usize,
    pub typing: bool,
    /// Current count-up value per stat
    pub stat_values: Vec<u64>,
}

/// Footer values for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterFrame {
    pub year: i32,
    /// None while the counter is still loading
    pub views: Option<u64>,
}

/// A clickable hero button, in content rows and columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cta {
    pub row: u16,
    pub x: u16,
    pub width: u16,
    /// Section id scrolled to
    pub target: &'static str,
}

impl Cta {
    pub fn contains(&self, col: u16, content_row: u16) -> bool {
        content_row == self.row && col >= self.x && col < self.x + self.width
    }
}

#[derive(Debug, Default)]
pub struct PageModel {
    pub lines: Vec<Line<'static>>,
    pub blocks: Vec<Block>,
    pub ctas: Vec<Cta>,
}

impl PageModel {
    pub fn total_rows(&self) -> usize {
        self.lines.len()
    }
}

struct Builder<'t> {
    theme: &'t Theme,
    width: usize,
    model: PageModel,
    block_start: usize,
}

impl<'t> Builder<'t> {
    fn new(theme: &'t Theme, width: u16) -> Self {
        Self {
            theme,
            width: (width as usize).saturating_sub(MARGIN * 2 + 1).max(10),
            model: PageModel::default(),
            block_start: 0,
        }
    }

    fn blank(&mut self) {
        self.model.lines.push(Line::raw(""));
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(" ".repeat(MARGIN))];
        all.extend(spans);
        self.model.lines.push(Line::from(all));
    }

    fn text(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.width) {
            self.push(vec![Span::styled(line, style)]);
        }
    }

    fn heading(&mut self, title: &str) {
        let accent = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let rule = "─".repeat(self.width.saturating_sub(title.width() + 4).min(40));
        self.push(vec![
            Span::styled("── ", Style::default().fg(self.theme.border)),
            Span::styled(title.to_string(), accent),
            Span::styled(format!(" {}", rule), Style::default().fg(self.theme.border)),
        ]);
        self.blank();
    }

    /// Close the current block
    fn end_block(&mut self, id: Option<&'static str>) {
        let rows = self.model.lines.len() - self.block_start;
        self.model.blocks.push(Block {
            id,
            rows: rows.min(u16::MAX as usize) as u16,
        });
        self.block_start = self.model.lines.len();
    }

    fn row(&self) -> u16 {
        self.model.lines.len().min(u16::MAX as usize) as u16
    }
}

/// Lay out the full page for a terminal `width` columns wide
pub fn build(
    portfolio: &Portfolio,
    theme: &Theme,
    width: u16,
    hero: &HeroFrame,
    footer: &FooterFrame,
) -> PageModel {
    let mut b = Builder::new(theme, width);
    let fg = Style::default().fg(theme.foreground);
    let muted = Style::default().fg(theme.muted);
    let bold = fg.add_modifier(Modifier::BOLD);

    // ─── Hero ────────────────────────────────────────────────
    for _ in 0..HERO_CLEARANCE {
        b.blank();
    }
    b.push(vec![Span::styled("Hi, I'm", muted)]);
    let name_lines = wrap_text(&portfolio.owner.name, b.width);
    let typed = reveal_lines(&name_lines, hero.typed_chars);
    let name_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    // Cursor sits after the last typed character
    let cursor_line = typed
        .iter()
        .rposition(|l| !l.is_empty())
        .unwrap_or(0);
    for (i, line) in typed.into_iter().enumerate() {
        let mut spans = vec![Span::styled(line, name_style)];
        if hero.typing && i == cursor_line {
            spans.push(Span::styled("▌", Style::default().fg(theme.accent_alt)));
        }
        b.push(spans);
    }
    b.blank();
    b.text(&portfolio.owner.tagline, muted);
    b.blank();

    let chip = Style::default().fg(theme.foreground).bg(theme.surface);
    let mut chips: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for tag in &portfolio.owner.tags {
        let text = format!(" {} ", tag);
        let w = text.width() + 1;
        if used + w > b.width && !chips.is_empty() {
            b.push(std::mem::take(&mut chips));
            used = 0;
        }
        chips.push(Span::styled(text, chip));
        chips.push(Span::raw(" "));
        used += w;
    }
    if !chips.is_empty() {
        b.push(chips);
    }
    b.blank();

    for (i, stat) in portfolio.stats.iter().enumerate() {
        let value = hero.stat_values.get(i).copied().unwrap_or(stat.value);
        let color = if i % 2 == 0 { theme.accent } else { theme.accent_alt };
        b.push(vec![
            Span::styled(
                format!("{:>4}+ ", value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(stat.label.clone(), muted),
        ]);
    }
    b.blank();

    let buttons = [("[ View Projects ]", "projects"), ("[ Contact Me ]", "contact")];
    let mut spans = Vec::new();
    let mut x = MARGIN;
    let row = b.row();
    for (i, &(label, target)) in buttons.iter().enumerate() {
        let style = if i == 0 {
            Style::default()
                .fg(theme.nav_active_fg)
                .bg(theme.nav_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent)
        };
        b.model.ctas.push(Cta {
            row,
            x: x as u16,
            width: label.width() as u16,
            target,
        });
        spans.push(Span::styled(label.to_string(), style));
        spans.push(Span::raw("  "));
        x += label.width() + 2;
    }
    b.push(spans);
    if let Some(url) = &portfolio.owner.resume_url {
        b.blank();
        b.push(vec![
            Span::styled("Resume  ", muted),
            Span::styled(url.clone(), Style::default().fg(theme.accent_alt)),
        ]);
    }
    b.blank();
    b.blank();
    b.end_block(Some("top"));

    // ─── Expertise ───────────────────────────────────────────
    b.heading("Expertise");
    for skill in &portfolio.expertise {
        b.push(vec![
            Span::styled("• ", Style::default().fg(theme.accent)),
            Span::styled(skill.title.clone(), bold),
        ]);
        b.text(&format!("  {}", skill.detail), muted);
    }
    b.blank();
    b.end_block(Some("expertise"));

    // ─── Experience ──────────────────────────────────────────
    b.heading("Experience");
    for role in &portfolio.experience {
        b.push(vec![
            Span::styled(role.title.clone(), bold),
            Span::styled(format!(" @ {}", role.organization), Style::default().fg(theme.accent)),
        ]);
        b.push(vec![Span::styled(role.period.clone(), muted)]);
        b.text(&role.summary, fg);
        b.blank();
    }
    b.end_block(Some("experience"));

    // ─── Certifications ──────────────────────────────────────
    b.heading("Certificates");
    for cert in &portfolio.certifications {
        let mut spans = vec![
            Span::styled("✓ ", Style::default().fg(theme.accent)),
            Span::styled(cert.name.clone(), bold),
            Span::styled(format!("  {}", cert.issuer), muted),
        ];
        if let Some(year) = cert.year {
            spans.push(Span::styled(format!(" · {}", year), muted));
        }
        b.push(spans);
    }
    b.blank();
    b.end_block(Some("certifications"));

    // ─── Projects ────────────────────────────────────────────
    b.heading("Projects");
    for project in &portfolio.projects {
        b.push(vec![Span::styled(project.title.clone(), bold)]);
        b.text(&project.description, fg);
        if !project.tech.is_empty() {
            b.text(&project.tech.join(" · "), Style::default().fg(theme.accent_alt));
        }
        if let Some(link) = &project.link {
            b.push(vec![Span::styled(link.clone(), Style::default().fg(theme.accent))]);
        }
        b.blank();
    }
    b.end_block(Some("projects"));

    // ─── Contact ─────────────────────────────────────────────
    b.heading("Contact me");
    b.text(&portfolio.contact.blurb, fg);
    b.blank();
    b.push(vec![
        Span::styled("✉ ", Style::default().fg(theme.accent)),
        Span::styled(portfolio.contact.email.clone(), bold),
    ]);
    for link in &portfolio.contact.links {
        b.push(vec![
            Span::styled(format!("{:<10}", link.label), muted),
            Span::styled(link.url.clone(), Style::default().fg(theme.accent)),
        ]);
    }
    b.blank();
    b.blank();
    b.end_block(Some("contact"));

    // ─── Footer ──────────────────────────────────────────────
    b.push(vec![Span::styled(
        "─".repeat(b.width),
        Style::default().fg(theme.border),
    )]);
    b.push(vec![
        Span::styled("Made by ", muted),
        Span::styled(portfolio.owner.short_name.clone(), Style::default().fg(theme.accent)),
        Span::styled(format!(" © {}", footer.year), muted),
    ]);
    let views = match footer.views {
        Some(1) => "👁 1 impression".to_string(),
        Some(n) => format!("👁 {} impressions", format_number(n)),
        None => "👁 …".to_string(),
    };
    b.push(vec![Span::styled(views, muted)]);
    b.blank();
    b.end_block(None);

    b.model
}
