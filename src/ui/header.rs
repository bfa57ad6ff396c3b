use super::theme::Palette;
use crate::models::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "Path to AIR 1 2026";
pub const TAGLINE: &str = "Your AI-Powered Path to Success";

pub fn draw_header(f: &mut Frame, area: Rect, theme: Theme, p: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(p.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(APP_TITLE, p.title())),
        Line::from(Span::styled(TAGLINE, p.muted())),
    ]);
    f.render_widget(title, chunks[0]);

    let indicator = match theme {
        Theme::Light => "☀ Light",
        Theme::Dark => "☾ Dark",
    };
    let toggle = Paragraph::new(vec![
        Line::from(Span::styled(
            indicator,
            Style::default().fg(p.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Ctrl+T to switch", p.muted())),
    ])
    .alignment(Alignment::Right);
    f.render_widget(toggle, chunks[1]);
}

/// Key help on the first line, AI availability on the second.
pub fn draw_footer(
    f: &mut Frame,
    area: Rect,
    help: &str,
    ai_enabled: bool,
    model: &str,
    p: &Palette,
) {
    let status = if ai_enabled {
        Span::styled(format!("AI: {}", model), Style::default().fg(p.success))
    } else {
        Span::styled(
            "AI disabled: Set OPENROUTER_API_KEY",
            Style::default().fg(p.warning).add_modifier(Modifier::BOLD),
        )
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(help.to_string(), p.muted())),
        Line::from(vec![status, Span::styled("  |  Ctrl+C quit", p.muted())]),
    ]);
    f.render_widget(footer, area);
}
