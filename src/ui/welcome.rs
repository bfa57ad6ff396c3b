use super::theme::Palette;
use super::widgets::draw_card;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const MODULES: [(&str, &str); 2] = [
    (
        "Prelims Prep",
        "Analyze current affairs from key sources and test your knowledge with AI-generated quizzes.",
    ),
    (
        "Mains Prep",
        "Structure your answers, create comprehensive notes, and get AI-based evaluation for mains.",
    ),
];

pub fn draw_welcome(f: &mut Frame, area: Rect, selected: usize, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(4), Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("Welcome!", p.title())),
        Line::from(""),
        Line::from(Span::styled(
            "Choose your preparation module to begin your journey towards success in the Civil Services Examination.",
            p.muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (i, (title, description)) in MODULES.iter().enumerate() {
        draw_card(f, cards[i], title, description, selected == i, true, p);
    }
}
