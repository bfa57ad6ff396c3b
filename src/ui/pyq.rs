use super::theme::Palette;
use super::widgets::{draw_scrollable, draw_text_input, heading, markdown_text, status_lines};
use crate::models::PyqAnalysis;
use crate::workflow::pyq::{PyqFocus, PyqState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

pub const NO_ARTICLES: &str = "No recent relevant articles found by the AI.";

pub fn draw_pyq(f: &mut Frame, area: Rect, state: &mut PyqState, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        heading("PYQ Analysis Tool", p),
        Line::from(Span::styled(
            "Enter a Previous Year Question to get a detailed breakdown, including topics, explanations, and relevant current affairs.",
            p.muted(),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    draw_text_input(
        f,
        chunks[1],
        &mut state.question,
        " Question ",
        "Paste the full question here, including all options...",
        state.focus == PyqFocus::Question,
        p,
    );
    draw_text_input(
        f,
        chunks[2],
        &mut state.answer,
        " Your Answer ",
        "Your Answer (optional, e.g., 'A' or 'Option A')",
        state.focus == PyqFocus::Answer,
        p,
    );

    let action = if state.loading {
        Span::styled("Analyzing...", Style::default().fg(p.warning))
    } else {
        Span::styled("Ctrl+S: Analyze Question", p.title())
    };
    f.render_widget(Paragraph::new(action), chunks[3]);

    let mut text = Text::from(status_lines(
        state.loading,
        "Analyzing the question...",
        state.error.as_deref(),
        p,
    ));
    if let Some(analysis) = &state.analysis {
        text.extend(analysis_text(analysis, p).lines);
    }
    draw_scrollable(f, chunks[4], p.block(" Analysis ", false), text, &mut state.scroll);
}

fn section(text: &mut Text<'static>, title: &str, p: &Palette) {
    if !text.lines.is_empty() {
        text.push_line(Line::from(""));
    }
    text.push_line(Line::from(Span::styled(
        title.to_string(),
        p.title().add_modifier(Modifier::UNDERLINED),
    )));
}

pub fn analysis_text(analysis: &PyqAnalysis, p: &Palette) -> Text<'static> {
    let mut text = Text::default();

    section(&mut text, "Evaluation", p);
    text.extend(markdown_text(&analysis.evaluation));

    section(&mut text, "Demand of the Question", p);
    text.extend(markdown_text(&analysis.demand_of_question));

    section(&mut text, "Core Topics Involved", p);
    let mut chips = Vec::new();
    for (i, topic) in analysis.topics.iter().enumerate() {
        if i > 0 {
            chips.push(Span::raw("  "));
        }
        chips.push(Span::styled(
            format!("[{}]", topic),
            Style::default().fg(p.accent),
        ));
    }
    text.push_line(Line::from(chips));

    section(&mut text, "Explanation", p);
    text.extend(markdown_text(&analysis.explanation));

    section(&mut text, "Extra Information", p);
    text.extend(markdown_text(&analysis.extra_info));

    section(&mut text, "Relevant Articles (Last 2 Years)", p);
    if analysis.relevant_articles.is_empty() {
        text.push_line(Line::from(Span::styled(NO_ARTICLES, p.muted())));
    }
    for article in &analysis.relevant_articles {
        text.push_line(Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(Span::styled(
            article.url.clone(),
            p.muted().add_modifier(Modifier::UNDERLINED),
        )));
        text.extend(markdown_text(&article.summary));
    }

    section(&mut text, "Recommended Topics for Further Study", p);
    for topic in &analysis.recommended_topics {
        text.push_line(Line::from(format!("  • {}", topic)));
    }

    text
}
