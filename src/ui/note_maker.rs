use super::layout::{calculate_writing_chunks, two_columns};
use super::theme::Palette;
use super::widgets::{draw_scrollable, draw_text_input, heading, markdown_text, status_lines};
use crate::models::EvaluationResult;
use crate::utils::format_countdown;
use crate::workflow::note_maker::{NoteMaker, SetupFocus, Stage, TIME_LIMITS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

pub const NO_NOTES: &str = "No notes were written.";

pub fn draw_note_maker(f: &mut Frame, area: Rect, nm: &mut NoteMaker, p: &Palette) {
    match nm.stage {
        Stage::Setup => draw_setup(f, area, nm, p),
        Stage::Writing => draw_writing(f, area, nm, p),
        Stage::Evaluating => draw_evaluating(f, area, p),
        Stage::Results if nm.show_final_notes => draw_final_notes(f, area, nm, p),
        Stage::Results => draw_results(f, area, nm, p),
    }
}

fn draw_setup(f: &mut Frame, area: Rect, nm: &mut NoteMaker, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            heading("Mains Note Making Tool", p),
            Line::from(Span::styled(
                "Enter a topic and set a timer to start your focused, step-by-step note-making session.",
                p.muted(),
            )),
        ])
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    draw_text_input(
        f,
        chunks[1],
        &mut nm.topic,
        " Topic ",
        "e.g., Artificial Intelligence and its impact",
        nm.setup_focus == SetupFocus::Topic,
        p,
    );

    let focused = nm.setup_focus == SetupFocus::TimeLimit;
    let mut spans = vec![Span::raw("Time Limit: ")];
    for (i, minutes) in TIME_LIMITS.iter().enumerate() {
        let style = if i == nm.time_limit_index {
            p.selected()
        } else {
            Style::default().fg(p.text)
        };
        spans.push(Span::styled(format!(" {} min ", minutes), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(p.block(" Timer ", focused)),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(Span::styled("Enter: Start Session", p.title())).alignment(Alignment::Center),
        chunks[3],
    );
}

fn draw_writing(f: &mut Frame, area: Rect, nm: &mut NoteMaker, p: &Palette) {
    let layout = calculate_writing_chunks(area);
    let (step, total) = nm.progress();

    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(20),
            Constraint::Length(14),
        ])
        .split(layout.status_area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Topic: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(nm.topic.value().trim().to_string()),
        ]))
        .block(p.block("", false)),
        status[0],
    );

    let title = nm
        .current_section()
        .map(|s| s.title.clone())
        .unwrap_or_default();
    let gauge = Gauge::default()
        .block(p.block("", false))
        .gauge_style(Style::default().fg(p.accent).bg(p.border))
        .ratio(step as f64 / total.max(1) as f64)
        .label(format!("Step {} of {}: {}", step, total, title));
    f.render_widget(gauge, status[1]);

    let timer_colour: Color = if nm.time_left < 60 { p.danger } else { p.text };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("⏱ {}", format_countdown(nm.time_left)),
            Style::default().fg(timer_colour).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(p.block("", nm.time_left < 60)),
        status[2],
    );

    let step_index = nm.step;
    let error = nm.error.clone();
    let Some(section) = nm.sections.get_mut(step_index) else {
        return;
    };

    let mut ideas = Text::from(Line::from(Span::styled(
        section.prompt.clone(),
        p.muted().add_modifier(Modifier::ITALIC),
    )));
    ideas.push_line(Line::from(""));
    ideas.extend(status_lines(
        section.loading,
        "Brainstorming...",
        error.as_deref(),
        p,
    ));
    match &section.ideas {
        Some(content) => {
            ideas.extend(markdown_text(content));
            ideas.push_line(Line::from(""));
            ideas.push_line(Line::from(Span::styled("Ctrl+G: Regenerate Ideas", p.title())));
        }
        None if !section.loading => {
            ideas.push_line(Line::from(Span::styled("Ctrl+G: Generate Ideas", p.title())));
        }
        None => {}
    }
    let ideas_title = format!(" AI Brainstorm: {} ", section.title);
    draw_scrollable(
        f,
        layout.ideas_area,
        p.block(&ideas_title, false),
        ideas,
        &mut nm.ideas_scroll,
    );

    let notes_title = format!(" Your Notes for: {} ", section.title);
    let placeholder = format!(
        "Write your notes for the {} here... (Markdown works: **bold**, - lists)",
        section.title.to_lowercase()
    );
    draw_text_input(
        f,
        layout.notes_area,
        &mut section.input,
        &notes_title,
        &placeholder,
        true,
        p,
    );
}

fn draw_evaluating(f: &mut Frame, area: Rect, p: &Palette) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        heading("Evaluating Your Notes...", p),
        Line::from(""),
        Line::from(Span::styled(
            "Our AI is analyzing your notes based on UPSC standards. This might take a moment.",
            p.muted(),
        )),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        area,
    );
}

/// The user's non-empty sections as markdown, or the empty placeholder.
fn compiled_notes_text(nm: &NoteMaker, p: &Palette) -> Text<'static> {
    let mut text = Text::default();
    let written: Vec<_> = nm
        .sections
        .iter()
        .filter(|s| !s.input.is_blank())
        .collect();

    if written.is_empty() {
        text.push_line(Line::from(Span::styled(NO_NOTES, p.muted())));
    }
    for section in written {
        text.push_line(Line::from(Span::styled(
            section.title.clone(),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        text.extend(markdown_text(section.input.value()));
        text.push_line(Line::from(""));
    }
    text
}

fn feedback_text(evaluation: &EvaluationResult, p: &Palette) -> Text<'static> {
    let cards = [
        ("Strengths", &evaluation.strengths, p.success),
        ("Weaknesses", &evaluation.weaknesses, p.danger),
        ("Suggestions for Improvement", &evaluation.suggestions, p.accent),
        ("Additional Content", &evaluation.additional_content, p.extra),
    ];

    let mut text = Text::default();
    for (title, content, colour) in cards {
        text.push_line(Line::from(Span::styled(
            format!("▌{}", title),
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        )));
        text.extend(markdown_text(content));
        text.push_line(Line::from(""));
    }
    text
}

fn topic_line(nm: &NoteMaker, p: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("Topic: ", p.muted()),
        Span::styled(
            nm.topic.value().trim().to_string(),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn draw_results(f: &mut Frame, area: Rect, nm: &mut NoteMaker, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![heading("Evaluation Results", p), topic_line(nm, p)]),
        chunks[0],
    );

    let columns = two_columns(chunks[1], 50);
    let notes = compiled_notes_text(nm, p);
    let feedback = nm
        .evaluation
        .as_ref()
        .map(|e| feedback_text(e, p))
        .unwrap_or_default();

    let mut notes_scroll = nm.results_scroll;
    draw_scrollable(
        f,
        columns[0],
        p.block(" Your Compiled Notes ", false),
        notes,
        &mut notes_scroll,
    );
    draw_scrollable(
        f,
        columns[1],
        p.block(" AI Feedback ", true),
        feedback,
        &mut nm.results_scroll,
    );
}

fn draw_final_notes(f: &mut Frame, area: Rect, nm: &mut NoteMaker, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![heading("Final Notes", p), topic_line(nm, p)]),
        chunks[0],
    );

    let columns = two_columns(chunks[1], 60);
    let notes = compiled_notes_text(nm, p);
    let additional = nm
        .evaluation
        .as_ref()
        .map(|e| markdown_text(&e.additional_content))
        .unwrap_or_default();

    let mut extra_scroll = nm.results_scroll;
    draw_scrollable(
        f,
        columns[0],
        p.block(" Your Compiled Notes ", true),
        notes,
        &mut nm.results_scroll,
    );
    draw_scrollable(
        f,
        columns[1],
        p.block(" AI Suggestions & Additional Content ", false)
            .border_style(Style::default().fg(p.extra)),
        additional,
        &mut extra_scroll,
    );
}
