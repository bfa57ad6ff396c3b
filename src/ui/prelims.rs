use super::layout::two_columns;
use super::pyq::draw_pyq;
use super::quiz::draw_quiz_modal;
use super::theme::Palette;
use super::widgets::{draw_card, draw_scrollable, heading, markdown_text, status_lines};
use crate::workflow::prelims::{CaFocus, CurrentAffairs, PrelimsState, PrelimsTool, PRELIMS_TOOLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw_prelims(f: &mut Frame, area: Rect, state: &mut PrelimsState, p: &Palette) {
    match state.tool {
        PrelimsTool::Hub => draw_hub(f, area, state.hub_selected, p),
        PrelimsTool::CurrentAffairs => draw_current_affairs(f, area, &mut state.current_affairs, p),
        PrelimsTool::Pyq => draw_pyq(f, area, &mut state.pyq, p),
    }
}

fn draw_hub(f: &mut Frame, area: Rect, selected: usize, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        heading("Prelims Preparation Module", p),
        Line::from(Span::styled(
            "Select a tool to begin your targeted prelims practice.",
            p.muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(intro, chunks[0]);

    let cards = two_columns(chunks[1], 50);
    for (i, (title, description)) in PRELIMS_TOOLS.iter().enumerate() {
        draw_card(f, cards[i], title, description, selected == i, true, p);
    }
}

fn selector<'a>(label: &'a str, value: String, focused: bool, p: &Palette) -> Paragraph<'a> {
    let style = if focused {
        p.selected()
    } else {
        Style::default().fg(p.text)
    };
    Paragraph::new(Line::from(vec![
        Span::styled("◀ ", p.muted()),
        Span::styled(value, style),
        Span::styled(" ▶", p.muted()),
    ]))
    .alignment(Alignment::Center)
    .block(p.block(label, focused))
}

fn draw_current_affairs(f: &mut Frame, area: Rect, ca: &mut CurrentAffairs, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        heading("Current Affairs Browser", p),
        Line::from(Span::styled(
            "Select a month and year to scan key sources for important UPSC prelims topics.",
            p.muted(),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Min(10),
        ])
        .split(chunks[1]);

    f.render_widget(
        selector(" Month ", ca.month_name().to_string(), ca.focus == CaFocus::Month, p),
        controls[0],
    );
    f.render_widget(
        selector(" Year ", ca.year().to_string(), ca.focus == CaFocus::Year, p),
        controls[1],
    );
    let action = if ca.loading {
        Span::styled(" Analyzing...", Style::default().fg(p.warning))
    } else {
        Span::styled(" Enter: Analyze Sources", p.title())
    };
    f.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(action)]),
        controls[2],
    );

    let body = chunks[2];
    if ca.topics.is_empty() {
        let mut lines = status_lines(
            ca.loading,
            "Scanning PIB, Down to Earth, The Hindu and more...",
            ca.error.as_deref(),
            p,
        );
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Pick a month and press Enter to find key topics.",
                p.muted(),
            )));
        }
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(p.block(" Topics ", false)),
            body,
        );
    } else {
        draw_topics(f, body, ca, p);
    }

    if let Some(quiz) = &mut ca.quiz {
        draw_quiz_modal(f, quiz, p);
    }
}

fn draw_topics(f: &mut Frame, area: Rect, ca: &mut CurrentAffairs, p: &Palette) {
    let columns = two_columns(area, 40);
    let focused = ca.focus == CaFocus::Topics;

    let items: Vec<ListItem> = ca
        .topics
        .iter()
        .map(|t| ListItem::new(t.title.clone()))
        .collect();
    let title = format!(" Key Topics for {} {} ", ca.month_name(), ca.year());
    let list = List::new(items)
        .block(p.block(&title, focused))
        .highlight_style(if focused {
            p.selected()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        })
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(ca.selected_topic));
    f.render_stateful_widget(list, columns[0], &mut list_state);

    let Some(topic) = ca.topics.get(ca.selected_topic) else {
        return;
    };
    let mut text = Text::from(heading(&topic.title, p));
    text.push_line(Line::from(""));
    text.extend(markdown_text(&topic.summary));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        if focused {
            "Enter: Assess My Knowledge"
        } else {
            "Tab to the topic list, then Enter to Assess My Knowledge"
        },
        p.title(),
    )));

    draw_scrollable(f, columns[1], p.block(" Summary ", false), text, &mut ca.scroll);
}
