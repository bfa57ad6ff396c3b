use super::layout::two_columns;
use super::theme::Palette;
use super::widgets::{draw_card, heading};
use crate::db::notes::NoteSessionSummary;
use crate::utils::truncate_string;
use crate::workflow::mains::{MainsHub, MAINS_TOOLS};
use chrono::TimeZone;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn format_session_date(timestamp: i64) -> String {
    let Some(datetime) = chrono::Local.timestamp_opt(timestamp, 0).single() else {
        return "unknown date".to_string();
    };

    let today = chrono::Local::now().date_naive();
    let session_date = datetime.date_naive();

    if session_date == today {
        format!("Today {}", datetime.format("%H:%M"))
    } else if session_date == today - chrono::Duration::days(1) {
        format!("Yesterday {}", datetime.format("%H:%M"))
    } else {
        session_date.format("%Y-%m-%d").to_string()
    }
}

fn format_session_item(session: &NoteSessionSummary) -> String {
    format!(
        "{} - {}",
        format_session_date(session.created_at),
        truncate_string(&session.topic, 60)
    )
}

pub fn draw_mains(f: &mut Frame, area: Rect, hub: &MainsHub, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(3),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        heading("Mains Preparation Module", p),
        Line::from(Span::styled(
            "Select a tool to build structured, exam-ready answers.",
            p.muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(intro, chunks[0]);

    let cards = two_columns(chunks[1], 50);
    for (i, (title, description, active)) in MAINS_TOOLS.iter().enumerate() {
        draw_card(f, cards[i], title, description, hub.selected == i, *active, p);
    }

    let focused = hub.selected_saved().is_some();
    let block = p.block(" Saved Note Sessions ", focused);
    if hub.saved.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No saved sessions yet. Evaluated notes are saved here automatically.",
            p.muted().add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        f.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = hub
        .saved
        .iter()
        .map(|s| ListItem::new(format_session_item(s)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(p.selected())
        .highlight_symbol("› ");
    let selected = hub.selected.checked_sub(MAINS_TOOLS.len());
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list.style(Style::default().fg(p.text)), chunks[2], &mut state);
}
