use super::layout::centered_rect;
use super::theme::Palette;
use crate::utils::{
    calculate_max_scroll, calculate_wrapped_cursor_position, estimate_text_height, follow_cursor,
    render_markdown, wrap_lines, TextInput,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

/// Draws an editable field. The text is laid out with `wrap_lines` so the
/// terminal cursor lands where the next character will appear.
pub fn draw_text_input(
    f: &mut Frame,
    area: Rect,
    input: &mut TextInput,
    title: &str,
    placeholder: &str,
    focused: bool,
    p: &Palette,
) {
    let block = p.block(title, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let lines: Vec<Line> = if input.value().is_empty() {
        vec![Line::from(Span::styled(
            placeholder.to_string(),
            p.muted().add_modifier(Modifier::ITALIC),
        ))]
    } else {
        wrap_lines(input.value(), width)
            .into_iter()
            .map(|row| Line::from(row.text))
            .collect()
    };

    if focused {
        let (row, col) = calculate_wrapped_cursor_position(input.value(), input.cursor(), width);
        input.scroll_y = follow_cursor(input.scroll_y, row, inner.height as usize);
        let y = (row as u16).saturating_sub(input.scroll_y);
        let x = (col as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position((inner.x + x, inner.y + y));
    }

    f.render_widget(Paragraph::new(lines).scroll((input.scroll_y, 0)), inner);
}

/// Renders `text` inside `block`, clamping `scroll` to the content height.
pub fn draw_scrollable(f: &mut Frame, area: Rect, block: Block, text: Text, scroll: &mut u16) {
    let inner = block.inner(area);
    let content_height = estimate_text_height(&text, inner.width as usize);
    *scroll = (*scroll).min(calculate_max_scroll(content_height, inner.height as usize));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll, 0));
    f.render_widget(paragraph, area);
}

pub fn markdown_text(content: &str) -> Text<'static> {
    Text::from(render_markdown(content))
}

pub fn heading(text: &str, p: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), p.title()))
}

/// "Loading..." or the error, if either applies.
pub fn status_lines(
    loading: bool,
    loading_text: &str,
    error: Option<&str>,
    p: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if loading {
        lines.push(Line::from(Span::styled(
            loading_text.to_string(),
            Style::default().fg(p.warning).add_modifier(Modifier::ITALIC),
        )));
    }
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(format!("Error: {}", error), p.error())));
    }
    lines
}

/// A blocking message in the middle of the screen, dismissed with Enter.
pub fn draw_notice(f: &mut Frame, message: &str, p: &Palette) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", p.muted())),
    ]);
    let notice = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(p.base())
        .block(p.block(" Notice ", true));
    f.render_widget(notice, area);
}

/// A selectable tool card; inactive cards show "Coming Soon".
pub fn draw_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    description: &str,
    selected: bool,
    active: bool,
    p: &Palette,
) {
    let call_to_action = if active {
        Span::styled("Start Now →", p.title())
    } else {
        Span::styled("Coming Soon", p.muted().add_modifier(Modifier::ITALIC))
    };
    let title_style = if active {
        Style::default().fg(p.text).add_modifier(Modifier::BOLD)
    } else {
        p.muted().add_modifier(Modifier::BOLD)
    };

    let text = Text::from(vec![
        Line::from(Span::styled(title.to_string(), title_style)),
        Line::from(""),
        Line::from(Span::styled(description.to_string(), p.muted())),
        Line::from(""),
        Line::from(call_to_action),
    ]);

    let card = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(p.block("", selected));
    f.render_widget(card, area);
}
