pub mod input;
pub mod markdown;

pub use input::TextInput;
pub use markdown::render_markdown;

use ratatui::text::Text;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One visual row of wrapped text. `start`/`end` are char indices into the
/// source, `end` exclusive and never covering the newline itself.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Hard-wraps `text` at `max_width` display columns, breaking on explicit
/// newlines too. Text inputs are drawn from these rows so the cursor maths
/// below matches what is on screen exactly.
pub fn wrap_lines(text: &str, max_width: usize) -> Vec<WrappedLine> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut start = 0;
    let mut count = 0;

    for (idx, ch) in text.chars().enumerate() {
        count = idx + 1;
        if ch == '\n' {
            lines.push(WrappedLine {
                text: std::mem::take(&mut current),
                start,
                end: idx,
            });
            current_width = 0;
            start = idx + 1;
            continue;
        }

        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > max_width && current_width > 0 {
            lines.push(WrappedLine {
                text: std::mem::take(&mut current),
                start,
                end: idx,
            });
            current_width = 0;
            start = idx;
        }
        current.push(ch);
        current_width += char_width;
    }

    lines.push(WrappedLine {
        text: current,
        start,
        end: count,
    });
    lines
}

/// (row, column) of a char-indexed cursor inside `wrap_lines(text, max_width)`.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    let lines = wrap_lines(text, max_width);
    let cursor_index = cursor_index.min(text.chars().count());

    let row = lines
        .iter()
        .rposition(|l| l.start <= cursor_index)
        .unwrap_or(0);
    let line = &lines[row];
    let col = line
        .text
        .chars()
        .take(cursor_index - line.start)
        .map(|c| c.width().unwrap_or(0))
        .sum();

    (row, col)
}

/// Rows a `Text` needs when word-wrapped at `width`, the way a wrapping
/// `Paragraph` lays it out: words move to the next row whole, and a word
/// wider than a row is broken across rows.
pub fn estimate_text_height(text: &Text, width: usize) -> usize {
    let width = width.max(1);
    text.lines
        .iter()
        .map(|line| {
            let content: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            word_wrapped_rows(&content, width)
        })
        .sum()
}

fn word_wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut col = 0;
    for word in line.split_inclusive(' ') {
        let visible = word.trim_end_matches(' ').width();
        let spaces = word.width() - visible;
        if col > 0 && col + visible > width {
            rows += 1;
            col = 0;
        }
        col += visible;
        while col > width {
            rows += 1;
            col -= width;
        }
        col = (col + spaces).min(width);
    }
    rows
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height
        .saturating_sub(visible_height)
        .min(u16::MAX as usize) as u16
}

/// Keeps `cursor_row` inside a window of `visible` rows starting at `scroll`.
pub fn follow_cursor(scroll: u16, cursor_row: usize, visible: usize) -> u16 {
    let visible = visible.max(1);
    let mut scroll = scroll as usize;
    if cursor_row < scroll {
        scroll = cursor_row;
    } else if cursor_row >= scroll + visible {
        scroll = cursor_row + 1 - visible;
    }
    scroll.min(u16::MAX as usize) as u16
}

/// `MM:SS`, minutes not capped at 59.
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::{Line, Span};

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.chars().count(), 20);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let result = truncate_string("संविधान की प्रस्तावना", 8);
        assert_eq!(result.chars().count(), 8);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_wrap_lines_empty_text() {
        let lines = wrap_lines("", 10);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "");
    }

    #[test]
    fn test_wrap_lines_explicit_newlines() {
        let lines = wrap_lines("Line 1\nLine 2\n", 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "Line 1");
        assert_eq!(lines[1].text, "Line 2");
        assert_eq!(lines[2].text, "");
        assert_eq!(lines[1].start, 7);
    }

    #[test]
    fn test_wrap_lines_hard_wrap() {
        let lines = wrap_lines("0123456789AB", 5);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["01234", "56789", "AB"]);
    }

    #[test]
    fn test_cursor_empty_text() {
        assert_eq!(calculate_wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_single_line() {
        assert_eq!(calculate_wrapped_cursor_position("Hello", 3, 10), (0, 3));
    }

    #[test]
    fn test_cursor_wrap_to_second_line() {
        let text = "This is a long line that should wrap";
        assert_eq!(calculate_wrapped_cursor_position(text, 15, 10), (1, 5));
    }

    #[test]
    fn test_cursor_multiple_wraps() {
        let text = "This is a very long text that will definitely wrap multiple times";
        assert_eq!(calculate_wrapped_cursor_position(text, 25, 10), (2, 5));
    }

    #[test]
    fn test_cursor_beyond_text_clamped() {
        assert_eq!(calculate_wrapped_cursor_position("Hi", 10, 10), (0, 2));
    }

    #[test]
    fn test_cursor_exact_wrap_boundary() {
        assert_eq!(calculate_wrapped_cursor_position("0123456789", 10, 10), (0, 10));
        assert_eq!(calculate_wrapped_cursor_position("0123456789A", 10, 10), (1, 0));
        assert_eq!(calculate_wrapped_cursor_position("0123456789A", 11, 10), (1, 1));
    }

    #[test]
    fn test_cursor_with_newlines() {
        let text = "Line 1\nLine 2";
        assert_eq!(calculate_wrapped_cursor_position(text, 6, 20), (0, 6));
        assert_eq!(calculate_wrapped_cursor_position(text, 8, 20), (1, 1));
    }

    #[test]
    fn test_cursor_after_trailing_newline() {
        assert_eq!(calculate_wrapped_cursor_position("abc\n", 4, 20), (1, 0));
    }

    #[test]
    fn test_estimate_text_height() {
        let text = Text::from(vec![
            Line::from("0123456789"),
            Line::from(""),
            Line::from("0123"),
        ]);
        assert_eq!(estimate_text_height(&text, 5), 4);
    }

    #[test]
    fn test_estimate_text_height_moves_words_whole() {
        let text = Text::from(Line::from("aaaaaaa bbbbbbb ccc"));
        assert_eq!(estimate_text_height(&text, 10), 3);

        let styled = Text::from(Line::from(vec![
            Span::raw("Use "),
            Span::raw("data and examples"),
        ]));
        assert_eq!(estimate_text_height(&styled, 8), 3);
    }

    #[test]
    fn test_calculate_max_scroll() {
        assert_eq!(calculate_max_scroll(10, 20), 0);
        assert_eq!(calculate_max_scroll(30, 20), 10);
    }

    #[test]
    fn test_follow_cursor() {
        assert_eq!(follow_cursor(0, 2, 5), 0);
        assert_eq!(follow_cursor(0, 7, 5), 3);
        assert_eq!(follow_cursor(4, 1, 5), 1);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(900), "15:00");
        assert_eq!(format_countdown(65), "01:05");
        assert_eq!(format_countdown(0), "00:00");
    }
}
