use lazy_static::lazy_static;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static! {
    static ref HEADING_RE: Regex = Regex::new(r"^(#{1,6})\s+(.*)$").unwrap();
    static ref NUMBERED_RE: Regex = Regex::new(r"^(\d+)[.)]\s+(.*)$").unwrap();
    static ref RULE_RE: Regex = Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap();
    // **bold**, *italic*, `code`, [text](url)
    static ref INLINE_RE: Regex =
        Regex::new(r"\*\*(.+?)\*\*|\*([^*]+?)\*|`([^`]+)`|\[([^\]]+)\]\(([^)\s]+)\)").unwrap();
}

/// Render markdown content to Vec<Line> for ratatui.
/// Supports headings, **bold**, *italic*, `code`, [links](url), bullet and
/// numbered lists (nested by indentation), > quotes, --- rules and
/// | pipe | tables |.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut result: Vec<Line<'static>> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_table_row(line) && i + 1 < lines.len() && is_table_separator(lines[i + 1]) {
            let mut table_rows: Vec<Vec<String>> = vec![parse_table_row(line)];
            i += 2;

            while i < lines.len() && is_table_row(lines[i]) && !is_table_separator(lines[i]) {
                table_rows.push(parse_table_row(lines[i]));
                i += 1;
            }

            render_table(&table_rows, &mut result);
            continue;
        }

        i += 1;
        let trimmed = line.trim();
        let indent = "  ".repeat(leading_spaces(line) / 2);

        if trimmed.is_empty() {
            result.push(Line::from(""));
        } else if let Some(caps) = HEADING_RE.captures(trimmed) {
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if caps[1].len() <= 2 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            result.push(Line::from(Span::styled(caps[2].to_string(), style)));
        } else if RULE_RE.is_match(trimmed) {
            result.push(Line::from(Span::styled(
                "─".repeat(24),
                Style::default().add_modifier(Modifier::DIM),
            )));
        } else if let Some(quote) = trimmed.strip_prefix('>') {
            let mut spans = vec![Span::styled("│ ", Style::default().add_modifier(Modifier::DIM))];
            spans.extend(
                parse_inline(quote.trim_start())
                    .into_iter()
                    .map(|s| s.patch_style(Style::default().add_modifier(Modifier::ITALIC))),
            );
            result.push(Line::from(spans));
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
            .or_else(|| trimmed.strip_prefix("+ "))
        {
            let mut spans = vec![Span::from(format!("{}  • ", indent))];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
        } else if let Some(caps) = NUMBERED_RE.captures(trimmed) {
            let mut spans = vec![Span::from(format!("{}  {}. ", indent, &caps[1]))];
            spans.extend(parse_inline(&caps[2]));
            result.push(Line::from(spans));
        } else {
            result.push(Line::from(parse_inline(trimmed)));
        }
    }

    result
}

fn leading_spaces(line: &str) -> usize {
    line.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Parse inline markdown: **bold**, *italic*, `code`, [text](url)
fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        if m.start() > last {
            spans.push(Span::from(text[last..m.start()].to_string()));
        }

        if let Some(bold) = caps.get(1) {
            spans.push(Span::styled(
                bold.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else if let Some(italic) = caps.get(2) {
            spans.push(Span::styled(
                italic.as_str().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        } else if let Some(code) = caps.get(3) {
            spans.push(Span::styled(
                code.as_str().to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        } else if let (Some(label), Some(url)) = (caps.get(4), caps.get(5)) {
            spans.push(Span::styled(
                label.as_str().to_string(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ));
            spans.push(Span::styled(
                format!(" <{}>", url.as_str()),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        last = m.end();
    }

    if last < text.len() || spans.is_empty() {
        spans.push(Span::from(text[last..].to_string()));
    }

    spans
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') || (trimmed.contains('|') && trimmed.matches('|').count() >= 2)
}

fn is_table_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('|')
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| c == '|' || c == '-' || c == ':' || c == ' ')
}

fn parse_table_row(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Each data row becomes a block of "Header: Value" lines so it wraps naturally.
fn render_table(rows: &[Vec<String>], output: &mut Vec<Line<'static>>) {
    let Some((headers, data_rows)) = rows.split_first() else {
        return;
    };

    if data_rows.is_empty() {
        output.push(Line::from(Span::styled(
            headers.join(" │ "),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        return;
    }

    for (row_idx, row) in data_rows.iter().enumerate() {
        if row_idx > 0 {
            output.push(Line::from(""));
        }
        for (j, cell) in row.iter().enumerate() {
            let header = headers.get(j).map(|s| s.as_str()).unwrap_or("?");
            let mut spans = vec![Span::styled(
                format!("{}: ", header),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            spans.extend(parse_inline(cell));
            output.push(Line::from(spans));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_markdown_plain_text() {
        let result = render_markdown("Hello world");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_string(), "Hello world");
    }

    #[test]
    fn test_headings_strip_hashes() {
        let result = render_markdown("## Introduction\n#### Minor");
        assert_eq!(result[0].to_string(), "Introduction");
        assert_eq!(result[1].to_string(), "Minor");
        assert!(result[0].spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!result[1].spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_lists() {
        let result = render_markdown("- one\n  - nested\n2. two");
        assert_eq!(result[0].to_string(), "  • one");
        assert_eq!(result[1].to_string(), "    • nested");
        assert_eq!(result[2].to_string(), "  2. two");
    }

    #[test]
    fn test_inline_styles() {
        let result = render_markdown("A **bold** and *italic* with `code`");
        let spans = &result[0].spans;
        assert_eq!(spans[1].content, "bold");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[3].content, "italic");
        assert!(spans[3].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(spans[5].content, "code");
    }

    #[test]
    fn test_links_keep_url() {
        let result = render_markdown("[PIB release](https://pib.gov.in/x)");
        assert_eq!(result[0].to_string(), "PIB release <https://pib.gov.in/x>");
    }

    #[test]
    fn test_horizontal_rule_and_quote() {
        let result = render_markdown("above\n\n---\n\n> quoted");
        let text = joined(&result);
        assert!(text.contains('─'));
        assert!(text.contains("│ quoted"));
        assert!(!text.contains("---"));
    }

    #[test]
    fn test_table_detection() {
        assert!(is_table_row("| A | B |"));
        assert!(!is_table_row("no pipes here"));
        assert!(is_table_separator("|---|---|"));
        assert!(is_table_separator("| --- | :---: |"));
        assert!(!is_table_separator("| A | B |"));
    }

    #[test]
    fn test_render_markdown_with_table() {
        let result = render_markdown("Before\n\n| Scheme | Year |\n|---|---|\n| PM-KUSUM | 2019 |\n\nAfter");
        let text = joined(&result);
        assert!(text.contains("Before"));
        assert!(text.contains("Scheme: PM-KUSUM"));
        assert!(text.contains("Year: 2019"));
        assert!(text.contains("After"));
    }

    #[test]
    fn test_unclosed_markers_left_alone() {
        let result = render_markdown("2 * 3 = 6");
        assert_eq!(result[0].to_string(), "2 * 3 = 6");
    }
}
