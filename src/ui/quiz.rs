use super::layout::centered_rect;
use super::theme::Palette;
use super::widgets::{draw_scrollable, heading, markdown_text, status_lines};
use crate::workflow::quiz::QuizModal;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn draw_quiz_modal(f: &mut Frame, quiz: &mut QuizModal, p: &Palette) {
    let area = centered_rect(80, 85, f.area());
    f.render_widget(Clear, area);

    let title = format!(" Quiz: {} ", quiz.topic.title);
    let block = p.block(&title, true).style(p.base());

    if quiz.loading || quiz.error.is_some() {
        let mut lines = vec![
            Line::from(Span::styled("Test your understanding of this key topic.", p.muted())),
            Line::from(""),
        ];
        lines.extend(status_lines(
            quiz.loading,
            "Generating questions...",
            quiz.error.as_deref(),
            p,
        ));
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
        return;
    }

    if quiz.show_results {
        let text = results_text(quiz, p);
        draw_scrollable(f, area, block, text, &mut quiz.scroll);
        return;
    }

    let Some(question) = quiz.current_question() else {
        f.render_widget(
            Paragraph::new("No questions were generated.").block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let progress = format!("Question {} of {}", quiz.current + 1, quiz.questions.len());
    f.render_widget(Paragraph::new(Span::styled(progress, p.muted())), chunks[0]);

    let mut text = Text::from(Line::from(""));
    text.extend(markdown_text(&question.question));
    text.push_line(Line::from(""));
    for (i, option) in question.options.iter().enumerate() {
        let label = OPTION_LABELS.get(i).copied().unwrap_or('•');
        let selected = quiz.selected == Some(i);
        let style = if selected {
            p.selected()
        } else {
            Style::default().fg(p.text)
        };
        text.push_line(Line::from(vec![
            Span::styled(if selected { "● " } else { "○ " }, Style::default().fg(p.accent)),
            Span::styled(format!("{}. {}", label, option), style),
        ]));
    }
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), chunks[1]);

    let next = if quiz.current + 1 == quiz.questions.len() {
        "Finish"
    } else {
        "Next"
    };
    let hint = if quiz.selected.is_some() {
        Span::styled(format!("Enter: {}", next), p.title())
    } else {
        Span::styled("Select an option (A-D or ↑/↓)", p.muted())
    };
    f.render_widget(Paragraph::new(hint), chunks[2]);
}

fn results_text(quiz: &QuizModal, p: &Palette) -> Text<'static> {
    let (score, total) = quiz.score();
    let mut text = Text::from(heading("Quiz Results", p));
    text.push_line(Line::from(vec![
        Span::raw("You scored "),
        Span::styled(score.to_string(), p.title()),
        Span::raw(" out of "),
        Span::styled(total.to_string(), p.title()),
    ]));

    for (i, answer) in quiz.answers.iter().enumerate() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            format!("{}. {}", i + 1, answer.question),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let (mark, colour) = if answer.is_correct {
            ("✓", p.success)
        } else {
            ("✗", p.danger)
        };
        text.push_line(Line::from(Span::styled(
            format!("{} Your answer: {}", mark, answer.selected_answer),
            Style::default().fg(colour),
        )));
        if !answer.is_correct {
            text.push_line(Line::from(Span::styled(
                format!("  Correct answer: {}", answer.correct_answer),
                Style::default().fg(p.success),
            )));
        }
        text.push_line(Line::from(Span::styled(
            "Explanation:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.extend(markdown_text(&answer.explanation));
    }

    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled("Enter or Esc: Close", p.muted())));
    text
}
