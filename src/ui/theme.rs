use crate::models::Theme;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub extra: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                bg: Color::Rgb(248, 250, 252),
                text: Color::Rgb(30, 41, 59),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(203, 213, 225),
                accent: Color::Rgb(37, 99, 235),
                success: Color::Rgb(22, 163, 74),
                danger: Color::Rgb(220, 38, 38),
                warning: Color::Rgb(217, 119, 6),
                extra: Color::Rgb(147, 51, 234),
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(15, 23, 42),
                text: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                border: Color::Rgb(71, 85, 105),
                accent: Color::Rgb(96, 165, 250),
                success: Color::Rgb(74, 222, 128),
                danger: Color::Rgb(248, 113, 113),
                warning: Color::Rgb(251, 191, 36),
                extra: Color::Rgb(192, 132, 252),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn block<'a>(&self, title: &'a str, focused: bool) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { self.accent } else { self.border }))
            .title(title)
            .title_style(if focused { self.title() } else { Style::default().fg(self.text) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_eq!(light.base().bg, Some(light.bg));
        assert_eq!(dark.selected().fg, Some(dark.bg));
    }
}
