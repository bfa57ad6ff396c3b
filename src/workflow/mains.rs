use super::Action;
use crate::db::notes::NoteSessionSummary;
use crate::models::Screen;
use crossterm::event::{KeyCode, KeyEvent};

/// A hub tool as (title, description, active).
pub const MAINS_TOOLS: [(&str, &str, bool); 2] = [
    (
        "Mains Note Making Tool",
        "A timed, AI-scaffolded environment to brainstorm and structure your notes on any topic.",
        true,
    ),
    (
        "Mains Evaluation Tool",
        "Get AI-driven feedback on your written answers by uploading them directly.",
        false,
    ),
];

/// Tool cards first, then saved note sessions, all in one selection list.
#[derive(Debug, Default)]
pub struct MainsHub {
    pub selected: usize,
    pub saved: Vec<NoteSessionSummary>,
}

impl MainsHub {
    pub fn set_saved(&mut self, saved: Vec<NoteSessionSummary>) {
        self.saved = saved;
        self.selected = self.selected.min(self.item_count() - 1);
    }

    pub fn item_count(&self) -> usize {
        MAINS_TOOLS.len() + self.saved.len()
    }

    pub fn selected_saved(&self) -> Option<&NoteSessionSummary> {
        self.selected
            .checked_sub(MAINS_TOOLS.len())
            .and_then(|i| self.saved.get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.item_count() - 1);
                Action::None
            }
            KeyCode::Enter => {
                if let Some(saved) = self.selected_saved() {
                    return Action::OpenSavedSession(saved.id);
                }
                match MAINS_TOOLS.get(self.selected) {
                    Some((_, _, true)) => Action::Navigate(Screen::NoteMaker),
                    _ => Action::None,
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_saved() {
                Some(saved) => Action::DeleteSavedSession(saved.id),
                None => Action::None,
            },
            KeyCode::Esc => Action::Navigate(Screen::Welcome),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::tests::key;

    fn summary(id: i64) -> NoteSessionSummary {
        NoteSessionSummary {
            id,
            topic: format!("Topic {}", id),
            created_at: 1_700_000_000 + id,
        }
    }

    #[test]
    fn test_note_maker_is_active() {
        let mut hub = MainsHub::default();
        assert_eq!(hub.handle_key(key(KeyCode::Enter)), Action::Navigate(Screen::NoteMaker));
    }

    #[test]
    fn test_evaluation_tool_is_inactive() {
        let mut hub = MainsHub::default();
        hub.handle_key(key(KeyCode::Down));
        assert_eq!(hub.selected, 1);
        assert_eq!(hub.handle_key(key(KeyCode::Enter)), Action::None);
        hub.handle_key(key(KeyCode::Down));
        assert_eq!(hub.selected, 1);
    }

    #[test]
    fn test_saved_sessions_follow_tools() {
        let mut hub = MainsHub::default();
        hub.set_saved(vec![summary(7), summary(3)]);
        for _ in 0..3 {
            hub.handle_key(key(KeyCode::Down));
        }
        assert_eq!(hub.handle_key(key(KeyCode::Enter)), Action::OpenSavedSession(3));
        assert_eq!(hub.handle_key(key(KeyCode::Char('d'))), Action::DeleteSavedSession(3));

        hub.set_saved(vec![summary(7)]);
        assert_eq!(hub.selected, 2);
        assert_eq!(hub.handle_key(key(KeyCode::Esc)), Action::Navigate(Screen::Welcome));
    }

    #[test]
    fn test_delete_ignored_on_tools() {
        let mut hub = MainsHub::default();
        assert_eq!(hub.handle_key(key(KeyCode::Char('d'))), Action::None);
    }
}
