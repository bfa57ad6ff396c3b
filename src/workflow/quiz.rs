use super::{unexpected_output, AiLink};
use crate::ai::AiError;
use crate::models::{AiOutput, AiRequest, AnalysisTopic, QuizQuestion, RequestId, UserAnswer};
use crossterm::event::{KeyCode, KeyEvent};

/// "Assess My Knowledge" modal for one current-affairs topic.
#[derive(Debug, Clone)]
pub struct QuizModal {
    pub topic: AnalysisTopic,
    pub questions: Vec<QuizQuestion>,
    pub current: usize,
    pub selected: Option<usize>,
    pub answers: Vec<UserAnswer>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_results: bool,
    pub scroll: u16,
    pending: Option<RequestId>,
}

impl QuizModal {
    /// Opens the modal in its loading state and requests the questions.
    pub fn open(topic: AnalysisTopic, ai: &mut AiLink) -> Self {
        let mut modal = Self {
            topic: topic.clone(),
            questions: Vec::new(),
            current: 0,
            selected: None,
            answers: Vec::new(),
            loading: true,
            error: None,
            show_results: false,
            scroll: 0,
            pending: None,
        };

        match ai.send(AiRequest::GenerateQuiz { topic }) {
            Ok(id) => modal.pending = Some(id),
            Err(e) => {
                modal.loading = false;
                modal.error = Some(e.to_string());
            }
        }
        modal
    }

    pub fn waiting_for(&self, id: RequestId) -> bool {
        self.pending == Some(id)
    }

    pub fn apply(&mut self, result: Result<AiOutput, AiError>) {
        self.pending = None;
        self.loading = false;
        match result {
            Ok(AiOutput::Quiz(questions)) => {
                tracing::info!(count = questions.len(), topic = %self.topic.title, "Quiz ready");
                self.questions = questions;
            }
            Ok(other) => self.error = Some(unexpected_output(&other)),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn select(&mut self, option: usize) {
        if let Some(q) = self.current_question()
            && option < q.options.len()
        {
            self.selected = Some(option);
        }
    }

    /// Records the selected answer and advances. Does nothing without a selection.
    pub fn next(&mut self) {
        let Some(choice) = self.selected else {
            return;
        };
        let Some(q) = self.current_question().cloned() else {
            return;
        };

        let selected_answer = q.options[choice].clone();
        self.answers.push(UserAnswer {
            question: q.question,
            is_correct: selected_answer == q.correct_answer,
            selected_answer,
            correct_answer: q.correct_answer,
            explanation: q.explanation,
        });
        self.selected = None;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.show_results = true;
            self.scroll = 0;
        }
    }

    /// (correct answers, total questions)
    pub fn score(&self) -> (usize, usize) {
        let correct = self.answers.iter().filter(|a| a.is_correct).count();
        (correct, self.questions.len())
    }

    /// Returns `false` when the modal should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Enter if self.show_results || self.error.is_some() => return false,
            _ => {}
        }

        if self.loading || self.error.is_some() {
            return true;
        }

        if self.show_results {
            match key.code {
                KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
                KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
                KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
                KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
                _ => {}
            }
            return true;
        }

        let option_count = self.current_question().map(|q| q.options.len()).unwrap_or(0);
        match key.code {
            KeyCode::Up => {
                let idx = self.selected.map(|s| s.saturating_sub(1)).unwrap_or(0);
                self.select(idx);
            }
            KeyCode::Down => {
                let idx = self
                    .selected
                    .map(|s| (s + 1).min(option_count.saturating_sub(1)))
                    .unwrap_or(0);
                self.select(idx);
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.select(c as usize - '1' as usize);
            }
            KeyCode::Char(c @ 'a'..='d') => {
                self.select(c as usize - 'a' as usize);
            }
            KeyCode::Enter => self.next(),
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::tests::{key, test_link};

    fn topic() -> AnalysisTopic {
        AnalysisTopic {
            title: "Green Credit Programme".to_string(),
            summary: "Market-based mechanism notified under the EPA, 1986.".to_string(),
        }
    }

    fn question(text: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: correct.to_string(),
            explanation: format!("{} is right", correct),
        }
    }

    fn ready_modal() -> QuizModal {
        let (mut link, rx) = test_link();
        let mut modal = QuizModal::open(topic(), &mut link);
        let envelope = rx.try_recv().unwrap();
        assert!(modal.waiting_for(envelope.id));
        modal.apply(Ok(AiOutput::Quiz(vec![question("Q1", "B"), question("Q2", "D")])));
        modal
    }

    #[test]
    fn test_open_starts_loading() {
        let (mut link, rx) = test_link();
        let modal = QuizModal::open(topic(), &mut link);
        assert!(modal.loading);
        assert!(modal.questions.is_empty());
        match rx.try_recv().unwrap().request {
            AiRequest::GenerateQuiz { topic: t } => assert_eq!(t.title, "Green Credit Programme"),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_next_requires_selection() {
        let mut modal = ready_modal();
        modal.handle_key(key(KeyCode::Enter));
        assert_eq!(modal.current, 0);
        assert!(modal.answers.is_empty());
    }

    #[test]
    fn test_full_quiz_scores() {
        let mut modal = ready_modal();
        modal.handle_key(key(KeyCode::Char('b')));
        modal.handle_key(key(KeyCode::Enter));
        assert_eq!(modal.current, 1);
        assert_eq!(modal.selected, None);

        modal.handle_key(key(KeyCode::Char('1')));
        modal.handle_key(key(KeyCode::Enter));
        assert!(modal.show_results);
        assert_eq!(modal.score(), (1, 2));
        assert!(modal.answers[0].is_correct);
        assert!(!modal.answers[1].is_correct);
        assert_eq!(modal.answers[1].selected_answer, "A");
        assert_eq!(modal.answers[1].correct_answer, "D");

        assert!(!modal.handle_key(key(KeyCode::Enter)));
    }

    #[test]
    fn test_arrow_selection_is_clamped() {
        let mut modal = ready_modal();
        modal.handle_key(key(KeyCode::Down));
        assert_eq!(modal.selected, Some(0));
        for _ in 0..6 {
            modal.handle_key(key(KeyCode::Down));
        }
        assert_eq!(modal.selected, Some(3));
        modal.handle_key(key(KeyCode::Char('9')));
        assert_eq!(modal.selected, Some(3));
    }

    #[test]
    fn test_failure_sets_error() {
        let (mut link, _rx) = test_link();
        let mut modal = QuizModal::open(topic(), &mut link);
        modal.apply(Err(AiError::RateLimited));
        assert!(!modal.loading);
        assert_eq!(
            modal.error.as_deref(),
            Some("The request was blocked due to rate limits. Please wait a moment before trying again.")
        );
        assert!(!modal.handle_key(key(KeyCode::Esc)));
    }
}
