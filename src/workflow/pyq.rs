use super::{unexpected_output, AiLink};
use crate::models::{AiOutput, AiRequest, AiResponse, PyqAnalysis, RequestId};
use crate::utils::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const BLANK_QUESTION_ERROR: &str = "Please enter a question to analyze.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyqFocus {
    Question,
    Answer,
}

pub struct PyqState {
    pub question: TextInput,
    pub answer: TextInput,
    pub focus: PyqFocus,
    pub loading: bool,
    pub error: Option<String>,
    pub analysis: Option<PyqAnalysis>,
    pub scroll: u16,
    pending: Option<RequestId>,
}

impl PyqState {
    pub fn new() -> Self {
        Self {
            question: TextInput::multi_line(),
            answer: TextInput::single_line(),
            focus: PyqFocus::Question,
            loading: false,
            error: None,
            analysis: None,
            scroll: 0,
            pending: None,
        }
    }

    pub fn analyze(&mut self, ai: &mut AiLink) {
        if self.loading {
            return;
        }
        if self.question.is_blank() {
            self.error = Some(BLANK_QUESTION_ERROR.to_string());
            return;
        }

        self.error = None;
        self.analysis = None;
        self.scroll = 0;

        let user_answer = (!self.answer.is_blank()).then(|| self.answer.value().trim().to_string());
        let request = AiRequest::AnalyzePyq {
            question: self.question.value().trim().to_string(),
            user_answer,
        };
        match ai.send(request) {
            Ok(id) => {
                self.pending = Some(id);
                self.loading = true;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Returns `false` when the user leaves the tool.
    pub fn handle_key(&mut self, key: KeyEvent, ai: &mut AiLink) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.analyze(ai);
            }
            return true;
        }

        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    PyqFocus::Question => PyqFocus::Answer,
                    PyqFocus::Answer => PyqFocus::Question,
                };
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(5),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(5),
            _ => {
                let input = match self.focus {
                    PyqFocus::Question => &mut self.question,
                    PyqFocus::Answer => &mut self.answer,
                };
                input.handle_key(key);
            }
        }
        true
    }

    pub fn apply_response(&mut self, response: AiResponse) -> bool {
        if self.pending != Some(response.id) {
            return false;
        }
        self.pending = None;
        self.loading = false;

        match response.result {
            Ok(AiOutput::Pyq(analysis)) => self.analysis = Some(analysis),
            Ok(other) => self.error = Some(unexpected_output(&other)),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }
}

impl Default for PyqState {
    fn default() -> Self {
        Self::new()
    }
}
