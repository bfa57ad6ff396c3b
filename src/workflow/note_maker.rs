use super::{unexpected_output, Action, AiLink};
use crate::db::notes::SavedNoteSession;
use crate::models::{AiOutput, AiRequest, AiResponse, EvaluationResult, NoteEntry, RequestId, Screen};
use crate::utils::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

pub const TIME_LIMITS: [u32; 3] = [15, 20, 25];
pub const BLANK_TOPIC_NOTICE: &str = "Please enter a topic.";
pub const TIME_UP_NOTICE: &str = "Time's up! Please proceed to evaluate your notes.";

pub struct SectionTemplate {
    pub title: &'static str,
    pub prompt: &'static str,
}

pub const SECTIONS: [SectionTemplate; 6] = [
    SectionTemplate {
        title: "Introduction",
        prompt: "Generate 2-3 compelling introduction hooks (quotes, data facts, or crisp definitions)",
    },
    SectionTemplate {
        title: "Relevant Data & Examples",
        prompt: "Provide relevant data from reputed sources, recent reports, or key example case studies",
    },
    SectionTemplate {
        title: "Body",
        prompt: "Brainstorm key points for the body. Include subheadings like \"Features\", \"Constitutional Provisions\", \"Pros & Cons\", and \"Challenges\"",
    },
    SectionTemplate {
        title: "Diagram Ideas",
        prompt: "Suggest 2-3 ideas for diagrams, flowcharts, or mind maps that can be used to visually represent key information",
    },
    SectionTemplate {
        title: "Steps Taken",
        prompt: "List the steps or initiatives taken by the government or other relevant bodies",
    },
    SectionTemplate {
        title: "Way Forward & Conclusion",
        prompt: "Suggest points for a balanced and futuristic way forward and a concluding summary",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Writing,
    Evaluating,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Topic,
    TimeLimit,
}

/// One note section: AI brainstorming ideas plus what the user wrote.
#[derive(Debug, Clone)]
pub struct NoteSection {
    pub title: String,
    pub prompt: String,
    pub ideas: Option<String>,
    pub loading: bool,
    pub input: TextInput,
    pending: Option<RequestId>,
}

impl NoteSection {
    fn new(title: &str, prompt: &str) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            ideas: None,
            loading: false,
            input: TextInput::multi_line(),
            pending: None,
        }
    }
}

fn fresh_sections() -> Vec<NoteSection> {
    SECTIONS
        .iter()
        .map(|t| NoteSection::new(t.title, t.prompt))
        .collect()
}

pub struct NoteMaker {
    pub stage: Stage,
    pub topic: TextInput,
    pub time_limit_index: usize,
    pub setup_focus: SetupFocus,
    pub time_left: u64,
    pub step: usize,
    pub sections: Vec<NoteSection>,
    pub error: Option<String>,
    pub evaluation: Option<EvaluationResult>,
    pub compiled_notes: String,
    pub show_final_notes: bool,
    /// Opened from a saved session; nothing is re-saved.
    pub read_only: bool,
    pub ideas_scroll: u16,
    pub results_scroll: u16,
    deadline: Option<Instant>,
    /// Time left while the countdown is paused for evaluation.
    paused: Option<Duration>,
    time_up_handled: bool,
    pending_evaluation: Option<RequestId>,
}

impl NoteMaker {
    pub fn new() -> Self {
        Self {
            stage: Stage::Setup,
            topic: TextInput::single_line(),
            time_limit_index: 0,
            setup_focus: SetupFocus::Topic,
            time_left: 0,
            step: 0,
            sections: fresh_sections(),
            error: None,
            evaluation: None,
            compiled_notes: String::new(),
            show_final_notes: false,
            read_only: false,
            ideas_scroll: 0,
            results_scroll: 0,
            deadline: None,
            paused: None,
            time_up_handled: false,
            pending_evaluation: None,
        }
    }

    /// Reopens a saved session on its final-notes view.
    pub fn from_saved(saved: SavedNoteSession) -> Self {
        let mut maker = Self::new();
        maker.stage = Stage::Results;
        maker.topic.set(&saved.topic);
        maker.time_limit_index = TIME_LIMITS
            .iter()
            .position(|m| *m == saved.time_limit_minutes)
            .unwrap_or(0);
        maker.sections = saved
            .sections
            .iter()
            .map(|entry| {
                let prompt = SECTIONS
                    .iter()
                    .find(|t| t.title == entry.title)
                    .map(|t| t.prompt)
                    .unwrap_or_default();
                let mut section = NoteSection::new(&entry.title, prompt);
                section.input.set(&entry.notes);
                section
            })
            .collect();
        maker.compiled_notes = saved.compiled_notes;
        maker.evaluation = Some(saved.evaluation);
        maker.show_final_notes = true;
        maker.read_only = true;
        maker
    }

    pub fn time_limit(&self) -> u32 {
        TIME_LIMITS[self.time_limit_index % TIME_LIMITS.len()]
    }

    /// (current step, total steps), 1-based.
    pub fn progress(&self) -> (usize, usize) {
        (self.step + 1, self.sections.len())
    }

    pub fn current_section(&self) -> Option<&NoteSection> {
        self.sections.get(self.step)
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.sections.len()
    }

    pub fn entries(&self) -> Vec<NoteEntry> {
        self.sections
            .iter()
            .map(|s| NoteEntry {
                title: s.title.clone(),
                notes: s.input.value().to_string(),
            })
            .collect()
    }

    /// Every section, written or not, as `## <title>\n\n<notes>`.
    pub fn compile_notes(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("## {}\n\n{}", s.title, s.input.value()))
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")
    }

    pub fn start(&mut self, now: Instant) -> Action {
        if self.topic.is_blank() {
            return Action::Notify(BLANK_TOPIC_NOTICE.to_string());
        }

        let seconds = u64::from(self.time_limit()) * 60;
        tracing::info!(topic = %self.topic.value().trim(), minutes = self.time_limit(), "Note session started");
        self.time_left = seconds;
        self.deadline = Some(now + Duration::from_secs(seconds));
        self.paused = None;
        self.time_up_handled = false;
        self.stage = Stage::Writing;
        self.step = 0;
        self.sections = fresh_sections();
        self.evaluation = None;
        self.error = None;
        self.show_final_notes = false;
        self.ideas_scroll = 0;
        Action::None
    }

    pub fn generate_ideas(&mut self, ai: &mut AiLink) {
        let topic = self.topic.value().trim().to_string();
        let Some(section) = self.sections.get_mut(self.step) else {
            return;
        };
        if section.loading {
            return;
        }

        section.loading = true;
        section.ideas = None;
        self.error = None;
        self.ideas_scroll = 0;

        let request = AiRequest::GenerateScaffold {
            topic,
            prompt: section.prompt.clone(),
        };
        match ai.send(request) {
            Ok(id) => section.pending = Some(id),
            Err(e) => {
                section.loading = false;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn next_step(&mut self) {
        if !self.is_last_step() {
            self.step += 1;
            self.ideas_scroll = 0;
        }
    }

    pub fn previous_step(&mut self) {
        if self.step > 0 {
            self.step -= 1;
            self.ideas_scroll = 0;
        }
    }

    pub fn evaluate(&mut self, ai: &mut AiLink) {
        if self.stage != Stage::Writing {
            return;
        }
        self.stage = Stage::Evaluating;
        self.error = None;
        self.compiled_notes = self.compile_notes();
        self.pause_timer();

        let request = AiRequest::EvaluateNotes {
            topic: self.topic.value().trim().to_string(),
            notes: self.compiled_notes.clone(),
        };
        match ai.send(request) {
            Ok(id) => self.pending_evaluation = Some(id),
            Err(e) => {
                self.error = Some(e.to_string());
                self.stage = Stage::Writing;
            }
        }
    }

    /// Stops the countdown at the last observed `time_left`; the next
    /// `tick` in Writing resumes from there.
    fn pause_timer(&mut self) {
        if self.deadline.take().is_some() {
            self.paused = Some(Duration::from_secs(self.time_left));
        }
    }

    /// Leaves the writing stage for setup, keeping topic and time limit.
    pub fn cancel_session(&mut self) {
        tracing::info!(topic = %self.topic.value().trim(), "Note session cancelled");
        self.stage = Stage::Setup;
        self.deadline = None;
        self.paused = None;
        self.error = None;
    }

    /// Updates the countdown; on expiry evaluation starts once.
    pub fn tick(&mut self, now: Instant, ai: &mut AiLink) -> Action {
        if self.stage != Stage::Writing {
            return Action::None;
        }
        let deadline = match (self.deadline, self.paused.take()) {
            (Some(deadline), _) => deadline,
            (None, Some(remaining)) => {
                let deadline = now + remaining;
                self.deadline = Some(deadline);
                deadline
            }
            (None, None) => return Action::None,
        };

        let remaining = deadline.saturating_duration_since(now);
        self.time_left = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);

        if self.time_left == 0 && !self.time_up_handled {
            self.time_up_handled = true;
            tracing::info!("Note session timer expired");
            self.evaluate(ai);
            return Action::Notify(TIME_UP_NOTICE.to_string());
        }
        Action::None
    }

    pub fn handle_key(&mut self, key: KeyEvent, ai: &mut AiLink) -> Action {
        match self.stage {
            Stage::Setup => self.handle_setup_key(key),
            Stage::Writing => self.handle_writing_key(key, ai),
            Stage::Evaluating => match key.code {
                KeyCode::Esc => Action::Navigate(Screen::Mains),
                _ => Action::None,
            },
            Stage::Results => self.handle_results_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => return Action::Navigate(Screen::Mains),
            KeyCode::Enter => return self.start(Instant::now()),
            KeyCode::Tab | KeyCode::BackTab => {
                self.setup_focus = match self.setup_focus {
                    SetupFocus::Topic => SetupFocus::TimeLimit,
                    SetupFocus::TimeLimit => SetupFocus::Topic,
                };
            }
            _ => match self.setup_focus {
                SetupFocus::Topic => {
                    self.topic.handle_key(key);
                }
                SetupFocus::TimeLimit => match key.code {
                    KeyCode::Left | KeyCode::Up => {
                        self.time_limit_index = self.time_limit_index.saturating_sub(1);
                    }
                    KeyCode::Right | KeyCode::Down => {
                        self.time_limit_index = (self.time_limit_index + 1).min(TIME_LIMITS.len() - 1);
                    }
                    _ => {}
                },
            },
        }
        Action::None
    }

    fn handle_writing_key(&mut self, key: KeyEvent, ai: &mut AiLink) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('g') => self.generate_ideas(ai),
                KeyCode::Char('e') => self.evaluate(ai),
                _ => {}
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => self.cancel_session(),
            KeyCode::Tab if self.is_last_step() => self.evaluate(ai),
            KeyCode::Tab => self.next_step(),
            KeyCode::BackTab => self.previous_step(),
            KeyCode::PageUp => self.ideas_scroll = self.ideas_scroll.saturating_sub(5),
            KeyCode::PageDown => self.ideas_scroll = self.ideas_scroll.saturating_add(5),
            _ => {
                if let Some(section) = self.sections.get_mut(self.step) {
                    section.input.handle_key(key);
                }
            }
        }
        Action::None
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc if self.show_final_notes && !self.read_only => {
                self.show_final_notes = false;
                self.results_scroll = 0;
            }
            KeyCode::Esc => return Action::Navigate(Screen::Mains),
            KeyCode::Char('f') => {
                self.show_final_notes = !self.show_final_notes;
                self.results_scroll = 0;
            }
            KeyCode::Char('e') => return Action::ExportNotes,
            KeyCode::Up => self.results_scroll = self.results_scroll.saturating_sub(1),
            KeyCode::Down => self.results_scroll = self.results_scroll.saturating_add(1),
            KeyCode::PageUp => self.results_scroll = self.results_scroll.saturating_sub(10),
            KeyCode::PageDown => self.results_scroll = self.results_scroll.saturating_add(10),
            _ => {}
        }
        Action::None
    }

    pub fn apply_response(&mut self, response: AiResponse) -> Option<Action> {
        if self.pending_evaluation == Some(response.id) {
            self.pending_evaluation = None;
            return Some(match response.result {
                Ok(AiOutput::Evaluation(evaluation)) => {
                    tracing::info!("Notes evaluated");
                    self.evaluation = Some(evaluation);
                    self.stage = Stage::Results;
                    self.show_final_notes = false;
                    self.results_scroll = 0;
                    Action::SaveNoteSession
                }
                Ok(other) => {
                    self.error = Some(unexpected_output(&other));
                    self.stage = Stage::Writing;
                    Action::None
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    self.stage = Stage::Writing;
                    Action::None
                }
            });
        }

        let section = self
            .sections
            .iter_mut()
            .find(|s| s.pending == Some(response.id))?;
        section.pending = None;
        section.loading = false;
        match response.result {
            Ok(AiOutput::Scaffold(ideas)) => section.ideas = Some(ideas),
            Ok(other) => self.error = Some(unexpected_output(&other)),
            Err(e) => self.error = Some(e.to_string()),
        }
        Some(Action::None)
    }
}

impl Default for NoteMaker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiError;
    use crate::workflow::tests::{ctrl, evaluation, key, test_link, type_text};

    fn writing(now: Instant) -> NoteMaker {
        let mut maker = NoteMaker::new();
        maker.topic.set("Judicial overreach");
        assert_eq!(maker.start(now), Action::None);
        maker
    }

    #[test]
    fn test_setup_defaults() {
        let maker = NoteMaker::new();
        assert_eq!(maker.stage, Stage::Setup);
        assert_eq!(maker.time_limit(), 15);
        assert_eq!(maker.sections.len(), 6);
        assert_eq!(maker.sections[5].title, "Way Forward & Conclusion");
    }

    #[test]
    fn test_blank_topic_rejected() {
        let mut maker = NoteMaker::new();
        maker.topic.set("   ");
        assert_eq!(
            maker.start(Instant::now()),
            Action::Notify(BLANK_TOPIC_NOTICE.to_string())
        );
        assert_eq!(maker.stage, Stage::Setup);
    }

    #[test]
    fn test_setup_keys_pick_time_limit() {
        let mut maker = NoteMaker::new();
        let (mut link, _rx) = test_link();
        type_text("GST", |k| {
            maker.handle_key(k, &mut link);
        });
        maker.handle_key(key(KeyCode::Tab), &mut link);
        maker.handle_key(key(KeyCode::Right), &mut link);
        maker.handle_key(key(KeyCode::Right), &mut link);
        maker.handle_key(key(KeyCode::Right), &mut link);
        assert_eq!(maker.time_limit(), 25);
        assert_eq!(maker.topic.value(), "GST");

        maker.handle_key(key(KeyCode::Enter), &mut link);
        assert_eq!(maker.stage, Stage::Writing);
        assert_eq!(maker.time_left, 25 * 60);
    }

    #[test]
    fn test_countdown() {
        let t0 = Instant::now();
        let mut maker = writing(t0);
        let (mut link, _rx) = test_link();
        assert_eq!(maker.time_left, 900);

        maker.tick(t0 + Duration::from_millis(10_500), &mut link);
        assert_eq!(maker.time_left, 890);
        assert_eq!(maker.stage, Stage::Writing);
    }

    #[test]
    fn test_steps_and_progress() {
        let mut maker = writing(Instant::now());
        let (mut link, rx) = test_link();
        assert_eq!(maker.progress(), (1, 6));

        maker.handle_key(key(KeyCode::BackTab), &mut link);
        assert_eq!(maker.step, 0);
        for _ in 0..5 {
            maker.handle_key(key(KeyCode::Tab), &mut link);
        }
        assert_eq!(maker.progress(), (6, 6));
        assert!(maker.is_last_step());
        assert!(rx.try_recv().is_err());

        maker.handle_key(key(KeyCode::Tab), &mut link);
        assert_eq!(maker.stage, Stage::Evaluating);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_generate_ideas_for_current_section() {
        let mut maker = writing(Instant::now());
        let (mut link, rx) = test_link();
        maker.handle_key(key(KeyCode::Tab), &mut link);
        maker.handle_key(ctrl('g'), &mut link);

        assert!(maker.sections[1].loading);
        let envelope = rx.try_recv().unwrap();
        assert_eq!(
            envelope.request,
            AiRequest::GenerateScaffold {
                topic: "Judicial overreach".to_string(),
                prompt: SECTIONS[1].prompt.to_string(),
            }
        );

        maker.handle_key(ctrl('g'), &mut link);
        assert!(rx.try_recv().is_err());

        let action = maker.apply_response(AiResponse {
            id: envelope.id,
            result: Ok(AiOutput::Scaffold("- NJAC verdict".to_string())),
        });
        assert_eq!(action, Some(Action::None));
        assert!(!maker.sections[1].loading);
        assert_eq!(maker.sections[1].ideas.as_deref(), Some("- NJAC verdict"));
    }

    #[test]
    fn test_generate_failure_keeps_ideas_empty() {
        let mut maker = writing(Instant::now());
        let (mut link, rx) = test_link();
        maker.sections[0].ideas = Some("old".to_string());
        maker.generate_ideas(&mut link);
        assert!(maker.sections[0].ideas.is_none());

        let id = rx.try_recv().unwrap().id;
        maker.apply_response(AiResponse {
            id,
            result: Err(AiError::RateLimited),
        });
        assert!(!maker.sections[0].loading);
        assert!(maker.error.is_some());
    }

    #[test]
    fn test_compiled_notes_format() {
        let mut maker = writing(Instant::now());
        maker.sections[0].input.set("Hook");
        maker.sections[2].input.set("Point A");
        let compiled = maker.compile_notes();

        assert!(compiled.starts_with("## Introduction\n\nHook\n\n---\n\n## Relevant Data & Examples\n\n\n\n---\n\n"));
        assert!(compiled.contains("## Body\n\nPoint A"));
        assert!(compiled.ends_with("## Way Forward & Conclusion\n\n"));
        assert_eq!(compiled.matches("\n\n---\n\n").count(), 5);
    }

    #[test]
    fn test_evaluation_success_and_failure() {
        let mut maker = writing(Instant::now());
        let (mut link, rx) = test_link();
        maker.handle_key(key(KeyCode::Char('x')), &mut link);
        maker.handle_key(ctrl('e'), &mut link);
        assert_eq!(maker.stage, Stage::Evaluating);

        let envelope = rx.try_recv().unwrap();
        match &envelope.request {
            AiRequest::EvaluateNotes { topic, notes } => {
                assert_eq!(topic, "Judicial overreach");
                assert!(notes.starts_with("## Introduction\n\nx"));
            }
            other => panic!("unexpected request {:?}", other),
        }

        let action = maker.apply_response(AiResponse {
            id: envelope.id,
            result: Err(AiError::Api("boom".to_string())),
        });
        assert_eq!(action, Some(Action::None));
        assert_eq!(maker.stage, Stage::Writing);
        assert_eq!(maker.error.as_deref(), Some("boom"));

        maker.evaluate(&mut link);
        let envelope = rx.try_recv().unwrap();
        let action = maker.apply_response(AiResponse {
            id: envelope.id,
            result: Ok(AiOutput::Evaluation(evaluation())),
        });
        assert_eq!(action, Some(Action::SaveNoteSession));
        assert_eq!(maker.stage, Stage::Results);
        assert!(maker.error.is_none());
    }

    #[test]
    fn test_timer_expiry_evaluates_once() {
        let t0 = Instant::now();
        let mut maker = writing(t0);
        let (mut link, rx) = test_link();
        let late = t0 + Duration::from_secs(15 * 60 + 1);

        assert_eq!(
            maker.tick(late, &mut link),
            Action::Notify(TIME_UP_NOTICE.to_string())
        );
        assert_eq!(maker.time_left, 0);
        assert_eq!(maker.stage, Stage::Evaluating);
        let envelope = rx.try_recv().unwrap();

        maker.apply_response(AiResponse {
            id: envelope.id,
            result: Err(AiError::RateLimited),
        });
        assert_eq!(maker.stage, Stage::Writing);
        assert_eq!(maker.tick(late, &mut link), Action::None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_timer_paused_while_evaluating() {
        let t0 = Instant::now();
        let mut maker = writing(t0);
        let (mut link, rx) = test_link();

        maker.tick(t0 + Duration::from_secs(60), &mut link);
        assert_eq!(maker.time_left, 840);
        maker.evaluate(&mut link);
        let envelope = rx.try_recv().unwrap();

        assert_eq!(maker.tick(t0 + Duration::from_secs(90), &mut link), Action::None);
        assert_eq!(maker.time_left, 840);

        maker.apply_response(AiResponse {
            id: envelope.id,
            result: Err(AiError::Api("boom".to_string())),
        });
        let resumed = t0 + Duration::from_secs(120);
        maker.tick(resumed, &mut link);
        assert_eq!(maker.time_left, 840);

        maker.tick(resumed + Duration::from_secs(40), &mut link);
        assert_eq!(maker.time_left, 800);
    }

    #[test]
    fn test_cancel_then_restart_resets_timer() {
        let t0 = Instant::now();
        let mut maker = writing(t0);
        let (mut link, _rx) = test_link();
        maker.handle_key(key(KeyCode::Esc), &mut link);
        assert_eq!(maker.stage, Stage::Setup);

        maker.handle_key(key(KeyCode::Enter), &mut link);
        assert_eq!(maker.stage, Stage::Writing);
        assert_eq!(maker.time_left, 900);
    }

    #[test]
    fn test_back_navigation() {
        let (mut link, _rx) = test_link();
        let mut maker = NoteMaker::new();
        assert_eq!(maker.handle_key(key(KeyCode::Esc), &mut link), Action::Navigate(Screen::Mains));

        let t0 = Instant::now();
        let mut maker = writing(t0);
        maker.tick(t0 + Duration::from_secs(30), &mut link);
        assert_eq!(maker.handle_key(key(KeyCode::Esc), &mut link), Action::None);
        assert_eq!(maker.stage, Stage::Setup);
        assert_eq!(maker.topic.value(), "Judicial overreach");
        assert_eq!(maker.tick(t0 + Duration::from_secs(60 * 60), &mut link), Action::None);
        assert_eq!(maker.time_left, 870);

        maker.stage = Stage::Evaluating;
        assert_eq!(maker.handle_key(key(KeyCode::Esc), &mut link), Action::Navigate(Screen::Mains));

        maker.stage = Stage::Results;
        maker.evaluation = Some(evaluation());
        maker.handle_key(key(KeyCode::Char('f')), &mut link);
        assert!(maker.show_final_notes);
        assert_eq!(maker.handle_key(key(KeyCode::Esc), &mut link), Action::None);
        assert!(!maker.show_final_notes);
        assert_eq!(maker.handle_key(key(KeyCode::Char('e')), &mut link), Action::ExportNotes);
        assert_eq!(maker.handle_key(key(KeyCode::Esc), &mut link), Action::Navigate(Screen::Mains));
    }

    #[test]
    fn test_from_saved_is_read_only() {
        let saved = SavedNoteSession {
            id: 4,
            topic: "Disaster management".to_string(),
            time_limit_minutes: 20,
            sections: vec![NoteEntry {
                title: "Body".to_string(),
                notes: "NDMA".to_string(),
            }],
            compiled_notes: "## Body\n\nNDMA".to_string(),
            evaluation: evaluation(),
            created_at: 0,
        };
        let mut maker = NoteMaker::from_saved(saved);
        let (mut link, _rx) = test_link();
        assert_eq!(maker.stage, Stage::Results);
        assert_eq!(maker.time_limit(), 20);
        assert_eq!(maker.sections[0].prompt, SECTIONS[2].prompt);
        assert!(maker.show_final_notes);
        assert_eq!(maker.handle_key(key(KeyCode::Esc), &mut link), Action::Navigate(Screen::Mains));
    }
}
