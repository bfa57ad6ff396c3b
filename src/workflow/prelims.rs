use super::pyq::PyqState;
use super::quiz::QuizModal;
use super::{unexpected_output, Action, AiLink};
use crate::models::{AiOutput, AiRequest, AiResponse, AnalysisTopic, RequestId, Screen};
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Hub entries as (title, description).
pub const PRELIMS_TOOLS: [(&str, &str); 2] = [
    (
        "Current Affairs Browser",
        "Analyze key sources by month and test your knowledge with AI-generated quizzes.",
    ),
    (
        "PYQ Analysis Tool",
        "Get a deep, AI-powered analysis of any Previous Year Question.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrelimsTool {
    Hub,
    CurrentAffairs,
    Pyq,
}

pub struct PrelimsState {
    pub tool: PrelimsTool,
    pub hub_selected: usize,
    pub current_affairs: CurrentAffairs,
    pub pyq: PyqState,
}

impl PrelimsState {
    pub fn new() -> Self {
        Self {
            tool: PrelimsTool::Hub,
            hub_selected: 0,
            current_affairs: CurrentAffairs::for_today(),
            pyq: PyqState::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, ai: &mut AiLink) -> Action {
        match self.tool {
            PrelimsTool::Hub => match key.code {
                KeyCode::Up | KeyCode::Down => {
                    self.hub_selected = 1 - self.hub_selected.min(1);
                    Action::None
                }
                KeyCode::Enter => {
                    self.open_tool(if self.hub_selected == 0 {
                        PrelimsTool::CurrentAffairs
                    } else {
                        PrelimsTool::Pyq
                    });
                    Action::None
                }
                KeyCode::Esc => Action::Navigate(Screen::Welcome),
                _ => Action::None,
            },
            PrelimsTool::CurrentAffairs => {
                if !self.current_affairs.handle_key(key, ai) {
                    self.tool = PrelimsTool::Hub;
                }
                Action::None
            }
            PrelimsTool::Pyq => {
                if !self.pyq.handle_key(key, ai) {
                    self.tool = PrelimsTool::Hub;
                }
                Action::None
            }
        }
    }

    /// Tools start fresh every time they are opened.
    fn open_tool(&mut self, tool: PrelimsTool) {
        match tool {
            PrelimsTool::CurrentAffairs => self.current_affairs = CurrentAffairs::for_today(),
            PrelimsTool::Pyq => self.pyq = PyqState::new(),
            PrelimsTool::Hub => {}
        }
        self.tool = tool;
    }

    pub fn apply_response(&mut self, response: AiResponse) -> Option<Action> {
        let handled = match self.tool {
            PrelimsTool::CurrentAffairs => self.current_affairs.apply_response(response),
            PrelimsTool::Pyq => self.pyq.apply_response(response),
            PrelimsTool::Hub => false,
        };
        handled.then_some(Action::None)
    }
}

impl Default for PrelimsState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaFocus {
    Month,
    Year,
    Topics,
}

pub struct CurrentAffairs {
    pub month: usize,
    pub year_index: usize,
    pub years: Vec<i32>,
    pub focus: CaFocus,
    pub topics: Vec<AnalysisTopic>,
    pub selected_topic: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub quiz: Option<QuizModal>,
    pub scroll: u16,
    pending: Option<RequestId>,
}

impl CurrentAffairs {
    pub fn for_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Defaults to `today`'s month and year; the year list holds that year
    /// and the four before it.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: today.month0() as usize,
            year_index: 0,
            years: (0..5).map(|back| today.year() - back).collect(),
            focus: CaFocus::Month,
            topics: Vec::new(),
            selected_topic: 0,
            loading: false,
            error: None,
            quiz: None,
            scroll: 0,
            pending: None,
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month % MONTHS.len()]
    }

    pub fn year(&self) -> i32 {
        self.years[self.year_index]
    }

    pub fn analyze(&mut self, ai: &mut AiLink) {
        if self.loading {
            return;
        }
        self.error = None;
        self.topics.clear();
        self.selected_topic = 0;
        self.scroll = 0;

        let request = AiRequest::AnalyzeSources {
            month: self.month_name().to_string(),
            year: self.year(),
        };
        match ai.send(request) {
            Ok(id) => {
                tracing::info!(month = self.month_name(), year = self.year(), "Analyzing sources");
                self.pending = Some(id);
                self.loading = true;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Opens the quiz modal for the highlighted topic.
    pub fn assess(&mut self, ai: &mut AiLink) {
        if let Some(topic) = self.topics.get(self.selected_topic) {
            self.quiz = Some(QuizModal::open(topic.clone(), ai));
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order: &[CaFocus] = if self.topics.is_empty() {
            &[CaFocus::Month, CaFocus::Year]
        } else {
            &[CaFocus::Month, CaFocus::Year, CaFocus::Topics]
        };
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn step_value(&mut self, forward: bool) {
        match self.focus {
            CaFocus::Month => {
                self.month = if forward {
                    (self.month + 1) % 12
                } else {
                    (self.month + 11) % 12
                };
            }
            CaFocus::Year => {
                let len = self.years.len();
                self.year_index = if forward {
                    (self.year_index + 1) % len
                } else {
                    (self.year_index + len - 1) % len
                };
            }
            CaFocus::Topics => {}
        }
    }

    /// Returns `false` when the user leaves the tool.
    pub fn handle_key(&mut self, key: KeyEvent, ai: &mut AiLink) -> bool {
        if let Some(quiz) = &mut self.quiz {
            if !quiz.handle_key(key) {
                self.quiz = None;
            }
            return true;
        }

        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Left => self.step_value(false),
            KeyCode::Right => self.step_value(true),
            KeyCode::Up if self.focus == CaFocus::Topics => {
                self.selected_topic = self.selected_topic.saturating_sub(1);
            }
            KeyCode::Down if self.focus == CaFocus::Topics => {
                self.selected_topic =
                    (self.selected_topic + 1).min(self.topics.len().saturating_sub(1));
            }
            KeyCode::Up => self.step_value(false),
            KeyCode::Down => self.step_value(true),
            KeyCode::Enter if self.focus == CaFocus::Topics => self.assess(ai),
            KeyCode::Enter => self.analyze(ai),
            _ => {}
        }
        true
    }

    pub fn apply_response(&mut self, response: AiResponse) -> bool {
        if let Some(quiz) = &mut self.quiz
            && quiz.waiting_for(response.id)
        {
            quiz.apply(response.result);
            return true;
        }

        if self.pending != Some(response.id) {
            return false;
        }
        self.pending = None;
        self.loading = false;

        match response.result {
            Ok(AiOutput::Topics(topics)) => {
                tracing::info!(count = topics.len(), "Current affairs topics received");
                self.topics = topics;
                self.selected_topic = 0;
                self.focus = CaFocus::Topics;
            }
            Ok(other) => self.error = Some(unexpected_output(&other)),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiError;
    use crate::models::QuizQuestion;
    use crate::workflow::tests::{key, test_link};

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 10).unwrap()
    }

    fn topics() -> Vec<AnalysisTopic> {
        vec![
            AnalysisTopic {
                title: "PM Surya Ghar".to_string(),
                summary: "Rooftop solar scheme".to_string(),
            },
            AnalysisTopic {
                title: "Nilgiri Tahr census".to_string(),
                summary: "First synchronised survey".to_string(),
            },
        ]
    }

    #[test]
    fn test_defaults_to_current_month_and_five_years() {
        let ca = CurrentAffairs::new(date(2026, 3));
        assert_eq!(ca.month_name(), "March");
        assert_eq!(ca.year(), 2026);
        assert_eq!(ca.years, vec![2026, 2025, 2024, 2023, 2022]);
    }

    #[test]
    fn test_month_and_year_cycle() {
        let mut ca = CurrentAffairs::new(date(2026, 1));
        let (mut link, _rx) = test_link();
        ca.handle_key(key(KeyCode::Left), &mut link);
        assert_eq!(ca.month_name(), "December");
        ca.handle_key(key(KeyCode::Tab), &mut link);
        ca.handle_key(key(KeyCode::Right), &mut link);
        assert_eq!(ca.year(), 2025);
        ca.handle_key(key(KeyCode::Tab), &mut link);
        assert_eq!(ca.focus, CaFocus::Month);
    }

    #[test]
    fn test_analyze_sends_month_and_year() {
        let mut ca = CurrentAffairs::new(date(2025, 8));
        ca.error = Some("old".to_string());
        let (mut link, rx) = test_link();

        ca.handle_key(key(KeyCode::Enter), &mut link);
        assert!(ca.loading);
        assert!(ca.error.is_none());
        let envelope = rx.try_recv().unwrap();
        assert_eq!(
            envelope.request,
            AiRequest::AnalyzeSources {
                month: "August".to_string(),
                year: 2025
            }
        );

        ca.handle_key(key(KeyCode::Enter), &mut link);
        assert!(rx.try_recv().is_err());

        assert!(ca.apply_response(AiResponse {
            id: envelope.id,
            result: Ok(AiOutput::Topics(topics())),
        }));
        assert!(!ca.loading);
        assert_eq!(ca.topics.len(), 2);
        assert_eq!(ca.focus, CaFocus::Topics);
    }

    #[test]
    fn test_analyze_failure_sets_error() {
        let mut ca = CurrentAffairs::new(date(2025, 8));
        let (mut link, rx) = test_link();
        ca.analyze(&mut link);
        let id = rx.try_recv().unwrap().id;

        assert!(!ca.apply_response(AiResponse {
            id: RequestId(id.0 + 100),
            result: Ok(AiOutput::Topics(topics())),
        }));
        assert!(ca.loading);

        ca.apply_response(AiResponse {
            id,
            result: Err(AiError::EmptyResponse),
        });
        assert!(!ca.loading);
        assert!(ca.topics.is_empty());
        assert_eq!(ca.error.as_deref(), Some("Received an empty response from the API."));
    }

    #[test]
    fn test_assess_opens_quiz_for_selected_topic() {
        let mut ca = CurrentAffairs::new(date(2025, 8));
        let (mut link, rx) = test_link();
        ca.topics = topics();
        ca.focus = CaFocus::Topics;

        ca.handle_key(key(KeyCode::Down), &mut link);
        ca.handle_key(key(KeyCode::Enter), &mut link);
        let quiz = ca.quiz.as_ref().unwrap();
        assert_eq!(quiz.topic.title, "Nilgiri Tahr census");
        assert!(quiz.loading);
        let envelope = rx.try_recv().unwrap();

        assert!(ca.apply_response(AiResponse {
            id: envelope.id,
            result: Err(AiError::RateLimited),
        }));
        assert!(ca.quiz.as_ref().unwrap().error.is_some());

        ca.handle_key(key(KeyCode::Esc), &mut link);
        assert!(ca.quiz.is_none());
        assert_eq!(ca.topics.len(), 2);
    }

    #[test]
    fn test_quiz_reply_after_close_is_dropped() {
        let mut ca = CurrentAffairs::new(date(2025, 8));
        let (mut link, rx) = test_link();
        ca.topics = topics();
        ca.focus = CaFocus::Topics;

        ca.handle_key(key(KeyCode::Enter), &mut link);
        let first = rx.try_recv().unwrap();
        ca.handle_key(key(KeyCode::Esc), &mut link);
        assert!(ca.quiz.is_none());

        let quiz = AiOutput::Quiz(vec![QuizQuestion {
            question: "Which body runs the census?".to_string(),
            options: vec!["WWF".to_string(), "Forest Department".to_string()],
            correct_answer: "Forest Department".to_string(),
            explanation: "State-led count.".to_string(),
        }]);
        assert!(!ca.apply_response(AiResponse {
            id: first.id,
            result: Ok(quiz.clone()),
        }));
        assert!(ca.quiz.is_none());
        assert!(ca.error.is_none());
        assert_eq!(ca.topics.len(), 2);

        ca.handle_key(key(KeyCode::Enter), &mut link);
        let second = rx.try_recv().unwrap();
        assert!(!ca.apply_response(AiResponse {
            id: first.id,
            result: Ok(quiz.clone()),
        }));
        assert!(ca.quiz.as_ref().unwrap().loading);

        assert!(ca.apply_response(AiResponse {
            id: second.id,
            result: Ok(quiz),
        }));
        assert_eq!(ca.quiz.as_ref().unwrap().questions.len(), 1);
    }

    #[test]
    fn test_hub_routes_to_tools_and_back() {
        let mut prelims = PrelimsState::new();
        let (mut link, _rx) = test_link();
        prelims.handle_key(key(KeyCode::Down), &mut link);
        prelims.handle_key(key(KeyCode::Enter), &mut link);
        assert_eq!(prelims.tool, PrelimsTool::Pyq);

        prelims.handle_key(key(KeyCode::Esc), &mut link);
        assert_eq!(prelims.tool, PrelimsTool::Hub);
        assert_eq!(
            prelims.handle_key(key(KeyCode::Esc), &mut link),
            Action::Navigate(Screen::Welcome)
        );
    }
}
