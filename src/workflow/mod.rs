pub mod mains;
pub mod note_maker;
pub mod prelims;
pub mod pyq;
pub mod quiz;

use crate::ai::AiError;
use crate::db;
use crate::file_io;
use crate::models::{AiEnvelope, AiOutput, AiRequest, AiResponse, RequestId, Screen, Theme};
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Instant;

use mains::MainsHub;
use note_maker::NoteMaker;
use prelims::PrelimsState;

/// What a screen asks the app to do after handling a key or a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Navigate(Screen),
    Quit,
    Notify(String),
    SaveNoteSession,
    ExportNotes,
    OpenSavedSession(i64),
    DeleteSavedSession(i64),
}

/// Sending half of the AI worker channel, handing out request ids.
pub struct AiLink {
    tx: Sender<AiEnvelope>,
    next_id: u64,
    enabled: bool,
}

impl AiLink {
    pub fn new(tx: Sender<AiEnvelope>, enabled: bool) -> Self {
        Self {
            tx,
            next_id: 1,
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn send(&mut self, request: AiRequest) -> Result<RequestId, AiError> {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?id, ?request, "Queueing AI request");
        self.tx.send(AiEnvelope { id, request }).map_err(|_| {
            AiError::Api("The AI worker has stopped. Restart the app to retry.".to_string())
        })?;
        Ok(id)
    }
}

pub(crate) fn unexpected_output(output: &AiOutput) -> String {
    tracing::warn!(?output, "AI output does not match the request");
    "Received an unexpected response from the AI.".to_string()
}

/// Number of saved note sessions listed on the Mains hub.
const SAVED_SESSIONS_SHOWN: usize = 20;

pub struct App {
    pub screen: Screen,
    pub theme: Theme,
    pub welcome_selected: usize,
    pub prelims: PrelimsState,
    pub mains: MainsHub,
    pub note_maker: NoteMaker,
    pub notice: Option<String>,
    pub should_quit: bool,
    pub model: String,
    ai: AiLink,
    conn: Connection,
    exports_dir: PathBuf,
}

impl App {
    pub fn new(conn: Connection, ai: AiLink, theme: Theme, model: String, exports_dir: PathBuf) -> Self {
        let mut app = Self {
            screen: Screen::Welcome,
            theme,
            welcome_selected: 0,
            prelims: PrelimsState::new(),
            mains: MainsHub::default(),
            note_maker: NoteMaker::new(),
            notice: None,
            should_quit: false,
            model,
            ai,
            conn,
            exports_dir,
        };
        app.refresh_saved_sessions();
        app
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai.enabled()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return;
                }
                _ => {}
            }
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }

        let action = match self.screen {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::Prelims => self.prelims.handle_key(key, &mut self.ai),
            Screen::Mains => self.mains.handle_key(key),
            Screen::NoteMaker => self.note_maker.handle_key(key, &mut self.ai),
        };
        self.apply_action(action);
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.welcome_selected = 1 - self.welcome_selected.min(1);
                Action::None
            }
            KeyCode::Char('1') => Action::Navigate(Screen::Prelims),
            KeyCode::Char('2') => Action::Navigate(Screen::Mains),
            KeyCode::Enter if self.welcome_selected == 0 => Action::Navigate(Screen::Prelims),
            KeyCode::Enter => Action::Navigate(Screen::Mains),
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    pub fn handle_ai_response(&mut self, response: AiResponse) {
        let id = response.id;
        let action = match self.screen {
            Screen::Prelims => self.prelims.apply_response(response),
            Screen::NoteMaker => self.note_maker.apply_response(response),
            _ => None,
        };
        match action {
            Some(action) => self.apply_action(action),
            None => tracing::debug!(?id, "Dropping stale AI response"),
        }
    }

    /// Advances the note-maker countdown.
    pub fn tick(&mut self, now: Instant) {
        if self.screen == Screen::NoteMaker {
            let action = self.note_maker.tick(now, &mut self.ai);
            self.apply_action(action);
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = db::settings::save_theme(&self.conn, self.theme) {
            tracing::error!(error = %e, "Failed to persist theme");
        }
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::info!(from = ?self.screen, to = ?screen, "Navigating");
        match screen {
            Screen::Welcome => self.welcome_selected = 0,
            Screen::Prelims => self.prelims = PrelimsState::new(),
            Screen::Mains => self.refresh_saved_sessions(),
            Screen::NoteMaker => self.note_maker = NoteMaker::new(),
        }
        self.screen = screen;
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Quit => self.should_quit = true,
            Action::Notify(message) => self.notice = Some(message),
            Action::SaveNoteSession => self.save_note_session(),
            Action::ExportNotes => self.export_notes(),
            Action::OpenSavedSession(id) => self.open_saved_session(id),
            Action::DeleteSavedSession(id) => {
                if let Err(e) = db::notes::delete_note_session(&self.conn, id) {
                    tracing::error!(error = %e, id, "Failed to delete note session");
                    self.notice = Some(format!("Could not delete saved notes: {}", e));
                }
                self.refresh_saved_sessions();
            }
        }
    }

    fn refresh_saved_sessions(&mut self) {
        match db::notes::list_note_sessions(&self.conn, SAVED_SESSIONS_SHOWN) {
            Ok(sessions) => self.mains.set_saved(sessions),
            Err(e) => tracing::error!(error = %e, "Failed to load saved note sessions"),
        }
    }

    fn save_note_session(&mut self) {
        let nm = &self.note_maker;
        let Some(evaluation) = &nm.evaluation else {
            return;
        };
        match db::notes::save_note_session(
            &self.conn,
            nm.topic.value().trim(),
            nm.time_limit(),
            &nm.entries(),
            &nm.compiled_notes,
            evaluation,
        ) {
            Ok(id) => tracing::info!(id, "Saved note session"),
            Err(e) => tracing::error!(error = %e, "Failed to save note session"),
        }
    }

    fn export_notes(&mut self) {
        let nm = &self.note_maker;
        let Some(evaluation) = &nm.evaluation else {
            return;
        };
        let message = match file_io::export_final_notes(
            &self.exports_dir,
            nm.topic.value().trim(),
            &nm.entries(),
            evaluation,
        ) {
            Ok(path) => format!("Notes exported to {}", path.display()),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("Export failed: {}", e)
            }
        };
        self.notice = Some(message);
    }

    fn open_saved_session(&mut self, id: i64) {
        match db::notes::get_note_session(&self.conn, id) {
            Ok(Some(saved)) => {
                self.note_maker = NoteMaker::from_saved(saved);
                self.screen = Screen::NoteMaker;
            }
            Ok(None) => {
                self.notice = Some("Those notes no longer exist.".to_string());
                self.refresh_saved_sessions();
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to open note session");
                self.notice = Some(format!("Could not open saved notes: {}", e));
            }
        }
    }
}
