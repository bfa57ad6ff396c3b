use air1_prep::{
    config::{AppConfig, Cli},
    db, logger, spawn_ai_worker, ui, AiLink, AiResponse, App, Theme,
};
use clap::Parser;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_cli(Cli::parse());
    let log_path = logger::init(&config.data_dir)?;

    let conn = db::init_db(&config.data_dir)?;
    let theme = match db::settings::load_theme(&conn) {
        Ok(Some(theme)) => theme,
        Ok(None) => Theme::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()),
        Err(e) => {
            tracing::warn!(error = %e, "Could not load theme preference");
            Theme::Dark
        }
    };

    if !config.ai_enabled {
        tracing::warn!("OPENROUTER_API_KEY is not set; AI features are disabled");
    }

    let (req_tx, req_rx) = crossbeam_channel::unbounded();
    let (resp_tx, resp_rx) = crossbeam_channel::unbounded();
    let _worker = spawn_ai_worker(resp_tx, req_rx, config.model.clone(), config.retry)?;

    let mut app = App::new(
        conn,
        AiLink::new(req_tx, config.ai_enabled),
        theme,
        config.model.model.clone(),
        config.exports_dir(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &resp_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Terminal loop failed");
        eprintln!("air1-prep stopped: {} (see {})", e, log_path.display());
    }
    result.map_err(Into::into)
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    responses: &Receiver<AiResponse>,
) -> io::Result<()> {
    loop {
        while let Ok(response) = responses.try_recv() {
            app.handle_ai_response(response);
        }
        app.tick(Instant::now());

        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
}
