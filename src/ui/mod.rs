pub mod header;
pub mod layout;
mod mains;
mod note_maker;
mod prelims;
mod pyq;
mod quiz;
pub mod theme;
mod welcome;
mod widgets;

pub use layout::{calculate_app_chunks, centered_rect};
pub use theme::Palette;

use crate::models::Screen;
use crate::workflow::note_maker::Stage;
use crate::workflow::prelims::PrelimsTool;
use crate::workflow::App;
use ratatui::{widgets::Block, Frame};

/// Draws the whole application for the current state.
pub fn draw(f: &mut Frame, app: &mut App) {
    let p = Palette::for_theme(app.theme);
    let area = f.area();
    f.render_widget(Block::default().style(p.base()), area);

    let layout = calculate_app_chunks(area);
    header::draw_header(f, layout.header_area, app.theme, &p);

    match app.screen {
        Screen::Welcome => welcome::draw_welcome(f, layout.body_area, app.welcome_selected, &p),
        Screen::Prelims => prelims::draw_prelims(f, layout.body_area, &mut app.prelims, &p),
        Screen::Mains => mains::draw_mains(f, layout.body_area, &app.mains, &p),
        Screen::NoteMaker => {
            note_maker::draw_note_maker(f, layout.body_area, &mut app.note_maker, &p)
        }
    }

    header::draw_footer(
        f,
        layout.footer_area,
        footer_help(app),
        app.ai_enabled(),
        &app.model,
        &p,
    );

    if let Some(notice) = &app.notice {
        widgets::draw_notice(f, notice, &p);
    }
}

fn footer_help(app: &App) -> &'static str {
    match app.screen {
        Screen::Welcome => "↑/↓: Choose module | Enter: Open | 1: Prelims | 2: Mains | Esc: Quit",
        Screen::Prelims => match app.prelims.tool {
            PrelimsTool::Hub => "↑/↓: Choose tool | Enter: Open | Esc: Back to Home",
            PrelimsTool::CurrentAffairs if app.prelims.current_affairs.quiz.is_some() => {
                "A-D or ↑/↓: Select | Enter: Next | Esc: Close quiz"
            }
            PrelimsTool::CurrentAffairs => {
                "Tab: Switch field | ←/→: Change | Enter: Analyze / Assess topic | Esc: Back to Prelims"
            }
            PrelimsTool::Pyq => {
                "Tab: Switch field | Ctrl+S: Analyze | PgUp/PgDn: Scroll | Esc: Back to Prelims"
            }
        },
        Screen::Mains => "↑/↓: Select | Enter: Open | d: Delete saved notes | Esc: Back to Home",
        Screen::NoteMaker => match app.note_maker.stage {
            Stage::Setup => "Tab: Switch field | ←/→: Time limit | Enter: Start | Esc: Back to Mains Prep",
            Stage::Writing if app.note_maker.is_last_step() => {
                "Ctrl+G: Ideas | Shift+Tab: Previous | Tab/Ctrl+E: Finish & Evaluate | Esc: Cancel Session"
            }
            Stage::Writing => {
                "Ctrl+G: Ideas | Tab: Next | Shift+Tab: Previous | Ctrl+E: Evaluate | Esc: Cancel Session"
            }
            Stage::Evaluating => "Esc: Cancel Session",
            Stage::Results if app.note_maker.show_final_notes && !app.note_maker.read_only => {
                "↑/↓: Scroll | e: Export markdown | Esc: Back to Evaluation Results"
            }
            Stage::Results => {
                "↑/↓: Scroll | f: Final notes | e: Export markdown | Esc: Back to Mains Prep"
            }
        },
    }
}
