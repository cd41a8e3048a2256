//! Key handling for the Help and Exiting popups.

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen};

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::List;
        }
        _ => {}
    }
    false
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::List;
        }
        _ => {}
    }
    false
}
