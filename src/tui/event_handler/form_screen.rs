//! Key handling for the creation form.

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen};

/// Handle creation form input.
pub fn handle_form_screen(app: &mut App, key_code: KeyCode) -> bool {
    // Inputs are frozen while a submission is in flight; the outcome event
    // re-enables them.
    if app.form.submitting {
        return false;
    }

    match key_code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => app.form.toggle_field(),
        KeyCode::Backspace => {
            if app.form.pop_char() {
                app.after_slug_edit();
            }
        }
        KeyCode::Esc => {
            // Switch tabs without dropping the draft.
            app.current_screen = CurrentScreen::List;
        }
        KeyCode::Char(c) => {
            if app.form.push_char(c) {
                app.after_slug_edit();
            }
        }
        _ => {}
    }
    false
}
