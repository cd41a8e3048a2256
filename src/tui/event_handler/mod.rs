//! Event handling for the interface.
//!
//! Organized by screen:
//! - list_screen: the link list, inline search included
//! - form_screen: the creation form
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen};

mod form_screen;
mod list_screen;
mod misc_screens;

use form_screen::*;
use list_screen::*;
use misc_screens::*;

/// Handle one keypress based on the current screen. Returns true when the
/// application should exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    if app.inline_search_mode && app.current_screen == CurrentScreen::List {
        return handle_inline_search(app, key_code);
    }

    match app.current_screen {
        CurrentScreen::List => handle_list_screen(app, key_code),
        CurrentScreen::Create => handle_form_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
