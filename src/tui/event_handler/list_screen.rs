//! Key handling for the link list, including inline search mode.

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen, FormField};

/// Handle list screen input.
pub fn handle_list_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        // Pagination; no-ops at the edges.
        KeyCode::Left | KeyCode::PageUp => app.store.prev_page(),
        KeyCode::Right | KeyCode::PageDown => app.store.next_page(),
        KeyCode::Home | KeyCode::Char('g') => app.store.set_page(1),
        KeyCode::End | KeyCode::Char('G') => {
            let last = app.store.total_pages;
            app.store.set_page(last);
        }
        KeyCode::Char('/') => {
            app.inline_search_mode = true;
        }
        KeyCode::Esc => {
            // One action clears the whole search term.
            if !app.store.search_input.is_empty() {
                app.store.clear_search();
                app.selected_index = 0;
            }
        }
        KeyCode::Char('s') | KeyCode::Char('S') => app.store.cycle_page_size(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.copy_selected(),
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => app.open_selected(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.store.fetch_links(),
        KeyCode::Tab | KeyCode::Char('a') | KeyCode::Char('A') => {
            app.current_screen = CurrentScreen::Create;
            if app.form.editing.is_none() {
                app.form.editing = Some(FormField::Url);
            }
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Handle inline search mode input. Every keystroke goes straight into the
/// raw term; the store debounces what actually reaches the server.
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc => {
            app.store.clear_search();
            app.inline_search_mode = false;
            app.selected_index = 0;
        }
        KeyCode::Enter => {
            // Keep the term, leave input mode.
            app.inline_search_mode = false;
        }
        KeyCode::Backspace => {
            app.store.pop_search_char();
            app.selected_index = 0;
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => {
            app.store.push_search_char(c);
            app.selected_index = 0;
        }
        _ => {}
    }
    false
}
