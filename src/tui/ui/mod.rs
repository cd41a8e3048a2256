// UI submodules
mod common;
mod create_screen;
mod exiting;
mod help;
mod list_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_tab_bar};
pub use create_screen::draw_create_screen;
pub use exiting::draw_exiting_popup;
pub use help::draw_help_popup;
pub use list_screen::draw_list_screen;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, CurrentScreen};

/// Main rendering entry point.
pub fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tabs
            Constraint::Min(10),   // content
            Constraint::Length(3), // status
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    draw_tab_bar(frame, app, chunks[0]);

    // Help and Exiting are popups over the list.
    match app.current_screen {
        CurrentScreen::Create => draw_create_screen(frame, app, chunks[1]),
        _ => draw_list_screen(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);

    match app.current_screen {
        CurrentScreen::Help => draw_help_popup(frame),
        CurrentScreen::Exiting => draw_exiting_popup(frame),
        _ => {}
    }
}
