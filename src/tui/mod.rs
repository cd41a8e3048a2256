//! Terminal user interface.
//!
//! Owns the terminal lifecycle and the draw/input loop. All state lives in
//! [`app::App`]; asynchronous completions flow in through the store's event
//! channel and are drained once per tick, so the loop never blocks on the
//! network.

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod constants;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

use crate::config::StaticConfig;

/// How long one input poll may block the loop. Keeps event draining and
/// redraws flowing while the user is idle.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Run the terminal client.
pub async fn run_tui(config: StaticConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let app = App::new(&config);
    let res = match app {
        Ok(mut app) => run_app(&mut terminal, &mut app).await,
        Err(e) => Err(io::Error::other(e.format_simple())),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    loop {
        app.drain_events();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let should_exit = event_handler::handle_key_event(app, key.code);

            if should_exit {
                return Ok(());
            }
        }
    }
}
