//! Terminal User Interface (TUI) module
//!
//! The interactive surface: URL form, result card, stats tiles, and the
//! demo-mode badge, rendered with ratatui.

use std::io;

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
use constants::TICK_RATE;
use ui::ui;

/// Run the TUI application
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Probe once, then run
    let mut app = App::new().await;
    let res = run_app(&mut terminal, &mut app).await;

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
///
/// Polls with a tick timeout so the copied flag expires without input.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    std::io::Error: From<<B as Backend>::Error>,
{
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events, ticking while idle
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                let should_exit = event_handler::handle_key_event(app, key).await?;

                if should_exit {
                    return Ok(());
                }
            }
        } else {
            app.on_tick();
        }
    }
}
