// UI submodules
mod exiting;
mod help;
mod main_screen;
pub mod widgets;

pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use main_screen::draw_main_screen;

use super::app::{App, CurrentScreen};
use ratatui::Frame;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    draw_main_screen(frame, app);

    // Popups render on top of the main screen
    match app.current_screen {
        CurrentScreen::Help => draw_help_screen(frame),
        CurrentScreen::Exiting => draw_exiting_screen(frame),
        CurrentScreen::Main => {}
    }
}
