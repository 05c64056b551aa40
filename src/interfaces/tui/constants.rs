//! TUI constants
//!
//! Central place for UI-related constants instead of magic numbers
//! scattered through the render code.

use std::time::Duration;

/// How often the event loop ticks when idle (drives the copied-flag expiry)
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Max characters accepted into the URL input
pub const MAX_URL_INPUT_LENGTH: usize = 2048;

/// Popup size configuration
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// Width percentage (0-100)
    pub width: u16,
    /// Height percentage (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Popup sizes per screen
pub mod popup {
    use super::PopupSize;

    /// Help popup
    pub const HELP: PopupSize = PopupSize::new(70, 70);
    /// Exit confirmation
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// Color theme
pub mod colors {
    use ratatui::style::Color;

    /// Accent, the gold of the result card mapped onto the terminal
    pub const ACCENT: Color = Color::Yellow;
    /// Success
    pub const SUCCESS: Color = Color::Green;
    /// Warning
    pub const WARNING: Color = Color::Yellow;
    /// Error
    pub const ERROR: Color = Color::Red;
    /// Secondary text
    pub const MUTED: Color = Color::DarkGray;
}

/// Mode indicator text
pub mod status_text {
    /// Backend reachable, links are real
    pub const LIVE: &str = "LIVE";
    /// Offline core, links are fabricated
    pub const DEMO: &str = "DEMO MODE ACTIVE // OFFLINE CORE";
}

/// The static stats tiles under the form
pub const STATS_TILES: [(&str, &str); 3] = [
    ("PRECISION", "99.99%"),
    ("SECURITY", "AES-256"),
    ("LATENCY", "< 1.2ms"),
];
