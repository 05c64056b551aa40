//! Session mode indicator
//!
//! Shows whether the session talks to the real backend or fabricates
//! links locally.

use ratatui::style::{Color, Style};

use crate::interfaces::tui::constants::{colors, status_text};

/// Session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Live,
    Demo,
}

impl SessionMode {
    pub fn from_demo_flag(demo: bool) -> Self {
        if demo { Self::Demo } else { Self::Live }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Live => status_text::LIVE,
            Self::Demo => status_text::DEMO,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Live => colors::SUCCESS,
            Self::Demo => colors::WARNING,
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_demo_flag() {
        assert_eq!(SessionMode::from_demo_flag(false), SessionMode::Live);
        assert_eq!(SessionMode::from_demo_flag(true), SessionMode::Demo);
    }

    #[test]
    fn test_mode_text() {
        assert_eq!(SessionMode::Live.text(), "LIVE");
        assert!(SessionMode::Demo.text().contains("DEMO MODE"));
        assert!(SessionMode::Demo.text().contains("OFFLINE CORE"));
    }

    #[test]
    fn test_mode_colors_differ() {
        assert_ne!(SessionMode::Live.color(), SessionMode::Demo.color());
    }
}
