//! URL input widget
//!
//! Single-line text input with active-state highlight, validation error
//! display and a placeholder.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// Input field component, builder-style configuration
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Required height (input box + optional error line)
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();
        if !self.value.is_empty() {
            title = format!("{} ({} chars)", title, self.value.len());
        }
        title
    }

    fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            self.value
        }
    }

    fn value_style(&self) -> Style {
        if self.value.is_empty() {
            Style::default().fg(colors::MUTED)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.display_value())
            .style(self.value_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.display_title())
                    .border_style(self.border_style()),
            );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title_shows_char_count() {
        let field = InputField::new("Target URL", "test");
        assert!(field.display_title().contains("Target URL"));
        assert!(field.display_title().contains("4 chars"));
    }

    #[test]
    fn test_input_field_placeholder_when_empty() {
        let field = InputField::new("Target URL", "").placeholder("ENTER TARGET DATA (URL)...");
        assert_eq!(field.display_value(), "ENTER TARGET DATA (URL)...");

        let field = InputField::new("Target URL", "https://a.com").placeholder("unused");
        assert_eq!(field.display_value(), "https://a.com");
    }

    #[test]
    fn test_input_field_height() {
        let field = InputField::new("Target URL", "test");
        assert_eq!(field.height(), 3);

        let field = InputField::new("Target URL", "test").error(Some("Invalid URL"));
        assert_eq!(field.height(), 4);
    }
}
