//! Centered popup container

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

/// Centered popup with a double border; render returns the inner area.
pub struct Popup<'a> {
    title: &'a str,
    theme_color: Color,
    size: PopupSize,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            theme_color: Color::Cyan,
            size,
        }
    }

    pub fn theme_color(mut self, color: Color) -> Self {
        self.theme_color = color;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size.width, self.size.height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(
                Style::default()
                    .fg(self.theme_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.theme_color));
        frame.render_widget(block, popup_area);

        popup_area.inner(Margin::new(2, 1))
    }
}

/// Centered rectangle by percentage of the given area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
