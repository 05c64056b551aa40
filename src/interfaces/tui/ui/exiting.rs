//! Exit confirmation popup

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::ui::widgets::Popup;

pub fn draw_exiting_screen(frame: &mut Frame) {
    let inner = Popup::new(" Exit ", popup::EXITING)
        .theme_color(colors::WARNING)
        .render(frame, frame.area());

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Leave ArchLinks?",
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Style::default().fg(colors::SUCCESS)),
            Span::raw(" / Enter to exit   "),
            Span::styled("n", Style::default().fg(colors::ERROR)),
            Span::raw(" / Esc to stay"),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
