//! Help popup

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::ui::widgets::Popup;

pub fn draw_help_screen(frame: &mut Frame) {
    let inner = Popup::new(" Help ", popup::HELP)
        .theme_color(Color::Cyan)
        .render(frame, frame.area());

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };

    let text = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().fg(Color::White),
        )),
        Line::default(),
        key("type", "edit the target URL"),
        key("Enter", "shorten the URL"),
        key("Ctrl+C", "copy the short URL"),
        key("Ctrl+S", "share the short URL"),
        key("Ctrl+U", "clear the input"),
        key("F1", "toggle this help"),
        key("Esc", "quit"),
        Line::default(),
        Line::from(Span::styled(
            "When the backend is unreachable the session runs in demo",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(Span::styled(
            "mode: short links are fabricated locally and resolve nowhere.",
            Style::default().fg(colors::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(text), inner);
}
