//! Main screen: header, URL form, result card, stats tiles, status bar

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{STATS_TILES, colors};
use crate::interfaces::tui::ui::widgets::{InputField, SessionMode};

pub fn draw_main_screen(frame: &mut Frame, app: &App) {
    let form = url_form(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Header
            Constraint::Length(form.height()), // URL form
            Constraint::Length(6),             // Result card
            Constraint::Length(5),             // Stats tiles
            Constraint::Min(0),                // Spacer
            Constraint::Length(1),             // Status bar
            Constraint::Length(2),             // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    form.render(frame, chunks[1]);
    draw_result_card(frame, app, chunks[2]);
    draw_stats_grid(frame, chunks[3]);
    draw_status_bar(frame, app, chunks[5]);
    draw_footer(frame, chunks[6]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = SessionMode::from_demo_flag(app.session.demo);

    let mut lines = vec![
        Line::from(Span::styled(
            "── PROTOCOL: ALPHA-COORDINATE ──",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(Span::styled(
            "ARCHITECTURAL LINKS",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "YOUR PRECISE, SHORTENED URLS.",
            Style::default().fg(colors::MUTED),
        )),
        Line::default(),
    ];
    if app.session.demo {
        lines.push(Line::from(Span::styled(
            mode.text(),
            mode.style().add_modifier(Modifier::BOLD),
        )));
    }

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn url_form(app: &App) -> InputField<'_> {
    let title = if app.session.is_loading() {
        "TARGET URL / SHORTENING..."
    } else {
        "TARGET URL"
    };

    InputField::new(title, &app.session.long_url)
        .active(!app.session.is_loading())
        .error(app.validation_error.as_deref())
        .placeholder("ENTER TARGET DATA (URL)...")
}

fn draw_result_card(frame: &mut Frame, app: &App, area: Rect) {
    // The card only exists once a shorten (real or demo) has completed
    if app.session.short_url.is_empty() {
        return;
    }

    let copied = app.session.copied(Instant::now());
    let actions = if copied {
        Line::from(vec![
            Span::styled(
                "✓ COPIED",
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  SHARE ^S", Style::default().fg(colors::MUTED)),
        ])
    } else {
        Line::from(Span::styled(
            "COPY ^C  │  SHARE ^S",
            Style::default().fg(colors::MUTED),
        ))
    };

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            "CONSTRUCTION COMPLETE",
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.session.short_url.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        actions,
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(colors::ACCENT)),
    );
    frame.render_widget(card, area);
}

fn draw_stats_grid(frame: &mut Frame, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, (label, value)) in STATS_TILES.iter().enumerate() {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(*label, Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(
                *value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(tile, tiles[i]);
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if !app.error_message.is_empty() {
        Line::from(Span::styled(
            app.error_message.clone(),
            Style::default().fg(colors::ERROR),
        ))
    } else if !app.status_message.is_empty() {
        Line::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(colors::SUCCESS),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "⏎ shorten   ^C copy   ^S share   ^U clear   F1 help   Esc quit",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(Span::styled(
            concat!(
                "Architectural Link System // v",
                env!("CARGO_PKG_VERSION"),
                " Stable"
            ),
            Style::default().fg(colors::MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
