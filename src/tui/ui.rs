//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::output::progress_of;
use crate::timer::{Period, Phase};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, countdown, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Color used for the given period's widgets.
const fn period_color(period: Period) -> Color {
    match period {
        Period::Focus => Color::Cyan,
        Period::Break => Color::Green,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let period = app.timer.period();
    let state = match app.timer.phase() {
        Phase::Idle => "idle",
        Phase::RunningFocus | Phase::RunningBreak => "running",
    };
    let title = format!(" twenty - {} period ({state}) ", period.display_name());

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(period_color(period))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(period_color(period))),
        );

    frame.render_widget(header, area);
}

/// Render the remaining time, centered.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.timer.snapshot();

    let mut lines = vec![Line::from("")];
    lines.push(Line::from(Span::styled(
        snapshot.display.clone(),
        Style::default()
            .fg(period_color(snapshot.period))
            .add_modifier(Modifier::BOLD),
    )));
    if !snapshot.running {
        lines.push(Line::from(Span::styled(
            "paused",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the elapsed-share gauge for the current period.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.timer.snapshot();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(period_color(snapshot.period)))
        .ratio(progress_of(&snapshot).clamp(0.0, 1.0))
        .label(snapshot.display.clone());

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
