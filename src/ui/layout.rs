//! Layout components (tab bar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tabs in display order with their shortcut keys
const TABS: &[(View, &str)] = &[(View::Profile, "F1"), (View::Password, "F2")];

/// Split the screen into tab bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab bar
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Account ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (view, key) in TABS {
        let style = if app.state.current_view == *view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{key} {}", view.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.active_form();

    let (state_label, state_color) = if form.is_submitting() {
        ("SUBMITTING", Color::Yellow)
    } else {
        ("READY", Color::Green)
    };

    let mut spans = vec![Span::styled(
        format!(" {state_label} "),
        Style::default().fg(Color::Black).bg(state_color),
    )];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::White)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray)),
        area,
    );
}
