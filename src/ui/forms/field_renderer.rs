//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input (3) + error line (1)
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its validation error beneath it
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let has_error = field.error.is_some();
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let value_span = if display_value.is_empty() && !is_active {
        Span::styled(field.placeholder.clone(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(display_value, Style::default().fg(Color::White))
    };

    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(error) = &field.error {
        let error_line = Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[1]);
    }
}

/// Draw the key hints line under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled("Enter/Ctrl+S", key_style),
        Span::raw(": submit  "),
        Span::styled("F1/F2", key_style),
        Span::raw(": switch form  "),
        Span::styled("F5", key_style),
        Span::raw(": reload  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
