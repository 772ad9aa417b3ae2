//! Shared layout for the account forms: fields, banner, submit button, help

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::state::{FormController, SubmitStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Maximum width of the form card
const FORM_WIDTH: u16 = 60;

/// Draw a form card centered in `area`
pub fn draw_form_page(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &FormController,
    button_label: &str,
) {
    let field_count = form.fields().len();
    let height = (field_count as u16 * FIELD_HEIGHT + 1 + BUTTON_HEIGHT + 1 + 2).min(area.height);
    let width = FORM_WIDTH.min(area.width);
    let card = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints: Vec<Constraint> = (0..field_count)
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1)); // Banner
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit button
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in form.fields().iter().enumerate() {
        draw_field(frame, chunks[idx], field, form.active_field_index == idx);
    }

    if let Some(banner) = form.banner() {
        let style = match form.status() {
            SubmitStatus::Failed(_) => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Green),
        };
        let banner = Paragraph::new(banner)
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[field_count]);
    }

    render_button(
        frame,
        chunks[field_count + 1],
        button_label,
        form.is_button_row_active(),
        !form.is_submitting(),
    );

    draw_help_text(frame, chunks[field_count + 2]);
}
