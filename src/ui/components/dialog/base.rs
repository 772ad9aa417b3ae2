//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the dialog border (both sides combined)
const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a dialog overlay centered in `area`
pub fn render_dialog(frame: &mut Frame, area: Rect, config: DialogConfig) {
    let max_line_width = config.max_width.saturating_sub(PADDING + 2).max(1) as usize;
    let wrapped_lines = wrap_text(config.message, max_line_width);
    let dialog_area = dialog_area(area, &config, &wrapped_lines);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Size the dialog to its content and center it
fn dialog_area(area: Rect, config: &DialogConfig, lines: &[String]) -> Rect {
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + PADDING + 2)
        .min(config.max_width)
        .min(area.width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + lines.len() as u16 + hint_lines + 2)
        .max(5)
        .min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within a maximum width; words longer than a line are split
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if !current.is_empty() && current_len + 1 + word_len > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            for c in word.chars() {
                if current.chars().count() == max_width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(message: &str) -> DialogConfig<'_> {
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message,
            hint: None,
            max_width: 40,
        }
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("Failed to load profile", 12),
            vec!["Failed to", "load profile"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_dialog_area_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let lines = wrap_text("boom", 34);
        let rect = dialog_area(area, &config("boom"), &lines);
        assert_eq!(rect.width, 11);
        assert_eq!(rect.height, 5);
        assert_eq!(rect.x, (80 - 11) / 2);
        assert_eq!(rect.y, (24 - 5) / 2);
    }

    #[test]
    fn test_dialog_area_fits_small_terminal() {
        let area = Rect::new(0, 0, 20, 4);
        let message = "a long message that wraps over several lines";
        let lines = wrap_text(message, 34);
        let rect = dialog_area(area, &config(message), &lines);
        assert!(rect.width <= 20);
        assert!(rect.height <= 4);
    }
}
