//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a multi-line field's box
const MULTILINE_HEIGHT: u16 = 6;
/// Rows taken by a single-line field's box
const SINGLE_LINE_HEIGHT: u16 = 3;

/// Total rows for `field`, including its error line when present
pub fn field_height(field: &FormField, has_error: bool) -> u16 {
    let base = if field.is_multiline() {
        MULTILINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    };
    base + u16::from(has_error)
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value(value);
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = match (is_active, field.is_choice()) {
        (false, _) => "",
        (true, true) => "  ◀ ▶",
        (true, false) => "▌",
    };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if value.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        // Keep the tail of long text visible
        let visible = MULTILINE_HEIGHT.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);
        Paragraph::new(lines.split_off(skip))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let box_area = Rect {
        height: area.height.saturating_sub(u16::from(error.is_some())),
        ..area
    };
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);

    if let Some(error) = error {
        let error_area = Rect {
            y: box_area.y + box_area.height,
            height: 1,
            ..area
        };
        let line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, error_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_height_includes_error_line() {
        let name = FormField::text("name", "Name");
        assert_eq!(field_height(&name, false), 3);
        assert_eq!(field_height(&name, true), 4);
        let message = FormField::multiline("message", "Message");
        assert_eq!(field_height(&message, false), 6);
    }
}
