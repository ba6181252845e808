//! Reusable UI widget helpers

use crate::state::{FetchController, FetchState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Outlined block with a padded title
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Area inside a one-cell border
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Render a fetch-backed section.
///
/// Loading and failure get a placeholder (the failure with a retry hint);
/// `render` only runs once data has arrived.
pub fn draw_fetch<T>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    controller: &FetchController<T>,
    render: impl FnOnce(&mut Frame, Rect, &T),
) where
    T: Send + 'static,
{
    controller.with_state(|state| match state {
        FetchState::Success(data) => render(frame, area, data),
        FetchState::Idle | FetchState::Loading => {
            draw_placeholder(frame, area, title, vec![Line::from("Loading...")], Color::DarkGray)
        }
        FetchState::Failure(message) => draw_placeholder(
            frame,
            area,
            title,
            vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("r", Style::default().fg(Color::Yellow)),
                    Span::raw(" to retry"),
                ]),
            ],
            Color::Red,
        ),
    });
}

fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, color: Color) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(titled_block(title));
    frame.render_widget(paragraph, area);
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
