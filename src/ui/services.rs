//! Services page

use super::widgets::{draw_fetch, titled_block};
use crate::app::App;
use crate::state::{FetchController, Service};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Stack entries shown per service
const STACK_PREVIEW: usize = 4;

pub fn draw(frame: &mut Frame, area: Rect, controller: &FetchController<Vec<Service>>, app: &App) {
    draw_fetch(frame, area, "Services", controller, |frame, area, services| {
        let lines = service_lines(services);
        let max_scroll = lines.len().saturating_sub(1);
        let scroll = app.state.scroll_offset.min(max_scroll) as u16;

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(titled_block("Services"));
        frame.render_widget(paragraph, area);
    });
}

fn service_lines(services: &[Service]) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (idx, service) in services.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:02} ", idx + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                &service.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(service.full_desc.as_str()));
        lines.push(Line::from(Span::styled(
            service.features.join(" · "),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("Stack: {}", service.stack_head(STACK_PREVIEW)),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    lines
}
