//! Lead form rendering: fields, failure banner and confirmation screen

use super::field_renderer::{draw_field, field_height};
use crate::app::{App, FormPage};
use crate::state::FormKind;
use crate::ui::components::{SubmitButton, BUTTON_HEIGHT};
use crate::ui::widgets::{inner, titled_block};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a lead form page with its side panel
pub fn draw_lead_form(frame: &mut Frame, area: Rect, page: &FormPage, app: &App) {
    if page.submission.is_success() {
        draw_confirmation(frame, area, page);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(36), // Side panel
        ])
        .split(area);

    let form_area = match page.submission.error() {
        Some(message) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(main_chunks[0]);
            draw_failure_banner(frame, chunks[0], &message);
            chunks[1]
        }
        None => main_chunks[0],
    };

    draw_fields(frame, form_area, page);
    draw_side_panel(frame, main_chunks[1], page.form.kind, app);
}

/// Index of the first field to draw so the focused row stays on screen
fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let active = active.min(heights.len().saturating_sub(1));
    let mut start = 0;
    while start < active && heights[start..=active].iter().sum::<u16>() > available {
        start += 1;
    }
    start
}

fn draw_fields(frame: &mut Frame, area: Rect, page: &FormPage) {
    let form = &page.form;
    let block = titled_block(form.kind.title());
    frame.render_widget(block, area);
    let inner = inner(area);

    let mut heights: Vec<u16> = form
        .fields()
        .iter()
        .map(|f| field_height(f, form.controller.error(f.name).is_some()))
        .collect();
    heights.push(BUTTON_HEIGHT);

    let start = first_visible(&heights, form.active_field_index, inner.height);
    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    for (idx, field) in form.fields().iter().enumerate().skip(start) {
        let height = heights[idx];
        if y + height > bottom {
            return;
        }
        let area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        draw_field(
            frame,
            area,
            field,
            form.controller.value(field.name),
            form.controller.error(field.name),
            form.active_field_index == idx,
        );
        y += height;
    }

    if y + BUTTON_HEIGHT <= bottom {
        let button = SubmitButton::new(form.is_submit_row_active(), page.submission.is_pending());
        let action = form.kind.submit_label();
        let button_area = Rect {
            x: inner.x,
            y,
            width: SubmitButton::width(&button.label(action), inner.width),
            height: BUTTON_HEIGHT,
        };
        button.render(frame, button_area, action);
    }
}

fn draw_failure_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "✕ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn side_panel_text(kind: FormKind) -> &'static [&'static str] {
    match kind {
        FormKind::Contact => &[
            "Tell us about the product you want built.",
            "",
            "We respond within 24 hours with a structured",
            "approach, timeline and proposal.",
        ],
        FormKind::Join => &[
            "Join a network of vetted developers working",
            "on real client projects.",
            "",
            "Remote-first. Paid engagements. Mentorship",
            "from senior engineers.",
        ],
        FormKind::Partner => &[
            "Referral partners, internship providers and",
            "technology collaborators welcome.",
            "",
            "Tell us what you have in mind and our",
            "partnerships team will follow up.",
        ],
    }
}

fn draw_side_panel(frame: &mut Frame, area: Rect, kind: FormKind, app: &App) {
    let mut lines: Vec<Line> = side_panel_text(kind)
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Gray))))
        .collect();

    if kind == FormKind::Contact {
        if let Some(number) = &app.config.whatsapp_number {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("WhatsApp: ", Style::default().fg(Color::DarkGray)),
                Span::styled(number.as_str(), Style::default().fg(Color::Green)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block("Why XSTN"));
    frame.render_widget(paragraph, area);
}

fn draw_confirmation(frame: &mut Frame, area: Rect, page: &FormPage) {
    let kind = page.form.kind;
    let name = page.form.controller.value("name");
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(Span::styled(
            format!("✓ {}", kind.success_title()),
            key_style(Color::Green),
        )),
        Line::from(""),
        Line::from(kind.success_message(name)),
        Line::from(""),
    ];

    let mut hints = vec![Span::raw("Press ")];
    // A backend may acknowledge without issuing an id
    if let Some(id) = page.confirmation_id() {
        content.push(Line::from(vec![
            Span::styled(
                format!("{}: ", kind.receipt_label()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(id, key_style(Color::Cyan)),
        ]));
        content.push(Line::from(""));
        hints.push(Span::styled("y", key_style(Color::Green)));
        hints.push(Span::raw(" to copy the id, "));
    }
    hints.push(Span::styled("n", key_style(Color::Yellow)));
    hints.push(Span::raw(" to submit another"));
    content.push(Line::from(hints));

    let dialog_width = area.width.min(70);
    let dialog_height = area.height.min(11);
    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(dialog, dialog_area);
}
