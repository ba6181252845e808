//! About page: core team and client testimonials

use super::widgets::{draw_fetch, titled_block};
use crate::state::{FetchController, TeamMember, Testimonial};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    team: &FetchController<Vec<TeamMember>>,
    testimonials: &FetchController<Vec<Testimonial>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_fetch(frame, chunks[0], "Core Team", team, |f, a, t| draw_team(f, a, t));
    draw_fetch(frame, chunks[1], "What Clients Say", testimonials, |f, a, t| {
        draw_testimonials(f, a, t)
    });
}

fn draw_team(frame: &mut Frame, area: Rect, team: &[TeamMember]) {
    let mut lines = Vec::new();
    for member in team {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", member.avatar),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(&member.name, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", member.role),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("     {}", member.skills.join(" · ")),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_block("Core Team"));
    frame.render_widget(paragraph, area);
}

fn draw_testimonials(frame: &mut Frame, area: Rect, testimonials: &[Testimonial]) {
    let mut lines = Vec::new();
    for testimonial in testimonials {
        lines.push(Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", testimonial.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", testimonial.initials),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(&testimonial.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(", {} · {}", testimonial.company, testimonial.kind),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block("What Clients Say"));
    frame.render_widget(paragraph, area);
}
