//! Home page: headline stats, featured services and recent projects

use super::projects::draw_cards;
use super::widgets::{draw_fetch, inner, titled_block, truncate_str};
use crate::state::{FetchController, Project, Service, Stat};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Services shown on the home page
const FEATURED_SERVICES: usize = 6;
/// Projects shown on the home page
const FEATURED_PROJECTS: usize = 3;

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    stats: &FetchController<Vec<Stat>>,
    services: &FetchController<Vec<Service>>,
    projects: &FetchController<Vec<Project>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(FEATURED_SERVICES as u16 + 2),
            Constraint::Length(8),
        ])
        .split(area);

    draw_fetch(frame, chunks[0], "Impact", stats, |f, a, s| draw_stats(f, a, s));
    draw_fetch(frame, chunks[1], "What We Build", services, |f, a, s| {
        draw_featured_services(f, a, s)
    });
    draw_fetch(frame, chunks[2], "Recent Work", projects, |frame, area, projects| {
        frame.render_widget(titled_block("Recent Work"), area);
        let featured: Vec<&Project> = projects.iter().take(FEATURED_PROJECTS).collect();
        draw_cards(frame, inner(area), &featured, 0);
    });
}

fn draw_stats(frame: &mut Frame, area: Rect, stats: &[Stat]) {
    let block = titled_block("Impact");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if stats.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(inner);

    for (stat, column) in stats.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                &stat.value,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(&stat.label, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }
}

fn draw_featured_services(frame: &mut Frame, area: Rect, services: &[Service]) {
    let block = titled_block("What We Build");
    let width = block.inner(area).width as usize;

    let lines: Vec<Line> = services
        .iter()
        .take(FEATURED_SERVICES)
        .map(|service| {
            let title = format!("{:<24}", service.title);
            let remaining = width.saturating_sub(title.chars().count() + 1);
            Line::from(vec![
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(
                    truncate_str(&service.short_desc, remaining),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
