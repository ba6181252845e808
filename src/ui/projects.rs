//! Projects grid view

use super::widgets::{draw_fetch, inner, titled_block, truncate_str};
use crate::app::App;
use crate::state::{filter_projects, FetchController, Project, PROJECT_CATEGORIES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 6; // 1 (top border) + 4 (content) + 1 (bottom border)
const CARD_SPACING_H: u16 = 1;

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    fn new(usable_width: u16) -> Self {
        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.max(1);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = usable_width.saturating_sub(total_spacing) / columns as u16;

        Self {
            columns,
            card_width,
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get card area for a given position within the inner area
    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        Rect {
            x: inner.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: inner.y + (row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// Draw the projects page: category filter plus the filtered grid
pub fn draw(frame: &mut Frame, area: Rect, controller: &FetchController<Vec<Project>>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    draw_filter_bar(frame, chunks[0], app.state.project_category());

    draw_fetch(frame, chunks[1], "Projects", controller, |frame, area, projects| {
        let visible = filter_projects(projects, app.state.project_category());
        let title = format!("Projects ({})", visible.len());
        frame.render_widget(titled_block(&title), area);

        if visible.is_empty() {
            let message = Paragraph::new("No projects in this category yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(message, inner(area));
            return;
        }
        draw_cards(frame, inner(area), &visible, app.state.scroll_offset);
    });
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, active: &str) {
    let mut spans = vec![Span::styled(" Filter:", Style::default().fg(Color::DarkGray))];
    for category in PROJECT_CATEGORIES {
        let style = if *category == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {category} "), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Lay `projects` out as cards, skipping `skip_rows` grid rows
pub(super) fn draw_cards(frame: &mut Frame, area: Rect, projects: &[&Project], skip_rows: usize) {
    let grid = GridLayout::new(area.width);
    let max_skip = projects.len().saturating_sub(1) / grid.columns;
    let skip_rows = skip_rows.min(max_skip);

    for (idx, project) in projects.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        if row < skip_rows {
            continue;
        }
        let card_area = grid.card_area(area, row - skip_rows, col);

        // Skip if card is outside visible area
        if card_area.y + card_area.height > area.y + area.height {
            break;
        }
        draw_project_card(frame, card_area, project);
    }
}

/// Draw a single project card
fn draw_project_card(frame: &mut Frame, area: Rect, project: &Project) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let inner = inner(area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let status_color = if project.status == "Live" {
        Color::Green
    } else {
        Color::Yellow
    };

    let content = vec![
        Line::from(Span::styled(
            truncate_str(&project.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(&project.category, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" · {} · ", project.year),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(&project.status, Style::default().fg(status_color)),
        ]),
        Line::from(Span::styled(
            truncate_str(
                &format!(
                    "{} · {} · {} people",
                    project.client, project.duration, project.team
                ),
                width,
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate_str(&project.impact, width),
            Style::default().fg(Color::Green),
        )),
    ];
    frame.render_widget(Paragraph::new(content), inner);
}
