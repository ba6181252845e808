//! UI module for rendering the TUI

mod about;
mod components;
mod forms;
mod home;
mod layout;
mod projects;
mod services;
mod widgets;

use crate::app::{App, PageView};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app);

    // Draw main content based on the mounted page
    match &app.view {
        PageView::Home {
            stats,
            services,
            projects,
        } => home::draw(frame, main_area, stats, services, projects),
        PageView::About { team, testimonials } => {
            about::draw(frame, main_area, team, testimonials)
        }
        PageView::Services(services) => services::draw(frame, main_area, services, app),
        PageView::Projects(projects) => projects::draw(frame, main_area, projects, app),
        PageView::Form(page) => forms::draw_lead_form(frame, main_area, page, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
