//! Submit button shown under a lead form

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the button, borders included
pub const BUTTON_HEIGHT: u16 = 3;

/// What the submit row is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    /// Not focused; Ctrl+S still submits
    Idle,
    /// Cursor is on the submit row; Enter submits
    Focused,
    /// A submission is in flight
    Busy,
}

impl SubmitButton {
    pub fn new(focused: bool, pending: bool) -> Self {
        match (pending, focused) {
            (true, _) => SubmitButton::Busy,
            (false, true) => SubmitButton::Focused,
            (false, false) => SubmitButton::Idle,
        }
    }

    /// Text on the button for a form whose action reads `action`
    pub fn label(&self, action: &str) -> String {
        match self {
            SubmitButton::Busy => "Submitting...".to_string(),
            SubmitButton::Focused => format!("▸ {action} →"),
            SubmitButton::Idle => format!("{action} →"),
        }
    }

    /// Border and text colour
    fn accent(&self) -> Color {
        match self {
            SubmitButton::Idle => Color::DarkGray,
            SubmitButton::Focused => Color::Cyan,
            SubmitButton::Busy => Color::Yellow,
        }
    }

    /// Width that fits `label` with padding, capped at `max`
    pub fn width(label: &str, max: u16) -> u16 {
        let chars = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        chars.saturating_add(6).min(max)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, action: &str) {
        let accent = self.accent();
        let mut text_style = Style::default().fg(accent);
        if *self != SubmitButton::Idle {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        if *self == SubmitButton::Busy {
            text_style = text_style.add_modifier(Modifier::ITALIC);
        }

        let paragraph = Paragraph::new(self.label(action))
            .alignment(Alignment::Center)
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            );
        frame.render_widget(paragraph, area);
    }
}
