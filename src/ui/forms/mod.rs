//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `lead_form`: The lead forms, their failure banner and confirmation screen

mod field_renderer;
mod lead_form;

pub use lead_form::draw_lead_form;
