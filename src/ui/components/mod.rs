//! Reusable UI components

mod button;

pub use button::{SubmitButton, BUTTON_HEIGHT};
