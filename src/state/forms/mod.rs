//! Form domain layer
//!
//! Field descriptors, validation rules, the generic form controller, and the
//! site's three lead-capture forms.

mod catalog;
mod field;
mod form_state;
mod rules;

pub use catalog::FormKind;
pub use field::FormField;
pub use form_state::{FormState, FormValues};
