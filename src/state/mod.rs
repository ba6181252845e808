//! Application state module

mod app_state;
mod controller;
mod fetch;
pub mod forms;
mod models;
mod mutation;
pub mod site;

pub use app_state::*;
pub use controller::NETWORK_ERROR;
pub use fetch::{FetchController, FetchState};
pub use forms::{FormField, FormKind, FormState, FormValues};
pub use models::*;
pub use mutation::MutationState;
pub use site::{SharedProvider, Submission};
