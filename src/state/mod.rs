//! UI state machine (pure).
//!
//! State transitions live here; rendering and terminal I/O live in
//! [`crate::view`].

mod app_state;
pub mod form;

pub use app_state::{AppState, Screen};
pub use form::{FormField, SearchForm};
