//! Domain model types (pure).
//!
//! All types in this module are pure data; no I/O, no rendering.

pub mod airport;
pub mod error;
pub mod key_action;
pub mod ticket;

// Re-export for convenience
pub use airport::{Airport, AirportCatalog};
pub use error::{AppError, DataError};
pub use key_action::KeyAction;
pub use ticket::{ScoreTier, Ticket};
